//! Policy Dashboard - Report Binary
//!
//! Prints the dashboard (KPI tiles, category chart, filtered policy table
//! and notification feed) as plain text.
//!
//! # Usage
//!
//! ```bash
//! # Sample book, no filters
//! cargo run --bin policy-dashboard
//!
//! # Records from a file, narrowed to rejected policies from brokers
//! DASHBOARD_RECORDS_PATH=records.json DASHBOARD_KPI=rejected DASHBOARD_SOURCE=Broker \
//!     cargo run --bin policy-dashboard
//! ```
//!
//! # Environment Variables
//!
//! * `DASHBOARD_RECORDS_PATH` - JSON file with the record list (default: sample book)
//! * `DASHBOARD_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `DASHBOARD_KPI` - KPI tile to select: Booked, Rejected, In Process, Pending
//! * `DASHBOARD_SEARCH` - Search term for policy number, transaction id or insured name
//! * `DASHBOARD_PRODUCT` - Product filter, e.g. "Auto Insurance" or "all"
//! * `DASHBOARD_SOURCE` - Source filter, e.g. "Agent Portal" or "all"
//! * `DASHBOARD_ISSUED_DATE` - Issued date substring, e.g. "2024-01"
//! * `DASHBOARD_PREMIUM_MIN` / `DASHBOARD_PREMIUM_MAX` - Premium band
//! * `DASHBOARD_DETAIL` - Record id to show in the detail view

use anyhow::Context;
use core_kernel::PolicyRecordId;
use interface_cli::{build_session, load_records, render_detail, render_report, DashboardConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_dashboard::sample::sample_notifications;

fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config()?;

    init_tracing(&config.log_level);

    tracing::info!(
        records_path = config.records_path.as_deref().unwrap_or("<sample>"),
        "Starting policy dashboard"
    );

    let records = load_records(&config).context("Failed to load policy records")?;
    let session = build_session(&config, records).context("Invalid dashboard settings")?;

    let feed = sample_notifications();
    print!("{}", render_report(&session, &feed).context("Failed to render report")?);

    if let Some(id) = config.detail {
        let detail = render_detail(&session, &feed, PolicyRecordId::new(id))
            .with_context(|| format!("Cannot show detail for record {}", id))?;
        println!();
        print!("{}", detail);
    }

    tracing::info!(visible = session.visible().len(), "Report complete");
    Ok(())
}

/// Loads dashboard configuration from environment variables.
///
/// A malformed value (e.g. `DASHBOARD_DETAIL=abc`) stops the run instead of
/// silently dropping the other settings.
fn load_config() -> anyhow::Result<DashboardConfig> {
    DashboardConfig::from_env().context("Invalid DASHBOARD_* configuration")
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so the report on stdout stays clean.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
