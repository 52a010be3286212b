//! Policy Dashboard CLI
//!
//! Loads a record set, applies the initial criteria from configuration and
//! renders the dashboard as plain text.
//!
//! # Modules
//!
//! - `config`: Environment-driven configuration
//! - `error`: CLI error types
//! - `report`: Plain-text rendering of a dashboard session

pub mod config;
pub mod error;
pub mod report;

use std::fs;

use tracing::{debug, info};

use domain_dashboard::{
    parse_choice, sample, DashboardSession, FilterCriteria, KpiTile, PremiumRange, Product,
    RecordSet, Source,
};

pub use config::DashboardConfig;
pub use error::CliError;
pub use report::{render_detail, render_report, write_report};

/// Loads the record set named by the configuration, or the sample book
pub fn load_records(config: &DashboardConfig) -> Result<RecordSet, CliError> {
    let Some(path) = config.records_path.as_deref() else {
        info!("No records path configured; using the sample book");
        return Ok(sample::sample_record_set());
    };

    let json = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_string(),
        source,
    })?;
    let records = RecordSet::from_json(&json)?;
    info!(path, count = records.len(), "Loaded records");
    Ok(records)
}

/// Builds the initial criteria from configuration
pub fn criteria_from_config(
    config: &DashboardConfig,
    bounds: PremiumRange,
) -> Result<FilterCriteria, CliError> {
    let source = match config.source.as_deref() {
        Some(value) => {
            parse_choice::<Source>(value).map_err(|e| CliError::invalid_setting("source", e))?
        }
        None => None,
    };

    let min = config.premium_min.unwrap_or(bounds.min);
    let max = config.premium_max.unwrap_or(bounds.max);
    if min > max {
        return Err(CliError::invalid_setting(
            "premium range",
            format!("minimum {} is above maximum {}", min, max),
        ));
    }

    let criteria = FilterCriteria::with_bounds(bounds)
        .with_search_term(config.search.clone().unwrap_or_default())
        .with_product(config.product.as_deref().and_then(product_choice))
        .with_source(source)
        .with_issued_date(config.issued_date.clone().unwrap_or_default())
        .with_premium_range(min, max);

    debug!(?criteria, "Initial criteria");
    Ok(criteria)
}

fn product_choice(value: &str) -> Option<Product> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("all") {
        return None;
    }
    Some(Product::from(value))
}

/// Starts a session over `records` with the configured criteria and KPI
pub fn build_session(
    config: &DashboardConfig,
    records: RecordSet,
) -> Result<DashboardSession, CliError> {
    let mut session = DashboardSession::new(records);
    let criteria = criteria_from_config(config, session.premium_bounds())?;
    session.apply(criteria);

    if config.has_initial_filters() {
        session.search();
    }

    if let Some(kpi) = config.kpi.as_deref().filter(|k| !k.trim().is_empty()) {
        let tile: KpiTile = kpi.parse().map_err(|e| CliError::invalid_setting("kpi", e))?;
        session.select_kpi(tile);
    }

    Ok(session)
}
