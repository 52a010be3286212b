//! Plain-text dashboard report

use std::fmt::{self, Write};

use core_kernel::temporal::{long_date, short_date};
use core_kernel::{Currency, Money, PolicyRecordId};
use domain_dashboard::{
    progress_percent, DashboardSession, KpiTile, NotificationFeed, NotificationKind, PolicyRecord,
    ProcessingStep,
};

use crate::error::CliError;

/// Renders the KPI tiles, chart, result table and notification feed
///
/// The table is only shown once the session has searched, the same as the
/// interactive view.
pub fn render_report(session: &DashboardSession, feed: &NotificationFeed) -> Result<String, CliError> {
    let mut out = String::new();
    write_report(&mut out, session, feed)?;
    Ok(out)
}

/// Writes the report produced by [`render_report`] to any formatter sink
pub fn write_report<W: Write>(
    out: &mut W,
    session: &DashboardSession,
    feed: &NotificationFeed,
) -> fmt::Result {
    let stats = session.stats();

    writeln!(out, "Policy Dashboard")?;
    writeln!(out, "================")?;
    let tiles: Vec<String> = KpiTile::cards(&stats)
        .into_iter()
        .map(|card| format!("{}: {}", card.title, card.value))
        .collect();
    writeln!(out, "{}", tiles.join(" | "))?;
    writeln!(out)?;

    writeln!(out, "Policies by Category")?;
    for entry in stats.category_counts.entries() {
        writeln!(
            out,
            "  {:<8}{:>4}  ({})",
            entry.product.category_name(),
            entry.count,
            stats.category_counts.share(&entry.product)
        )?;
    }
    if stats.category_counts.total() > 0 {
        let top = stats.top_category();
        writeln!(
            out,
            "Top category: {} ({} policies)",
            top.product.category_name(),
            top.count
        )?;
    }
    writeln!(out)?;

    writeln!(out, "{}", session.summary())?;
    if session.has_searched() {
        writeln!(
            out,
            "{:<7}{:<15}{:<20}{:<18}{:<11}{:>10}  {}",
            "ID", "Policy", "Insured", "Product", "Status", "Premium", "Issued"
        )?;
        for record in session.visible() {
            writeln!(out, "{}", table_row(record))?;
        }
    }
    writeln!(out)?;

    writeln!(out, "Notifications ({} unread)", feed.unread_count())?;
    let by_kind: Vec<String> = NotificationKind::ALL
        .iter()
        .map(|kind| format!("{} {}", kind.label(), feed.unread_in(Some(*kind))))
        .collect();
    writeln!(out, "Unread by kind: {}", by_kind.join(", "))?;
    for notification in feed.all() {
        let marker = if notification.is_read { ' ' } else { '*' };
        writeln!(
            out,
            "{} [{}] {}: {} ({})",
            marker,
            notification.kind.label(),
            notification.title,
            notification.message,
            notification.age
        )?;
    }

    Ok(())
}

/// Renders the detail view of one record: fields, processing timeline and
/// related notifications
pub fn render_detail(
    session: &DashboardSession,
    feed: &NotificationFeed,
    id: PolicyRecordId,
) -> Result<String, CliError> {
    let record = session.records().get(id)?;
    let steps = session.timeline(id).unwrap_or_default();
    let mut out = String::new();
    write_detail(&mut out, record, &steps, feed)?;
    Ok(out)
}

fn write_detail<W: Write>(
    out: &mut W,
    record: &PolicyRecord,
    steps: &[ProcessingStep],
    feed: &NotificationFeed,
) -> fmt::Result {
    writeln!(out, "Policy {} ({})", record.policy_number, record.status.title())?;
    writeln!(out, "  Insured:          {}", record.insured_name)?;
    writeln!(out, "  Account:          {}", record.account_number)?;
    writeln!(out, "  Transaction:      {} ({})", record.transaction_id, record.transaction_type)?;
    writeln!(out, "  Product:          {} / {}", record.product, record.program)?;
    writeln!(out, "  Line of business: {}", record.line_of_business)?;
    writeln!(out, "  Source:           {}", record.source)?;
    writeln!(
        out,
        "  Premium:          {}",
        Money::new(record.premium, Currency::USD).format_grouped()
    )?;
    writeln!(out, "  Issued:           {}", long_date(record.issued_date))?;
    writeln!(out, "  Effective:        {}", long_date(record.effective_date))?;

    writeln!(out, "Processing ({}%)", progress_percent(steps))?;
    for step in steps {
        let at = step
            .at
            .map(|at| at.format("%H:%M").to_string())
            .unwrap_or_else(|| "--:--".to_string());
        writeln!(out, "  {}  {:<11}{}", at, step.stage.label(), step.state.label())?;
    }

    let related = feed.for_policy(&record.policy_number);
    if !related.is_empty() {
        writeln!(out, "Notifications")?;
        for notification in related {
            writeln!(out, "  {} ({})", notification.message, notification.age)?;
        }
    }

    Ok(())
}

fn table_row(record: &PolicyRecord) -> String {
    format!(
        "{:<7}{:<15}{:<20}{:<18}{:<11}{:>10}  {}",
        record.id.to_string(),
        record.policy_number,
        record.insured_name,
        record.product.label(),
        record.status.title(),
        Money::new(record.premium, Currency::USD).format_grouped(),
        short_date(record.issued_date)
    )
}
