//! Built-in sample book
//!
//! Eight policies (two per product) and seven notifications, used when no
//! record file is configured and as the shared scenario in tests.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{NotificationId, PolicyRecordId};

use crate::notifications::{Notification, NotificationFeed, NotificationKind};
use crate::record::{LineOfBusiness, PolicyRecord, PolicyStatus, Product, Source, TransactionType};
use crate::record_set::RecordSet;

fn day(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn policy(
    id: u64,
    transaction_type: TransactionType,
    effective: (u32, u32),
    product: Product,
    program: &str,
    insured_name: &str,
    premium: Decimal,
    status: PolicyStatus,
    source: Source,
    issued: (u32, u32),
    line_of_business: LineOfBusiness,
) -> PolicyRecord {
    PolicyRecord {
        id: PolicyRecordId::new(id),
        policy_number: format!("POL-2024-{:03}", id),
        transaction_id: format!("TXN-{:03}-2024", id),
        transaction_type,
        effective_date: day(effective.0, effective.1),
        product,
        program: program.to_string(),
        account_number: format!("ACC-{:03}", id),
        insured_name: insured_name.to_string(),
        premium,
        status,
        source,
        issued_date: day(issued.0, issued.1),
        line_of_business,
    }
}

/// The eight sample policies, in id order
pub fn sample_policies() -> Vec<PolicyRecord> {
    use LineOfBusiness::*;
    use TransactionType::*;

    vec![
        policy(1, NewBusiness, (1, 15), Product::Auto, "Standard Auto", "John Smith",
            dec!(1250.00), PolicyStatus::Pending, Source::AgentPortal, (1, 10), PersonalLines),
        policy(2, Renewal, (1, 20), Product::Home, "Premium Home", "Sarah Johnson",
            dec!(2100.00), PolicyStatus::Booked, Source::Direct, (1, 15), Property),
        policy(3, Endorsement, (1, 18), Product::Life, "Term Life", "Michael Brown",
            dec!(850.00), PolicyStatus::Rejected, Source::Broker, (1, 12), LifeAndHealth),
        policy(4, NewBusiness, (1, 22), Product::Health, "Family Health", "Emily Davis",
            dec!(1800.00), PolicyStatus::Posted, Source::Online, (1, 18), LifeAndHealth),
        policy(5, Renewal, (1, 25), Product::Auto, "Premium Auto", "David Wilson",
            dec!(1350.00), PolicyStatus::InProcess, Source::AgentPortal, (1, 20), PersonalLines),
        policy(6, Endorsement, (1, 28), Product::Home, "Standard Home", "Lisa Martinez",
            dec!(2250.00), PolicyStatus::Hold, Source::Direct, (1, 22), Property),
        policy(7, Cancellation, (2, 1), Product::Health, "Individual Health", "Robert Taylor",
            dec!(1650.00), PolicyStatus::Rejected, Source::Broker, (1, 25), LifeAndHealth),
        policy(8, NewBusiness, (2, 3), Product::Life, "Whole Life", "Jennifer Anderson",
            dec!(950.00), PolicyStatus::Booked, Source::Online, (1, 28), LifeAndHealth),
    ]
}

/// The sample policies as a validated set
///
/// # Panics
///
/// If the built-in rows fail an ingestion check.
pub fn sample_record_set() -> RecordSet {
    RecordSet::new(sample_policies()).expect("built-in sample book satisfies record invariants")
}

fn notification(
    id: u64,
    kind: NotificationKind,
    status: PolicyStatus,
    title: &str,
    message: &str,
    age: &str,
    is_read: bool,
) -> Notification {
    Notification {
        id: NotificationId::new(id),
        kind,
        status,
        title: title.to_string(),
        message: message.to_string(),
        age: age.to_string(),
        is_read,
        policy_number: Some(format!("POL-2024-{:03}", id)),
    }
}

/// The seven sample notifications, newest first
pub fn sample_notifications() -> NotificationFeed {
    use NotificationKind::*;

    NotificationFeed::new(vec![
        notification(1, Success, PolicyStatus::Booked, "Policy Premium Booked",
            "POL-2024-001 premium has been successfully booked", "1 hour ago", false),
        notification(2, Success, PolicyStatus::Posted, "Policy Premium Booked",
            "POL-2024-002 premium has been successfully posted", "2 hours ago", false),
        notification(3, Error, PolicyStatus::Rejected, "Policy Failed",
            "POL-2024-003 has been rejected due to incomplete documentation", "3 hours ago", false),
        notification(4, Info, PolicyStatus::Pending, "Policy Pending Review",
            "POL-2024-004 requires immediate attention", "4 hours ago", false),
        notification(5, Success, PolicyStatus::Approved, "Policy Premium Booked",
            "POL-2024-005 has been successfully approved and issued", "6 hours ago", true),
        notification(6, Error, PolicyStatus::Rejected, "Policy Failed",
            "POL-2024-006 payment processing failed", "1 day ago", true),
        notification(7, Success, PolicyStatus::Posted, "Policy Premium Booked",
            "POL-2024-007 premium has been successfully posted", "1 day ago", true),
    ])
}
