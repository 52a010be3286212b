//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the dashboard. The sample book is
//! built once and shared; tests take clones.

use chrono::NaiveDate;
use fake::faker::name::en::Name;
use fake::Fake;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_dashboard::sample::{sample_notifications, sample_policies};
use domain_dashboard::{
    LineOfBusiness, NotificationFeed, PolicyRecord, PolicyStatus, Product, RecordSet, Source,
    TransactionType,
};

static SAMPLE_BOOK: Lazy<Vec<PolicyRecord>> = Lazy::new(sample_policies);

/// Fixture for policy record test data
pub struct PolicyFixtures;

impl PolicyFixtures {
    /// The eight sample policies (Auto, Home, Life, Health x2, mixed statuses)
    pub fn sample_book() -> Vec<PolicyRecord> {
        SAMPLE_BOOK.clone()
    }

    /// The sample policies as a validated record set
    pub fn sample_set() -> RecordSet {
        RecordSet::new(Self::sample_book()).expect("sample book is valid")
    }

    /// Ids of the sample records, in order
    pub fn sample_ids() -> Vec<u64> {
        SAMPLE_BOOK.iter().map(|r| r.id.value()).collect()
    }

    /// A sample record by id (1..=8)
    pub fn sample(id: u64) -> PolicyRecord {
        SAMPLE_BOOK
            .iter()
            .find(|r| r.id.value() == id)
            .cloned()
            .unwrap_or_else(|| panic!("no sample record with id {}", id))
    }

    /// A record with only the fields aggregates look at set meaningfully
    pub fn with_status_and_premium(id: u64, status: PolicyStatus, premium: Decimal) -> PolicyRecord {
        crate::builders::TestPolicyRecordBuilder::new()
            .with_id(id)
            .with_status(status)
            .with_premium(premium)
            .build()
    }

    /// A valid record with a randomly generated insured name
    pub fn random_insured(id: u64) -> PolicyRecord {
        let name: String = Name().fake();
        crate::builders::TestPolicyRecordBuilder::new()
            .with_id(id)
            .with_insured_name(name)
            .build()
    }
}

/// Fixture for notification test data
pub struct NotificationFixtures;

impl NotificationFixtures {
    pub fn sample_feed() -> NotificationFeed {
        sample_notifications()
    }
}

/// Fixture for dates
pub struct DateFixtures;

impl DateFixtures {
    /// Standard issued date (Jan 10, 2024)
    pub fn issued() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    /// Standard effective date (Jan 15, 2024)
    pub fn effective() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }
}

/// Fixture for commonly used field values
pub struct ValueFixtures;

impl ValueFixtures {
    pub fn premium() -> Decimal {
        dec!(1250.00)
    }

    pub fn product() -> Product {
        Product::Auto
    }

    pub fn source() -> Source {
        Source::AgentPortal
    }

    pub fn line_of_business() -> LineOfBusiness {
        LineOfBusiness::PersonalLines
    }

    pub fn transaction_type() -> TransactionType {
        TransactionType::NewBusiness
    }
}
