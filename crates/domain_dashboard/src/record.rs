//! Policy records
//!
//! A `PolicyRecord` is one row of the dashboard table: a booked or in-flight
//! policy transaction as delivered by the record source. Records are
//! immutable once ingested.
//!
//! Every categorical field is a closed enum whose serialized form is the
//! human-readable label used by the upstream data ("New Business",
//! "Agent Portal", "Life & Health"). `Product` is the one open set: labels
//! outside the four known categories are kept as `Product::Other` so that
//! they survive ingestion while staying out of the category chart.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use core_kernel::temporal::{self, canonical_date};
use core_kernel::PolicyRecordId;

use crate::error::DashboardError;

/// Implements label conversions for a closed, `Copy` enum
macro_rules! labelled_enum {
    ($name:ident, $kind:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $name {
            /// All variants in display order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the label used in source data and on screen
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DashboardError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($label => Ok($name::$variant),)+
                    other => Err(DashboardError::unknown_label($kind, other)),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = DashboardError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.as_str().to_string()
            }
        }
    };
}

/// Processing status of a policy transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PolicyStatus {
    Booked,
    Posted,
    Rejected,
    Pending,
    Approved,
    InProcess,
    Hold,
}

labelled_enum!(PolicyStatus, "status", {
    Booked => "Booked",
    Posted => "Posted",
    Rejected => "Rejected",
    Pending => "Pending",
    Approved => "Approved",
    InProcess => "InProcess",
    Hold => "Hold",
});

impl PolicyStatus {
    /// Human-facing title ("In Process" rather than the "InProcess" key)
    pub fn title(&self) -> &'static str {
        match self {
            PolicyStatus::InProcess => "In Process",
            other => other.as_str(),
        }
    }

    /// Booked and Posted premiums are collected; everything else is outstanding
    pub fn is_resolved(&self) -> bool {
        matches!(self, PolicyStatus::Booked | PolicyStatus::Posted)
    }
}

/// Kind of transaction the record represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TransactionType {
    NewBusiness,
    Renewal,
    Endorsement,
    Cancellation,
}

labelled_enum!(TransactionType, "transaction type", {
    NewBusiness => "New Business",
    Renewal => "Renewal",
    Endorsement => "Endorsement",
    Cancellation => "Cancellation",
});

/// Channel the transaction arrived through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Source {
    AgentPortal,
    Direct,
    Broker,
    Online,
}

labelled_enum!(Source, "source", {
    AgentPortal => "Agent Portal",
    Direct => "Direct",
    Broker => "Broker",
    Online => "Online",
});

/// Top-level product grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LineOfBusiness {
    PersonalLines,
    Property,
    LifeAndHealth,
}

labelled_enum!(LineOfBusiness, "line of business", {
    PersonalLines => "Personal Lines",
    Property => "Property",
    LifeAndHealth => "Life & Health",
});

/// Insurance product
///
/// Parsing accepts both the full label ("Auto Insurance") and the chart
/// category name ("Auto"). Anything else becomes `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Product {
    Auto,
    Home,
    Life,
    Health,
    Other(String),
}

impl Product {
    /// The chart categories, in tie-break order
    pub const CATEGORIES: [Product; 4] = [Product::Auto, Product::Home, Product::Life, Product::Health];

    /// Full product label, e.g. "Auto Insurance"
    pub fn label(&self) -> &str {
        match self {
            Product::Auto => "Auto Insurance",
            Product::Home => "Home Insurance",
            Product::Life => "Life Insurance",
            Product::Health => "Health Insurance",
            Product::Other(label) => label,
        }
    }

    /// Short category name used by the chart, e.g. "Auto"
    pub fn category_name(&self) -> &str {
        match self {
            Product::Auto => "Auto",
            Product::Home => "Home",
            Product::Life => "Life",
            Product::Health => "Health",
            Product::Other(label) => label,
        }
    }

    /// Returns true for one of the four chart categories
    pub fn is_known(&self) -> bool {
        !matches!(self, Product::Other(_))
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for Product {
    fn from(value: String) -> Self {
        let known = match value.trim() {
            "Auto Insurance" | "Auto" => Some(Product::Auto),
            "Home Insurance" | "Home" => Some(Product::Home),
            "Life Insurance" | "Life" => Some(Product::Life),
            "Health Insurance" | "Health" => Some(Product::Health),
            _ => None,
        };
        known.unwrap_or(Product::Other(value))
    }
}

impl From<&str> for Product {
    fn from(value: &str) -> Self {
        Product::from(value.to_string())
    }
}

impl From<Product> for String {
    fn from(value: Product) -> String {
        match value {
            Product::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

/// One policy transaction row
///
/// Field aliases accept the flat lower-case keys of the legacy export
/// (`policynumber`, `lob`, `policystatus`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRecord {
    pub id: PolicyRecordId,
    #[serde(alias = "policynumber")]
    #[validate(length(min = 1))]
    pub policy_number: String,
    #[serde(alias = "transactionid")]
    #[validate(length(min = 1))]
    pub transaction_id: String,
    #[serde(alias = "transactiontype")]
    pub transaction_type: TransactionType,
    #[serde(alias = "endorseeffectivedate")]
    pub effective_date: NaiveDate,
    pub product: Product,
    pub program: String,
    #[serde(alias = "accountnumber")]
    pub account_number: String,
    #[serde(alias = "insuredname")]
    #[validate(length(min = 1))]
    pub insured_name: String,
    pub premium: Decimal,
    #[serde(alias = "policystatus")]
    pub status: PolicyStatus,
    pub source: Source,
    #[serde(alias = "issueddate")]
    pub issued_date: NaiveDate,
    #[serde(alias = "lob")]
    pub line_of_business: LineOfBusiness,
}

impl PolicyRecord {
    /// Issued date in canonical `YYYY-MM-DD` form
    pub fn issued_date_text(&self) -> String {
        canonical_date(self.issued_date)
    }

    /// Checks the record-level invariants
    ///
    /// # Errors
    ///
    /// - `InvalidRecord` when a required text field is empty
    /// - `NegativePremium` when premium is below zero
    /// - `DateOrder` when the issued date falls after the effective date
    pub fn check(&self) -> Result<(), DashboardError> {
        self.validate().map_err(|e| DashboardError::InvalidRecord {
            id: self.id,
            reason: e.to_string(),
        })?;

        if self.premium.is_sign_negative() && !self.premium.is_zero() {
            return Err(DashboardError::NegativePremium {
                id: self.id,
                premium: self.premium.to_string(),
            });
        }

        temporal::ensure_ordered(self.issued_date, self.effective_date)
            .map_err(|source| DashboardError::DateOrder { id: self.id, source })
    }
}

/// Builder for `PolicyRecord`
///
/// All identifying fields are required; `build` runs the same checks as
/// ingestion so a built record is always valid.
#[derive(Debug, Clone, Default)]
pub struct PolicyRecordBuilder {
    id: Option<PolicyRecordId>,
    policy_number: Option<String>,
    transaction_id: Option<String>,
    transaction_type: Option<TransactionType>,
    effective_date: Option<NaiveDate>,
    product: Option<Product>,
    program: Option<String>,
    account_number: Option<String>,
    insured_name: Option<String>,
    premium: Option<Decimal>,
    status: Option<PolicyStatus>,
    source: Option<Source>,
    issued_date: Option<NaiveDate>,
    line_of_business: Option<LineOfBusiness>,
}

impl PolicyRecordBuilder {
    /// Creates an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u64) -> Self {
        self.id = Some(PolicyRecordId::new(id));
        self
    }

    pub fn policy_number(mut self, value: impl Into<String>) -> Self {
        self.policy_number = Some(value.into());
        self
    }

    pub fn transaction_id(mut self, value: impl Into<String>) -> Self {
        self.transaction_id = Some(value.into());
        self
    }

    pub fn transaction_type(mut self, value: TransactionType) -> Self {
        self.transaction_type = Some(value);
        self
    }

    pub fn effective_date(mut self, value: NaiveDate) -> Self {
        self.effective_date = Some(value);
        self
    }

    pub fn product(mut self, value: impl Into<Product>) -> Self {
        self.product = Some(value.into());
        self
    }

    pub fn program(mut self, value: impl Into<String>) -> Self {
        self.program = Some(value.into());
        self
    }

    pub fn account_number(mut self, value: impl Into<String>) -> Self {
        self.account_number = Some(value.into());
        self
    }

    pub fn insured_name(mut self, value: impl Into<String>) -> Self {
        self.insured_name = Some(value.into());
        self
    }

    pub fn premium(mut self, value: Decimal) -> Self {
        self.premium = Some(value);
        self
    }

    pub fn status(mut self, value: PolicyStatus) -> Self {
        self.status = Some(value);
        self
    }

    pub fn source(mut self, value: Source) -> Self {
        self.source = Some(value);
        self
    }

    pub fn issued_date(mut self, value: NaiveDate) -> Self {
        self.issued_date = Some(value);
        self
    }

    pub fn line_of_business(mut self, value: LineOfBusiness) -> Self {
        self.line_of_business = Some(value);
        self
    }

    /// Builds the record
    ///
    /// # Errors
    ///
    /// Returns `MissingField` for any unset field, then any error from
    /// [`PolicyRecord::check`].
    pub fn build(self) -> Result<PolicyRecord, DashboardError> {
        let record = PolicyRecord {
            id: self.id.ok_or_else(|| DashboardError::missing("id"))?,
            policy_number: self.policy_number.ok_or_else(|| DashboardError::missing("policy_number"))?,
            transaction_id: self.transaction_id.ok_or_else(|| DashboardError::missing("transaction_id"))?,
            transaction_type: self.transaction_type.ok_or_else(|| DashboardError::missing("transaction_type"))?,
            effective_date: self.effective_date.ok_or_else(|| DashboardError::missing("effective_date"))?,
            product: self.product.ok_or_else(|| DashboardError::missing("product"))?,
            program: self.program.unwrap_or_default(),
            account_number: self.account_number.unwrap_or_default(),
            insured_name: self.insured_name.ok_or_else(|| DashboardError::missing("insured_name"))?,
            premium: self.premium.ok_or_else(|| DashboardError::missing("premium"))?,
            status: self.status.ok_or_else(|| DashboardError::missing("status"))?,
            source: self.source.ok_or_else(|| DashboardError::missing("source"))?,
            issued_date: self.issued_date.ok_or_else(|| DashboardError::missing("issued_date"))?,
            line_of_business: self.line_of_business.ok_or_else(|| DashboardError::missing("line_of_business"))?,
        };
        record.check()?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn builder() -> PolicyRecordBuilder {
        PolicyRecordBuilder::new()
            .id(1)
            .policy_number("POL-2024-001")
            .transaction_id("TXN-001-2024")
            .transaction_type(TransactionType::NewBusiness)
            .effective_date(date(2024, 1, 15))
            .product(Product::Auto)
            .program("Standard Auto")
            .account_number("ACC-001")
            .insured_name("John Smith")
            .premium(dec!(1250.00))
            .status(PolicyStatus::Pending)
            .source(Source::AgentPortal)
            .issued_date(date(2024, 1, 10))
            .line_of_business(LineOfBusiness::PersonalLines)
    }

    #[test]
    fn test_build_valid_record() {
        let record = builder().build().unwrap();
        assert_eq!(record.id, PolicyRecordId::new(1));
        assert_eq!(record.issued_date_text(), "2024-01-10");
    }

    #[test]
    fn test_build_missing_field() {
        let err = PolicyRecordBuilder::new().id(1).build().unwrap_err();
        assert!(matches!(err, DashboardError::MissingField(f) if f == "policy_number"));
    }

    #[test]
    fn test_build_rejects_negative_premium() {
        let err = builder().premium(dec!(-1)).build().unwrap_err();
        assert!(matches!(err, DashboardError::NegativePremium { .. }));
    }

    #[test]
    fn test_build_rejects_issued_after_effective() {
        let err = builder().issued_date(date(2024, 2, 1)).build().unwrap_err();
        assert!(matches!(err, DashboardError::DateOrder { .. }));
    }

    #[test]
    fn test_build_rejects_empty_insured_name() {
        let err = builder().insured_name("").build().unwrap_err();
        assert!(matches!(err, DashboardError::InvalidRecord { .. }));
    }

    #[test]
    fn test_status_labels() {
        assert_eq!("InProcess".parse::<PolicyStatus>().unwrap(), PolicyStatus::InProcess);
        assert_eq!(PolicyStatus::InProcess.title(), "In Process");
        assert!("Unknown".parse::<PolicyStatus>().is_err());
    }

    #[test]
    fn test_resolved_statuses() {
        let resolved: Vec<_> = PolicyStatus::ALL.iter().filter(|s| s.is_resolved()).collect();
        assert_eq!(resolved, vec![&PolicyStatus::Booked, &PolicyStatus::Posted]);
    }

    #[test]
    fn test_product_parsing_keeps_unknown_labels() {
        assert_eq!(Product::from("Home"), Product::Home);
        assert_eq!(Product::from("Life Insurance"), Product::Life);
        assert_eq!(
            Product::from("Pet Insurance"),
            Product::Other("Pet Insurance".to_string())
        );
        assert!(!Product::from("Pet Insurance").is_known());
    }

    #[test]
    fn test_enum_serde_uses_labels() {
        let json = serde_json::to_string(&LineOfBusiness::LifeAndHealth).unwrap();
        assert_eq!(json, "\"Life & Health\"");
        let parsed: Source = serde_json::from_str("\"Agent Portal\"").unwrap();
        assert_eq!(parsed, Source::AgentPortal);
        assert!(serde_json::from_str::<Source>("\"Carrier Pigeon\"").is_err());
    }

    #[test]
    fn test_record_accepts_legacy_keys() {
        let json = r#"{
            "id": 4,
            "policynumber": "POL-2024-004",
            "transactionid": "TXN-004-2024",
            "transactiontype": "New Business",
            "endorseeffectivedate": "2024-01-22",
            "product": "Health Insurance",
            "program": "Family Health",
            "accountnumber": "ACC-004",
            "insuredname": "Emily Davis",
            "premium": 1800.00,
            "policystatus": "Posted",
            "source": "Online",
            "issueddate": "2024-01-18",
            "lob": "Life & Health"
        }"#;
        let record: PolicyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.product, Product::Health);
        assert_eq!(record.status, PolicyStatus::Posted);
        assert_eq!(record.premium, dec!(1800));
        assert!(record.check().is_ok());
    }
}
