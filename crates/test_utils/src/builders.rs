//! Test Data Builders
//!
//! Provides builder patterns for constructing test records with sensible
//! defaults. Tests specify only the fields they care about.
//!
//! `build` assembles the record directly and performs no validation, so
//! tests can also produce records that ingestion would reject.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use core_kernel::PolicyRecordId;
use domain_dashboard::{
    DashboardError, LineOfBusiness, PolicyRecord, PolicyRecordBuilder, PolicyStatus, Product,
    Source, TransactionType,
};

use crate::fixtures::{DateFixtures, ValueFixtures};

/// Builder for constructing test policy records
#[derive(Debug, Clone)]
pub struct TestPolicyRecordBuilder {
    id: u64,
    policy_number: Option<String>,
    transaction_id: Option<String>,
    transaction_type: TransactionType,
    effective_date: NaiveDate,
    product: Product,
    program: String,
    insured_name: String,
    premium: Decimal,
    status: PolicyStatus,
    source: Source,
    issued_date: NaiveDate,
    line_of_business: LineOfBusiness,
}

impl Default for TestPolicyRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPolicyRecordBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: 1,
            policy_number: None,
            transaction_id: None,
            transaction_type: ValueFixtures::transaction_type(),
            effective_date: DateFixtures::effective(),
            product: ValueFixtures::product(),
            program: "Standard Auto".to_string(),
            insured_name: "Test Insured".to_string(),
            premium: ValueFixtures::premium(),
            status: PolicyStatus::Pending,
            source: ValueFixtures::source(),
            issued_date: DateFixtures::issued(),
            line_of_business: ValueFixtures::line_of_business(),
        }
    }

    /// Sets the id; policy number and transaction id follow it unless set
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    pub fn with_policy_number(mut self, value: impl Into<String>) -> Self {
        self.policy_number = Some(value.into());
        self
    }

    pub fn with_transaction_id(mut self, value: impl Into<String>) -> Self {
        self.transaction_id = Some(value.into());
        self
    }

    pub fn with_transaction_type(mut self, value: TransactionType) -> Self {
        self.transaction_type = value;
        self
    }

    pub fn with_effective_date(mut self, value: NaiveDate) -> Self {
        self.effective_date = value;
        self
    }

    pub fn with_product(mut self, value: impl Into<Product>) -> Self {
        self.product = value.into();
        self
    }

    pub fn with_program(mut self, value: impl Into<String>) -> Self {
        self.program = value.into();
        self
    }

    pub fn with_insured_name(mut self, value: impl Into<String>) -> Self {
        self.insured_name = value.into();
        self
    }

    pub fn with_premium(mut self, value: Decimal) -> Self {
        self.premium = value;
        self
    }

    pub fn with_status(mut self, value: PolicyStatus) -> Self {
        self.status = value;
        self
    }

    pub fn with_source(mut self, value: Source) -> Self {
        self.source = value;
        self
    }

    pub fn with_issued_date(mut self, value: NaiveDate) -> Self {
        self.issued_date = value;
        self
    }

    pub fn with_line_of_business(mut self, value: LineOfBusiness) -> Self {
        self.line_of_business = value;
        self
    }

    /// Builds the record without validation
    pub fn build(self) -> PolicyRecord {
        PolicyRecord {
            id: PolicyRecordId::new(self.id),
            policy_number: self
                .policy_number
                .unwrap_or_else(|| format!("POL-TEST-{:04}", self.id)),
            transaction_id: self
                .transaction_id
                .unwrap_or_else(|| format!("TXN-TEST-{:04}", self.id)),
            transaction_type: self.transaction_type,
            effective_date: self.effective_date,
            product: self.product,
            program: self.program,
            account_number: format!("ACC-TEST-{:04}", self.id),
            insured_name: self.insured_name,
            premium: self.premium,
            status: self.status,
            source: self.source,
            issued_date: self.issued_date,
            line_of_business: self.line_of_business,
        }
    }

    /// Builds the record through the validating domain builder
    pub fn try_build(self) -> Result<PolicyRecord, DashboardError> {
        let record = self.build();
        PolicyRecordBuilder::new()
            .id(record.id.value())
            .policy_number(record.policy_number)
            .transaction_id(record.transaction_id)
            .transaction_type(record.transaction_type)
            .effective_date(record.effective_date)
            .product(record.product)
            .program(record.program)
            .account_number(record.account_number)
            .insured_name(record.insured_name)
            .premium(record.premium)
            .status(record.status)
            .source(record.source)
            .issued_date(record.issued_date)
            .line_of_business(record.line_of_business)
            .build()
    }
}
