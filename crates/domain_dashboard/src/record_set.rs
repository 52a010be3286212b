//! Validated record sets
//!
//! The record source hands over a flat list of rows. `RecordSet` is the
//! ingestion boundary: it checks every record and the set-level uniqueness
//! of ids once, so that filtering and aggregation downstream can stay total.

use std::collections::HashSet;
use std::ops::Deref;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use core_kernel::{CoreError, PolicyRecordId};

use crate::criteria::PremiumRange;
use crate::error::DashboardError;
use crate::record::PolicyRecord;

/// An ordered, validated collection of policy records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecordSet {
    records: Vec<PolicyRecord>,
}

impl RecordSet {
    /// Validates and wraps a list of records, keeping their order
    ///
    /// # Errors
    ///
    /// Returns the first record-level error found, `DuplicateId` when two
    /// records share an id, or `InvalidRecord` for the record whose premium
    /// pushes the book total past the range of `Decimal`.
    pub fn new(records: Vec<PolicyRecord>) -> Result<Self, DashboardError> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut total = Decimal::ZERO;
        for record in &records {
            record.check()?;
            if !seen.insert(record.id) {
                return Err(DashboardError::DuplicateId(record.id));
            }
            total = total
                .checked_add(record.premium)
                .ok_or_else(|| DashboardError::InvalidRecord {
                    id: record.id,
                    reason: "premium total of the record set overflows".to_string(),
                })?;
        }

        info!(count = records.len(), "Record set ingested");
        Ok(Self { records })
    }

    /// Parses a JSON array of records and validates it
    pub fn from_json(json: &str) -> Result<Self, DashboardError> {
        let records: Vec<PolicyRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Returns the records as a slice
    pub fn records(&self) -> &[PolicyRecord] {
        &self.records
    }

    /// Looks up a record by id
    pub fn find(&self, id: PolicyRecordId) -> Option<&PolicyRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Looks up a record by id, failing with `NotFound` when absent
    pub fn get(&self, id: PolicyRecordId) -> Result<&PolicyRecord, DashboardError> {
        self.find(id)
            .ok_or_else(|| CoreError::not_found(format!("Record {} not found", id)).into())
    }

    /// The [min, max] premium of the set, used as the default slider range
    ///
    /// An empty set yields the unbounded range.
    pub fn premium_bounds(&self) -> PremiumRange {
        PremiumRange::covering(&self.records)
    }

    /// Total premium across the set; fits by construction
    pub fn total_premium(&self) -> Decimal {
        self.records.iter().map(|r| r.premium).sum()
    }
}

impl Deref for RecordSet {
    type Target = [PolicyRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl TryFrom<Vec<PolicyRecord>> for RecordSet {
    type Error = DashboardError;

    fn try_from(records: Vec<PolicyRecord>) -> Result<Self, Self::Error> {
        Self::new(records)
    }
}
