//! Dashboard domain errors
//!
//! Errors only arise at the ingestion boundary. Filtering and aggregation
//! are total over a validated record set and never fail.

use thiserror::Error;

use core_kernel::{CoreError, PolicyRecordId, TemporalError};

/// Errors that can occur in the dashboard domain
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Two records share an id
    #[error("Duplicate record id: {0}")]
    DuplicateId(PolicyRecordId),

    /// Premium below zero
    #[error("Record {id} has a negative premium: {premium}")]
    NegativePremium {
        id: PolicyRecordId,
        premium: String,
    },

    /// Issued date falls after the effective date
    #[error("Record {id}: {source}")]
    DateOrder {
        id: PolicyRecordId,
        #[source]
        source: TemporalError,
    },

    /// Required field is missing
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// A label did not name any known value
    #[error("Unknown {kind} label: '{value}'")]
    UnknownLabel {
        kind: &'static str,
        value: String,
    },

    /// Field-level validation failure
    #[error("Invalid record {id}: {reason}")]
    InvalidRecord {
        id: PolicyRecordId,
        reason: String,
    },

    /// Malformed JSON input
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error bubbled up from the kernel
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl DashboardError {
    /// Creates an unknown label error
    pub fn unknown_label(kind: &'static str, value: impl Into<String>) -> Self {
        DashboardError::UnknownLabel {
            kind,
            value: value.into(),
        }
    }

    /// Creates a missing field error
    pub fn missing(field: impl Into<String>) -> Self {
        DashboardError::MissingField(field.into())
    }
}
