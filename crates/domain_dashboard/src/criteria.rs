//! Filter criteria
//!
//! `FilterCriteria` is a plain value: every user action produces a new value
//! with one field changed, and the filter engine is a function of it. This
//! keeps the engine input trivially comparable and serializable.
//!
//! Unset fields (`None` or empty strings) impose no constraint. The premium
//! range is always applied; its default spans the premiums of the record set
//! it was created for.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::record::{LineOfBusiness, PolicyRecord, PolicyStatus, Product, Source, TransactionType};

/// Inclusive premium band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl PremiumRange {
    /// Creates a range; `min > max` is allowed and matches nothing
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    /// Range admitting every non-negative premium
    pub fn unbounded() -> Self {
        Self::new(Decimal::ZERO, Decimal::MAX)
    }

    /// Smallest range covering every record's premium
    ///
    /// An empty slice yields the unbounded range.
    pub fn covering(records: &[PolicyRecord]) -> Self {
        let mut premiums = records.iter().map(|r| r.premium);
        let Some(first) = premiums.next() else {
            return Self::unbounded();
        };
        let (min, max) = premiums.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Self::new(min, max)
    }

    /// Returns true when `min <= premium <= max`
    pub fn contains(&self, premium: Decimal) -> bool {
        self.min <= premium && premium <= self.max
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

impl Default for PremiumRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// The full set of table filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Status chosen from a KPI tile
    pub kpi_status: Option<PolicyStatus>,
    /// Free text matched against policy number, transaction id and insured name
    pub search_term: String,
    pub source: Option<Source>,
    pub line_of_business: Option<LineOfBusiness>,
    pub product: Option<Product>,
    pub program: Option<String>,
    pub transaction_type: Option<TransactionType>,
    /// Status chosen from the status dropdown
    pub status: Option<PolicyStatus>,
    /// Substring of the canonical issued date, e.g. "2024-01"
    pub issued_date: String,
    /// Substring of the policy number
    pub policy_number: String,
    pub premium_range: PremiumRange,
}

impl FilterCriteria {
    /// Default criteria whose premium range spans `bounds`
    pub fn with_bounds(bounds: PremiumRange) -> Self {
        Self {
            premium_range: bounds,
            ..Self::default()
        }
    }

    /// Default criteria for a record set
    pub fn for_records(records: &[PolicyRecord]) -> Self {
        Self::with_bounds(PremiumRange::covering(records))
    }

    pub fn with_kpi_status(self, kpi_status: Option<PolicyStatus>) -> Self {
        Self { kpi_status, ..self }
    }

    pub fn with_search_term(self, term: impl Into<String>) -> Self {
        Self {
            search_term: term.into(),
            ..self
        }
    }

    pub fn with_source(self, source: Option<Source>) -> Self {
        Self { source, ..self }
    }

    pub fn with_line_of_business(self, line_of_business: Option<LineOfBusiness>) -> Self {
        Self {
            line_of_business,
            ..self
        }
    }

    pub fn with_product(self, product: Option<Product>) -> Self {
        Self { product, ..self }
    }

    pub fn with_program(self, program: Option<String>) -> Self {
        Self { program, ..self }
    }

    pub fn with_transaction_type(self, transaction_type: Option<TransactionType>) -> Self {
        Self {
            transaction_type,
            ..self
        }
    }

    pub fn with_status(self, status: Option<PolicyStatus>) -> Self {
        Self { status, ..self }
    }

    pub fn with_issued_date(self, issued_date: impl Into<String>) -> Self {
        Self {
            issued_date: issued_date.into(),
            ..self
        }
    }

    pub fn with_policy_number(self, policy_number: impl Into<String>) -> Self {
        Self {
            policy_number: policy_number.into(),
            ..self
        }
    }

    /// Moves the lower slider; ignored if it would pass the upper one
    pub fn with_premium_min(self, min: Decimal) -> Self {
        if min > self.premium_range.max {
            return self;
        }
        let premium_range = PremiumRange::new(min, self.premium_range.max);
        Self { premium_range, ..self }
    }

    /// Moves the upper slider; ignored if it would pass the lower one
    pub fn with_premium_max(self, max: Decimal) -> Self {
        if max < self.premium_range.min {
            return self;
        }
        let premium_range = PremiumRange::new(self.premium_range.min, max);
        Self { premium_range, ..self }
    }

    /// Sets both ends as given, without clamping
    pub fn with_premium_range(self, min: Decimal, max: Decimal) -> Self {
        Self {
            premium_range: PremiumRange::new(min, max),
            ..self
        }
    }

    /// Returns true if anything narrows the result compared to `bounds`
    pub fn has_active_filters(&self, bounds: &PremiumRange) -> bool {
        self.kpi_status.is_some()
            || !self.search_term.is_empty()
            || self.source.is_some()
            || !self.issued_date.is_empty()
            || self.line_of_business.is_some()
            || self.product.is_some()
            || self.program.is_some()
            || self.status.is_some()
            || !self.policy_number.is_empty()
            || self.transaction_type.is_some()
            || self.premium_range != *bounds
    }
}

/// Parses a dropdown value where "all" (or blank) means no constraint
pub fn parse_choice<T: FromStr>(value: &str) -> Result<Option<T>, T::Err> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    value.parse().map(Some)
}
