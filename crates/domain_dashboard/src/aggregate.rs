//! KPI and chart aggregates
//!
//! The aggregate calculator derives the dashboard's summary numbers from a
//! record list: counts for the four status tiles, the outstanding premium,
//! and per-product counts for the category chart.
//!
//! The dashboard always feeds it the full, unfiltered record set so the
//! tiles stay put while the table is being filtered. Nothing here stops a
//! caller from aggregating a filtered subset instead.
//!
//! # Outstanding premium
//!
//! Booked and Posted premiums count as collected. Every other status,
//! including Approved and Hold, counts as outstanding.

use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{Currency, Money, Percentage};

use crate::record::{PolicyRecord, PolicyStatus, Product};

/// Per-product record counts for the chart
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub auto: u64,
    pub home: u64,
    pub life: u64,
    pub health: u64,
}

/// A chart category with its count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub product: Product,
    pub count: u64,
}

impl CategoryCounts {
    /// Count for one category; `Product::Other` is never counted
    pub fn get(&self, product: &Product) -> u64 {
        match product {
            Product::Auto => self.auto,
            Product::Home => self.home,
            Product::Life => self.life,
            Product::Health => self.health,
            Product::Other(_) => 0,
        }
    }

    fn increment(&mut self, product: &Product) {
        match product {
            Product::Auto => self.auto += 1,
            Product::Home => self.home += 1,
            Product::Life => self.life += 1,
            Product::Health => self.health += 1,
            Product::Other(_) => {}
        }
    }

    /// Categories with their counts, in chart order
    pub fn entries(&self) -> Vec<CategoryCount> {
        Product::CATEGORIES
            .iter()
            .map(|product| CategoryCount {
                product: product.clone(),
                count: self.get(product),
            })
            .collect()
    }

    /// Records across the four known categories
    pub fn total(&self) -> u64 {
        self.auto + self.home + self.life + self.health
    }

    /// Category with the strictly greatest count
    ///
    /// Ties go to the earlier category in chart order (Auto, Home, Life,
    /// Health). With no records this is Auto with a count of 0, which
    /// callers should read as "no data".
    pub fn top_category(&self) -> CategoryCount {
        let mut best = CategoryCount {
            product: Product::Auto,
            count: self.auto,
        };
        for product in &Product::CATEGORIES[1..] {
            let count = self.get(product);
            if count > best.count {
                best = CategoryCount {
                    product: product.clone(),
                    count,
                };
            }
        }
        best
    }

    /// Share of the known-category total held by `product`
    pub fn share(&self, product: &Product) -> Percentage {
        Percentage::share_of(self.get(product), self.total())
    }
}

/// Summary numbers for the KPI tiles and chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub booked: u64,
    pub rejected: u64,
    pub in_process: u64,
    pub pending: u64,
    pub outstanding_premium: Money,
    pub category_counts: CategoryCounts,
    /// Records of any status, including Posted, Approved and Hold
    pub record_count: u64,
    status_counts: Vec<(PolicyStatus, u64)>,
}

impl AggregateResult {
    /// Records with the given status
    pub fn count_by_status(&self, status: PolicyStatus) -> u64 {
        self.status_counts
            .iter()
            .find(|(s, _)| *s == status)
            .map_or(0, |(_, count)| *count)
    }

    /// Sum of the four tile counts
    pub fn tile_total(&self) -> u64 {
        self.booked + self.rejected + self.in_process + self.pending
    }

    pub fn top_category(&self) -> CategoryCount {
        self.category_counts.top_category()
    }
}

/// Computes aggregates over a record list
#[derive(Debug, Clone, Copy)]
pub struct AggregateCalculator {
    currency: Currency,
}

impl Default for AggregateCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl AggregateCalculator {
    /// Creates a calculator reporting in USD
    pub fn new() -> Self {
        Self {
            currency: Currency::USD,
        }
    }

    /// Sets the reporting currency for the outstanding premium
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Aggregates `records` in a single pass
    pub fn aggregate(&self, records: &[PolicyRecord]) -> AggregateResult {
        let mut status_counts: Vec<(PolicyStatus, u64)> =
            PolicyStatus::ALL.iter().map(|s| (*s, 0)).collect();
        let mut category_counts = CategoryCounts::default();

        for record in records {
            if let Some(entry) = status_counts.iter_mut().find(|(s, _)| *s == record.status) {
                entry.1 += 1;
            }
            category_counts.increment(&record.product);
        }

        let outstanding_premium = Money::sum(
            records
                .iter()
                .filter(|r| !r.status.is_resolved())
                .map(|r| r.premium),
            self.currency,
        );

        let count = |status: PolicyStatus| {
            status_counts
                .iter()
                .find(|(s, _)| *s == status)
                .map_or(0, |(_, c)| *c)
        };

        let result = AggregateResult {
            booked: count(PolicyStatus::Booked),
            rejected: count(PolicyStatus::Rejected),
            in_process: count(PolicyStatus::InProcess),
            pending: count(PolicyStatus::Pending),
            outstanding_premium,
            category_counts,
            record_count: records.len() as u64,
            status_counts,
        };

        debug!(
            records = result.record_count,
            booked = result.booked,
            outstanding = %result.outstanding_premium,
            "Aggregated policy records"
        );
        result
    }
}
