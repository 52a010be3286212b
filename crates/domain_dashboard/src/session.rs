//! Dashboard session state
//!
//! `DashboardSession` is what a front end holds on to: the full record set,
//! the current criteria, whether the user has searched yet, and the visible
//! subset. Every state change goes through a method that replaces the
//! criteria and recomputes the visible rows, so the rows always agree with
//! the criteria.

use tracing::{info, warn};

use core_kernel::PolicyRecordId;

use crate::aggregate::{AggregateCalculator, AggregateResult};
use crate::criteria::{FilterCriteria, PremiumRange};
use crate::filter::FilterEngine;
use crate::kpi::KpiTile;
use crate::record::PolicyRecord;
use crate::record_set::RecordSet;
use crate::tracking::{processing_steps, ProcessingStep};

/// Interactive state of one dashboard view
#[derive(Debug, Clone)]
pub struct DashboardSession {
    records: RecordSet,
    bounds: PremiumRange,
    criteria: FilterCriteria,
    visible: Vec<PolicyRecord>,
    has_searched: bool,
    engine: FilterEngine,
    calculator: AggregateCalculator,
}

impl DashboardSession {
    /// Starts a session with default criteria and every record visible
    pub fn new(records: RecordSet) -> Self {
        let bounds = records.premium_bounds();
        let criteria = FilterCriteria::with_bounds(bounds);
        let visible = records.records().to_vec();

        Self {
            records,
            bounds,
            criteria,
            visible,
            has_searched: false,
            engine: FilterEngine::new(),
            calculator: AggregateCalculator::new(),
        }
    }

    /// KPI and chart aggregates over the full record set
    pub fn stats(&self) -> AggregateResult {
        self.calculator.aggregate(self.records.records())
    }

    /// Handles a click on a KPI tile
    ///
    /// Status tiles set the KPI selector and mark the session as searched.
    /// The outstanding premium tile has no status and is ignored.
    pub fn select_kpi(&mut self, tile: KpiTile) {
        let Some(status) = tile.status() else {
            warn!(tile = tile.title(), "KPI tile does not select a status; ignoring");
            return;
        };

        info!(%status, "KPI tile selected");
        self.has_searched = true;
        let criteria = self.criteria.clone().with_kpi_status(Some(status));
        self.apply(criteria);
    }

    /// Replaces the criteria and recomputes the visible rows
    pub fn apply(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.visible = self.engine.filter(self.records.records(), &self.criteria);
    }

    /// Marks that the user ran a search, revealing the table
    pub fn search(&mut self) {
        self.has_searched = true;
        info!(visible = self.visible.len(), "Search submitted");
    }

    /// Resets every filter and hides the table again
    pub fn clear(&mut self) {
        self.has_searched = false;
        self.apply(FilterCriteria::with_bounds(self.bounds));
        info!("Filters cleared");
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn visible(&self) -> &[PolicyRecord] {
        &self.visible
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    /// Default premium range of this session's records
    pub fn premium_bounds(&self) -> PremiumRange {
        self.bounds
    }

    pub fn has_active_filters(&self) -> bool {
        self.criteria.has_active_filters(&self.bounds)
    }

    /// Record for the detail view
    pub fn find(&self, id: PolicyRecordId) -> Option<&PolicyRecord> {
        self.records.find(id)
    }

    /// Processing timeline for a record in the detail view
    pub fn timeline(&self, id: PolicyRecordId) -> Option<Vec<ProcessingStep>> {
        self.find(id).map(|record| processing_steps(record.status))
    }

    /// Result line shown above the table
    pub fn summary(&self) -> String {
        if !self.has_searched {
            return "Use filters or search to find policies".to_string();
        }
        let mut line = format!(
            "{} of {} policies found",
            self.visible.len(),
            self.records.len()
        );
        if let Some(status) = self.criteria.kpi_status {
            line.push_str(&format!(" (filtered by {})", status));
        }
        line
    }
}
