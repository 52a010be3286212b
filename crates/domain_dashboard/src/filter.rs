//! Record filtering
//!
//! The filter engine narrows a record list to the rows matching a
//! `FilterCriteria`. Predicates form an AND chain evaluated in a fixed order:
//!
//! 1. KPI status
//! 2. free-text search (policy number, transaction id, insured name)
//! 3. exact matches: source, line of business, product, program,
//!    transaction type, status dropdown
//! 4. issued date substring
//! 5. policy number substring
//! 6. premium range
//!
//! All predicates run in a single pass. The output keeps the input order
//! and the input is never modified.

use tracing::debug;

use crate::criteria::FilterCriteria;
use crate::record::PolicyRecord;

/// A single step of the predicate chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    KpiStatus,
    SearchTerm,
    ExactMatch,
    IssuedDate,
    PolicyNumber,
    PremiumRange,
}

impl Predicate {
    /// Evaluation order of the chain
    pub const ORDER: [Predicate; 6] = [
        Predicate::KpiStatus,
        Predicate::SearchTerm,
        Predicate::ExactMatch,
        Predicate::IssuedDate,
        Predicate::PolicyNumber,
        Predicate::PremiumRange,
    ];

    /// Returns true if `record` satisfies this predicate under `criteria`
    ///
    /// A predicate whose criterion is unset always passes.
    pub fn test(&self, record: &PolicyRecord, criteria: &FilterCriteria) -> bool {
        match self {
            Predicate::KpiStatus => criteria
                .kpi_status
                .map_or(true, |status| record.status == status),
            Predicate::SearchTerm => {
                if criteria.search_term.is_empty() {
                    return true;
                }
                let needle = criteria.search_term.to_lowercase();
                [&record.policy_number, &record.transaction_id, &record.insured_name]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            }
            Predicate::ExactMatch => {
                criteria.source.map_or(true, |v| record.source == v)
                    && criteria
                        .line_of_business
                        .map_or(true, |v| record.line_of_business == v)
                    && criteria.product.as_ref().map_or(true, |v| record.product == *v)
                    && criteria.program.as_ref().map_or(true, |v| record.program == *v)
                    && criteria
                        .transaction_type
                        .map_or(true, |v| record.transaction_type == v)
                    && criteria.status.map_or(true, |v| record.status == v)
            }
            Predicate::IssuedDate => {
                criteria.issued_date.is_empty()
                    || record.issued_date_text().contains(criteria.issued_date.as_str())
            }
            Predicate::PolicyNumber => {
                criteria.policy_number.is_empty()
                    || record
                        .policy_number
                        .to_lowercase()
                        .contains(&criteria.policy_number.to_lowercase())
            }
            Predicate::PremiumRange => criteria.premium_range.contains(record.premium),
        }
    }
}

/// Stateless filter over policy records
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterEngine;

impl FilterEngine {
    /// Creates a new filter engine
    pub fn new() -> Self {
        Self
    }

    /// Returns true if `record` passes every predicate, short-circuiting
    /// at the first failure in chain order
    pub fn matches(&self, record: &PolicyRecord, criteria: &FilterCriteria) -> bool {
        Predicate::ORDER
            .iter()
            .all(|predicate| predicate.test(record, criteria))
    }

    /// Borrows the matching records, in input order
    pub fn select<'a>(
        &self,
        records: &'a [PolicyRecord],
        criteria: &FilterCriteria,
    ) -> Vec<&'a PolicyRecord> {
        let selected: Vec<&PolicyRecord> = records
            .iter()
            .filter(|record| self.matches(record, criteria))
            .collect();

        debug!(total = records.len(), matched = selected.len(), "Filtered policy records");
        selected
    }

    /// Returns the matching records as a new list, in input order
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let criteria = FilterCriteria::for_records(&records)
    ///     .with_kpi_status(Some(PolicyStatus::Booked));
    /// let booked = FilterEngine::new().filter(&records, &criteria);
    /// ```
    pub fn filter(&self, records: &[PolicyRecord], criteria: &FilterCriteria) -> Vec<PolicyRecord> {
        self.select(records, criteria).into_iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::PremiumRange;
    use crate::record::{PolicyStatus, Product};
    use crate::sample::sample_policies;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_input_gives_empty_output() {
        let engine = FilterEngine::new();
        assert!(engine.filter(&[], &FilterCriteria::default()).is_empty());
    }

    #[test]
    fn test_unset_predicates_pass() {
        let records = sample_policies();
        let criteria = FilterCriteria::default();
        for predicate in Predicate::ORDER {
            assert!(records.iter().all(|r| predicate.test(r, &criteria)));
        }
    }

    #[test]
    fn test_search_is_case_insensitive_on_all_three_fields() {
        let records = sample_policies();
        let engine = FilterEngine::new();

        let by_name = engine.filter(&records, &FilterCriteria::default().with_search_term("SMITH"));
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].insured_name, "John Smith");

        let by_txn = engine.filter(&records, &FilterCriteria::default().with_search_term("txn-006"));
        assert_eq!(by_txn.len(), 1);
        assert_eq!(by_txn[0].policy_number, "POL-2024-006");
    }

    #[test]
    fn test_unknown_product_matches_nothing() {
        let records = sample_policies();
        let criteria = FilterCriteria::default().with_product(Some(Product::from("Pet Insurance")));
        assert!(FilterEngine::new().filter(&records, &criteria).is_empty());
    }

    #[test]
    fn test_kpi_and_dropdown_status_are_both_applied() {
        let records = sample_policies();
        let criteria = FilterCriteria::default()
            .with_kpi_status(Some(PolicyStatus::Booked))
            .with_status(Some(PolicyStatus::Rejected));
        assert!(FilterEngine::new().filter(&records, &criteria).is_empty());
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let records = sample_policies();
        let criteria = FilterCriteria::default().with_premium_range(dec!(2000), dec!(1000));
        assert!(FilterEngine::new().filter(&records, &criteria).is_empty());
        assert!(PremiumRange::new(dec!(2000), dec!(1000)).is_inverted());
    }
}
