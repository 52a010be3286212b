//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for filter results and aggregates
//! that give more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_dashboard::{AggregateResult, FilterCriteria, FilterEngine, PolicyRecord};
use rust_decimal::Decimal;

fn ids(records: &[PolicyRecord]) -> Vec<u64> {
    records.iter().map(|r| r.id.value()).collect()
}

/// Asserts that the records carry exactly the expected ids, in order
pub fn assert_ids(records: &[PolicyRecord], expected: &[u64]) {
    let actual = ids(records);
    assert_eq!(
        actual, expected,
        "Record ids differ: actual={:?}, expected={:?}",
        actual, expected
    );
}

/// Asserts that `output` is a subsequence of `input`
///
/// Every output record must appear in the input, in the same relative order.
pub fn assert_preserves_order(input: &[PolicyRecord], output: &[PolicyRecord]) {
    let mut remaining = input.iter();
    for record in output {
        assert!(
            remaining.any(|candidate| candidate == record),
            "Record {} is missing from the input or out of order; input ids={:?}, output ids={:?}",
            record.id,
            ids(input),
            ids(output)
        );
    }
}

/// Asserts that every record satisfies the criteria
pub fn assert_all_match(records: &[PolicyRecord], criteria: &FilterCriteria) {
    let engine = FilterEngine::new();
    for record in records {
        assert!(
            engine.matches(record, criteria),
            "Record {} does not satisfy criteria {:?}",
            record.id,
            criteria
        );
    }
}

/// Asserts that the status tiles never count more records than exist
pub fn assert_counts_bounded(result: &AggregateResult, record_count: usize) {
    let total = result.tile_total();
    assert!(
        total <= record_count as u64,
        "Status tiles count {} records but only {} exist",
        total,
        record_count
    );
    assert!(
        result.category_counts.total() <= record_count as u64,
        "Category counts sum to {} but only {} records exist",
        result.category_counts.total(),
        record_count
    );
}

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the currencies don't match or the amounts differ by more than tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts that a result is Ok and returns the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Asserts that a result is Err and returns the error
#[macro_export]
macro_rules! assert_err {
    ($result:expr) => {
        match $result {
            Ok(value) => panic!("Expected Err, got Ok: {:?}", value),
            Err(e) => e,
        }
    };
}

/// Asserts that an error matches a specific variant
#[macro_export]
macro_rules! assert_err_variant {
    ($result:expr, $pattern:pat) => {
        match $result {
            Ok(value) => panic!("Expected Err matching {}, got Ok({:?})", stringify!($pattern), value),
            Err(ref e) => {
                assert!(
                    matches!(e, $pattern),
                    "Error {:?} does not match pattern {}",
                    e,
                    stringify!($pattern)
                );
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::TestPolicyRecordBuilder;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    fn three() -> Vec<PolicyRecord> {
        (1..=3)
            .map(|id| TestPolicyRecordBuilder::new().with_id(id).build())
            .collect()
    }

    #[test]
    fn test_assert_ids() {
        assert_ids(&three(), &[1, 2, 3]);
    }

    #[test]
    fn test_assert_preserves_order_accepts_subsequence() {
        let input = three();
        let output = vec![input[0].clone(), input[2].clone()];
        assert_preserves_order(&input, &output);
    }

    #[test]
    #[should_panic(expected = "out of order")]
    fn test_assert_preserves_order_rejects_reordering() {
        let input = three();
        let output = vec![input[2].clone(), input[0].clone()];
        assert_preserves_order(&input, &output);
    }

    #[test]
    fn test_assert_all_match_with_default_criteria() {
        assert_all_match(&three(), &FilterCriteria::default());
    }

    #[test]
    #[should_panic(expected = "Currency mismatch")]
    fn test_assert_money_approx_eq_currency_mismatch() {
        let m1 = Money::new(dec!(100.00), Currency::USD);
        let m2 = Money::new(dec!(100.00), Currency::EUR);
        assert_money_approx_eq(&m1, &m2, dec!(0.01));
    }
}
