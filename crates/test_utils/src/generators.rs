//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random records and criteria
//! that maintain domain invariants (unique ids, non-negative premiums,
//! issued date on or before effective date).

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::PolicyRecordId;
use domain_dashboard::{
    FilterCriteria, LineOfBusiness, PolicyRecord, PolicyStatus, Product, Source, TransactionType,
};

/// Strategy for generating any policy status
pub fn status_strategy() -> impl Strategy<Value = PolicyStatus> {
    proptest::sample::select(PolicyStatus::ALL.to_vec())
}

/// Strategy for generating products, occasionally an unrecognised one
pub fn product_strategy() -> impl Strategy<Value = Product> {
    prop_oneof![
        4 => proptest::sample::select(Product::CATEGORIES.to_vec()),
        1 => Just(Product::Other("Pet Insurance".to_string())),
    ]
}

pub fn source_strategy() -> impl Strategy<Value = Source> {
    proptest::sample::select(Source::ALL.to_vec())
}

pub fn line_of_business_strategy() -> impl Strategy<Value = LineOfBusiness> {
    proptest::sample::select(LineOfBusiness::ALL.to_vec())
}

pub fn transaction_type_strategy() -> impl Strategy<Value = TransactionType> {
    proptest::sample::select(TransactionType::ALL.to_vec())
}

/// Strategy for program names drawn from a small fixed pool
pub fn program_strategy() -> impl Strategy<Value = String> {
    proptest::sample::select(vec![
        "Standard Auto",
        "Premium Auto",
        "Standard Home",
        "Premium Home",
        "Term Life",
        "Whole Life",
    ])
    .prop_map(str::to_string)
}

/// Strategy for non-negative premiums with cents (0.00 to 5,000.00)
pub fn premium_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..500_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
}

/// Strategy for (issued, effective) pairs with issued <= effective
pub fn date_pair_strategy() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (0i64..730, 0i64..60).prop_map(|(issued_offset, lag)| {
        let issued = base_date() + Duration::days(issued_offset);
        (issued, issued + Duration::days(lag))
    })
}

/// Strategy for a valid record with the given id
pub fn record_strategy(id: u64) -> impl Strategy<Value = PolicyRecord> {
    (
        status_strategy(),
        product_strategy(),
        source_strategy(),
        line_of_business_strategy(),
        transaction_type_strategy(),
        program_strategy(),
        premium_strategy(),
        date_pair_strategy(),
        proptest::sample::select(vec!["John Smith", "Sarah Johnson", "Ana Smithers", "Lee Wong"]),
    )
        .prop_map(
            move |(status, product, source, lob, transaction_type, program, premium, (issued, effective), name)| {
                PolicyRecord {
                    id: PolicyRecordId::new(id),
                    policy_number: format!("POL-{:04}", id),
                    transaction_id: format!("TXN-{:04}", id),
                    transaction_type,
                    effective_date: effective,
                    product,
                    program,
                    account_number: format!("ACC-{:04}", id),
                    insured_name: name.to_string(),
                    premium,
                    status,
                    source,
                    issued_date: issued,
                    line_of_business: lob,
                }
            },
        )
}

/// Strategy for a record list with unique, ascending ids
pub fn records_strategy(max_len: usize) -> impl Strategy<Value = Vec<PolicyRecord>> {
    (0..=max_len).prop_flat_map(|len| {
        (1..=len as u64)
            .map(record_strategy)
            .collect::<Vec<_>>()
    })
}

/// Strategy for criteria where each field is independently set or unset
pub fn criteria_strategy() -> impl Strategy<Value = FilterCriteria> {
    (
        proptest::option::of(status_strategy()),
        proptest::sample::select(vec!["", "smith", "POL-00", "txn", "zzz"]),
        proptest::option::of(source_strategy()),
        proptest::option::of(line_of_business_strategy()),
        proptest::option::of(product_strategy()),
        proptest::option::of(program_strategy()),
        proptest::option::of(transaction_type_strategy()),
        proptest::option::of(status_strategy()),
        (
            proptest::sample::select(vec!["", "2023", "2024-0", "-01-"]),
            proptest::sample::select(vec!["", "POL-0", "001", "pol-00"]),
        ),
        (premium_strategy(), premium_strategy()),
    )
        .prop_map(
            |(kpi, search, source, lob, product, program, transaction_type, status, (issued, policy_number), (a, b))| {
                FilterCriteria::default()
                    .with_kpi_status(kpi)
                    .with_search_term(search)
                    .with_source(source)
                    .with_line_of_business(lob)
                    .with_product(product)
                    .with_program(program)
                    .with_transaction_type(transaction_type)
                    .with_status(status)
                    .with_issued_date(issued)
                    .with_policy_number(policy_number)
                    .with_premium_range(a.min(b), a.max(b))
            },
        )
}
