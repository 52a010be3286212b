//! Record ingestion tests
//!
//! `RecordSet` is the only place dashboard errors arise; these tests cover
//! each rejection and the JSON formats accepted.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{CoreError, PolicyRecordId};
use domain_dashboard::{AggregateCalculator, DashboardError, PolicyStatus, Product, RecordSet};
use test_utils::{assert_err, assert_err_variant, assert_ok, PolicyFixtures, TestPolicyRecordBuilder};

mod validation {
    use super::*;

    #[test]
    fn test_sample_book_is_accepted_in_order() {
        let set = assert_ok!(RecordSet::new(PolicyFixtures::sample_book()));
        let ids: Vec<u64> = set.iter().map(|r| r.id.value()).collect();
        assert_eq!(ids, PolicyFixtures::sample_ids());
        assert_eq!(set.total_premium(), dec!(12200));
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let records = vec![
            TestPolicyRecordBuilder::new().with_id(1).build(),
            TestPolicyRecordBuilder::new().with_id(1).with_policy_number("POL-OTHER").build(),
        ];
        match RecordSet::new(records) {
            Err(DashboardError::DuplicateId(id)) => assert_eq!(id, PolicyRecordId::new(1)),
            other => panic!("Expected DuplicateId, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_premium_is_rejected() {
        let records = vec![TestPolicyRecordBuilder::new().with_premium(dec!(-0.01)).build()];
        assert_err_variant!(RecordSet::new(records), DashboardError::NegativePremium { .. });
    }

    #[test]
    fn test_zero_premium_is_accepted() {
        let records = vec![TestPolicyRecordBuilder::new().with_premium(dec!(0)).build()];
        assert!(RecordSet::new(records).is_ok());
    }

    #[test]
    fn test_issued_after_effective_is_rejected() {
        let records = vec![TestPolicyRecordBuilder::new()
            .with_issued_date(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())
            .with_effective_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .build()];
        assert_err_variant!(RecordSet::new(records), DashboardError::DateOrder { .. });
    }

    #[test]
    fn test_same_day_issue_is_accepted() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let record = TestPolicyRecordBuilder::new()
            .with_issued_date(day)
            .with_effective_date(day)
            .try_build();
        assert!(record.is_ok());
    }

    #[test]
    fn test_blank_insured_name_is_rejected() {
        let records = vec![TestPolicyRecordBuilder::new().with_insured_name("").build()];
        assert_err_variant!(RecordSet::new(records), DashboardError::InvalidRecord { .. });
    }

    #[test]
    fn test_random_insured_names_are_valid() {
        let records: Vec<_> = (1..=5).map(PolicyFixtures::random_insured).collect();
        assert!(RecordSet::try_from(records).is_ok());
    }

    #[test]
    fn test_overflowing_premium_total_is_rejected() {
        let half = Decimal::MAX / dec!(2) + dec!(1);
        let records = vec![
            PolicyFixtures::with_status_and_premium(1, PolicyStatus::Pending, half),
            PolicyFixtures::with_status_and_premium(2, PolicyStatus::Pending, half),
        ];
        match RecordSet::new(records) {
            Err(DashboardError::InvalidRecord { id, reason }) => {
                assert_eq!(id, PolicyRecordId::new(2));
                assert!(reason.contains("overflows"));
            }
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_large_premiums_that_fit_aggregate_without_panicking() {
        let half = Decimal::MAX / dec!(2) - dec!(1);
        let set = assert_ok!(RecordSet::new(vec![
            PolicyFixtures::with_status_and_premium(1, PolicyStatus::Pending, half),
            PolicyFixtures::with_status_and_premium(2, PolicyStatus::Hold, half),
        ]));
        let stats = AggregateCalculator::new().aggregate(&set);
        assert_eq!(stats.outstanding_premium.amount(), set.total_premium().round_dp(4));
    }

    #[test]
    fn test_aggregate_over_unchecked_slice_saturates() {
        let huge = vec![
            PolicyFixtures::with_status_and_premium(1, PolicyStatus::Pending, Decimal::MAX),
            PolicyFixtures::with_status_and_premium(2, PolicyStatus::Pending, Decimal::MAX),
        ];
        let stats = AggregateCalculator::new().aggregate(&huge);
        assert_eq!(stats.outstanding_premium.amount(), Decimal::MAX);
    }

    #[test]
    fn test_get_unknown_id_is_not_found() {
        let set = PolicyFixtures::sample_set();
        assert_eq!(assert_ok!(set.get(PolicyRecordId::new(4))).insured_name, "Emily Davis");
        let err = assert_err!(set.get(PolicyRecordId::new(42)));
        assert!(matches!(err, DashboardError::Core(CoreError::NotFound(_))));
        assert_eq!(err.to_string(), "Not found: Record REC-42 not found");
    }

    #[test]
    fn test_empty_set_has_unbounded_premium_range() {
        let set = assert_ok!(RecordSet::new(Vec::new()));
        assert!(set.is_empty());
        assert!(set.premium_bounds().contains(dec!(1000000)));
    }
}

mod json {
    use super::*;

    #[test]
    fn test_from_json_camel_case() {
        let json = r#"[{
            "id": 11,
            "policyNumber": "POL-2024-011",
            "transactionId": "TXN-011-2024",
            "transactionType": "Renewal",
            "effectiveDate": "2024-03-01",
            "product": "Auto",
            "program": "Standard Auto",
            "accountNumber": "ACC-011",
            "insuredName": "Ana Lopez",
            "premium": "1425.50",
            "status": "InProcess",
            "source": "Agent Portal",
            "issuedDate": "2024-02-20",
            "lineOfBusiness": "Personal Lines"
        }]"#;
        let set = assert_ok!(RecordSet::from_json(json));
        let record = &set[0];
        assert_eq!(record.product, Product::Auto);
        assert_eq!(record.status, PolicyStatus::InProcess);
        assert_eq!(record.premium, dec!(1425.50));
    }

    #[test]
    fn test_from_json_unknown_status() {
        let json = r#"[{
            "id": 1, "policyNumber": "P", "transactionId": "T", "transactionType": "Renewal",
            "effectiveDate": "2024-03-01", "product": "Auto", "program": "", "accountNumber": "",
            "insuredName": "X", "premium": 1, "status": "Lost", "source": "Direct",
            "issuedDate": "2024-03-01", "lineOfBusiness": "Property"
        }]"#;
        assert_err_variant!(RecordSet::from_json(json), DashboardError::Json(_));
    }

    #[test]
    fn test_from_json_malformed() {
        assert_err_variant!(RecordSet::from_json("not json"), DashboardError::Json(_));
    }
}
