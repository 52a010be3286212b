//! Unit tests for the Money module
//!
//! Tests cover money creation, summation, currency handling,
//! grouped display, and percentage shares.

use core_kernel::{Currency, Money, MoneyError, Percentage};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::new(dec!(100.123456789), Currency::USD);
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero(Currency::EUR);
        assert!(m.is_zero());
        assert_eq!(m.currency(), Currency::EUR);
    }

    #[test]
    fn test_sum_of_empty_is_zero() {
        let m = Money::sum(Vec::<Decimal>::new(), Currency::USD);
        assert!(m.is_zero());
    }

    #[test]
    fn test_sum_saturates_instead_of_overflowing() {
        let m = Money::sum(vec![Decimal::MAX, dec!(1)], Currency::USD);
        assert_eq!(m.amount(), Decimal::MAX);
    }

    #[test]
    fn test_sum_of_premiums() {
        let m = Money::sum(vec![dec!(1250), dec!(850), dec!(1350)], Currency::USD);
        assert_eq!(m.amount(), dec!(3450));
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_add_same_currency() {
        let a = Money::new(dec!(100.00), Currency::USD);
        let b = Money::new(dec!(50.25), Currency::USD);
        assert_eq!((a + b).amount(), dec!(150.25));
    }

    #[test]
    fn test_checked_add_rejects_mismatch() {
        let a = Money::new(dec!(100.00), Currency::USD);
        let b = Money::new(dec!(100.00), Currency::GBP);
        assert_eq!(
            a.checked_add(&b),
            Err(MoneyError::CurrencyMismatch("USD".to_string(), "GBP".to_string()))
        );
    }

    #[test]
    fn test_checked_add_rejects_overflow() {
        let a = Money::new(Decimal::MAX, Currency::USD);
        let b = Money::new(dec!(1), Currency::USD);
        assert!(matches!(a.checked_add(&b), Err(MoneyError::InvalidAmount(_))));
    }
}

mod display {
    use super::*;

    #[test]
    fn test_display_uses_currency_places() {
        assert_eq!(Money::new(dec!(1250), Currency::USD).to_string(), "$ 1250.00");
        assert_eq!(Money::new(dec!(1250), Currency::JPY).to_string(), "¥ 1250");
    }

    #[test]
    fn test_grouped_outstanding_premium() {
        assert_eq!(Money::new(dec!(9900), Currency::USD).format_grouped(), "$9,900");
        assert_eq!(Money::new(dec!(1000000), Currency::USD).format_grouped(), "$1,000,000");
        assert_eq!(Money::new(dec!(999.99), Currency::USD).format_grouped(), "$999.99");
    }

    #[test]
    fn test_grouped_negative_amount() {
        assert_eq!(Money::new(dec!(-1500), Currency::EUR).format_grouped(), "-€1,500");
    }
}

mod percentage {
    use super::*;

    #[test]
    fn test_share_rounds_to_one_place() {
        assert_eq!(Percentage::share_of(2, 3).as_decimal(), dec!(66.7));
    }

    #[test]
    fn test_full_share() {
        assert_eq!(Percentage::share_of(4, 4).to_string(), "100.0%");
    }

    #[test]
    fn test_zero_total() {
        assert_eq!(Percentage::share_of(0, 0).to_string(), "0.0%");
    }
}
