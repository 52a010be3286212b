//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal for precise calculations without floating-point errors.
//! Premium totals shown on the dashboard are carried as `Money` so that the
//! currency symbol and grouping travel with the amount.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use thiserror::Error;

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
}

impl Currency {
    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::JPY => "¥",
            Currency::CAD => "C$",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: cannot operate on {0} and {1}")]
    CurrencyMismatch(String, String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

/// A monetary amount with associated currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: amount.round_dp(4),
            currency,
        }
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: dec!(0),
            currency,
        }
    }

    /// Sums a sequence of raw amounts into a single `Money` value
    ///
    /// The total saturates at the bounds of `Decimal` instead of panicking.
    pub fn sum<I>(amounts: I, currency: Currency) -> Self
    where
        I: IntoIterator<Item = Decimal>,
    {
        let total = amounts
            .into_iter()
            .fold(Decimal::ZERO, |acc, amount| acc.saturating_add(amount));
        Self::new(total, currency)
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Checked addition that returns an error on currency mismatch or overflow
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.currency.to_string(),
            ));
        }
        let amount = self.amount.checked_add(other.amount).ok_or_else(|| {
            MoneyError::InvalidAmount(format!("{} + {} overflows", self.amount, other.amount))
        })?;
        Ok(Self::new(amount, self.currency))
    }

    /// Formats the amount with thousands separators, e.g. `$10,250` or `$1,234.5`
    ///
    /// Trailing fractional zeros are dropped, so whole amounts render
    /// without a decimal point.
    pub fn format_grouped(&self) -> String {
        let rounded = self
            .amount
            .round_dp(self.currency.decimal_places())
            .normalize();
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let text = rounded.abs().to_string();
        let (whole, fraction) = match text.split_once('.') {
            Some((w, f)) => (w.to_string(), Some(f.to_string())),
            None => (text, None),
        };

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        match fraction {
            Some(f) => format!("{}{}{}.{}", sign, self.currency.symbol(), grouped, f),
            None => format!("{}{}{}", sign, self.currency.symbol(), grouped),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dp = self.currency.decimal_places();
        write!(
            f,
            "{} {:.dp$}",
            self.currency.symbol(),
            self.amount,
            dp = dp as usize
        )
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.checked_add(&other)
            .expect("Money::add requires matching currencies and a representable total")
    }
}

/// A share of a whole, expressed in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Percentage {
    value: Decimal,
}

impl Percentage {
    /// Creates a percentage from a value already in percent (e.g. 25.0)
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Share of `part` in `total`, rounded to one decimal place
    ///
    /// A zero total yields 0.0 rather than a division error.
    pub fn share_of(part: u64, total: u64) -> Self {
        if total == 0 {
            return Self::new(dec!(0.0));
        }
        let value = Decimal::from(part) * dec!(100) / Decimal::from(total);
        Self::new(value.round_dp(1))
    }

    /// Returns the value in percent
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.value)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn money_sum_matches_decimal_sum(
            amounts in proptest::collection::vec(0i64..10_000_000i64, 0..20)
        ) {
            let decimals: Vec<Decimal> = amounts.iter().map(|a| Decimal::new(*a, 2)).collect();
            let expected: Decimal = decimals.iter().copied().sum();
            let money = Money::sum(decimals, Currency::USD);
            prop_assert_eq!(money.amount(), expected);
        }

        #[test]
        fn share_never_exceeds_hundred(part in 0u64..1000u64, extra in 0u64..1000u64) {
            let share = Percentage::share_of(part, part + extra);
            prop_assert!(share.as_decimal() <= dec!(100));
            prop_assert!(share.as_decimal() >= Decimal::ZERO);
        }
    }
}
