//! Money type with precise decimal arithmetic
//!
//! This module provides a single-currency monetary value backed by
//! rust_decimal, so balances and amounts never accumulate the rounding
//! drift that binary floating point would introduce.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;
use thiserror::Error;

/// Decimal places used when rendering amounts
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Overflow during calculation")]
    Overflow,
}

/// A monetary amount
///
/// Money stores the value exactly as given; rendering rounds to two
/// decimal places. The bank runs in a single currency, so no currency
/// code travels with the amount (the display code is a presentation
/// concern).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero amount
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Creates a new Money value
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates Money from an integer amount in minor units (paise/cents)
    pub fn from_minor(minor_units: i64) -> Self {
        Self(Decimal::new(minor_units, CURRENCY_DECIMAL_PLACES))
    }

    /// Returns the underlying decimal amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Returns true if the amount is strictly negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Checked addition
    pub fn checked_add(&self, other: Money) -> Result<Money, MoneyError> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or(MoneyError::Overflow)
    }

    /// Checked subtraction
    pub fn checked_sub(&self, other: Money) -> Result<Money, MoneyError> {
        self.0
            .checked_sub(other.0)
            .map(Money)
            .ok_or(MoneyError::Overflow)
    }

    /// Rounds to the standard two currency decimal places
    pub fn round_to_currency(&self) -> Self {
        Self(self.0.round_dp(CURRENCY_DECIMAL_PLACES))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::ZERO
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

impl fmt::Display for Money {
    /// Renders with exactly two decimal places, e.g. `1500.00`
    ///
    /// Half-way values round away from zero, the convention customers
    /// expect on a statement.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(CURRENCY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{rounded:.2}")
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Decimal::from_str(trimmed)
            .map(Money)
            .map_err(|_| MoneyError::InvalidAmount(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_minor() {
        assert_eq!(Money::from_minor(150050), Money::new(dec!(1500.50)));
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Money::new(dec!(1500)).to_string(), "1500.00");
        assert_eq!(Money::new(dec!(0.5)).to_string(), "0.50");
        assert_eq!(Money::new(dec!(12.345)).to_string(), "12.35");
    }

    #[test]
    fn test_parse() {
        let parsed: Money = " 250.75 ".parse().unwrap();
        assert_eq!(parsed, Money::new(dec!(250.75)));

        let err = "abc".parse::<Money>().unwrap_err();
        assert_eq!(err, MoneyError::InvalidAmount("abc".to_string()));
    }

    #[test]
    fn test_sign_predicates() {
        assert!(Money::new(dec!(1)).is_positive());
        assert!(!Money::ZERO.is_positive());
        assert!(Money::new(dec!(-1)).is_negative());
        assert!(!Money::ZERO.is_negative());
        assert!(Money::ZERO.is_zero());
    }

    #[test]
    fn test_arithmetic_is_exact() {
        // 0.1 + 0.2 famously drifts in binary floating point
        let sum = Money::new(dec!(0.1)) + Money::new(dec!(0.2));
        assert_eq!(sum, Money::new(dec!(0.3)));
    }

    #[test]
    fn test_sum_iterator() {
        let total: Money = [dec!(100), dec!(250.25), dec!(-50.25)]
            .into_iter()
            .map(Money::new)
            .sum();
        assert_eq!(total, Money::new(dec!(300)));
    }
}
