//! Menu and gift-shop prices.

use core::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input is not a decimal number.
    #[error("price must be a decimal number")]
    Invalid,
    /// The amount is below zero.
    #[error("price cannot be negative")]
    Negative,
}

/// A non-negative price in dollars, stored as `NUMERIC(10,2)`.
///
/// Serializes as a string (`"12.50"`) so JSON clients never see float rounding.
///
/// ```
/// use hearth_core::Price;
///
/// let price: Price = "12.5".parse().unwrap();
/// assert_eq!(price.to_string(), "$12.50");
/// assert!("-1".parse::<Price>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(feature = "postgres", sqlx(transparent))]
pub struct Price(Decimal);

impl Price {
    /// Create a price, rejecting negative amounts. The amount is rounded to cents.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative);
        }
        let mut cents = amount.round_dp(2);
        cents.rescale(2);
        Ok(Self(cents))
    }

    /// The amount in dollars.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s.trim().trim_start_matches('$'))
            .map_err(|_| PriceError::Invalid)?;
        Self::new(amount)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_cents() {
        let price: Price = "7".parse().unwrap();
        assert_eq!(price.to_string(), "$7.00");
    }

    #[test]
    fn test_parse_accepts_dollar_sign() {
        let price: Price = " $18.95 ".parse().unwrap();
        assert_eq!(price.amount(), Decimal::new(1895, 2));
    }

    #[test]
    fn test_rounds_to_cents() {
        let price = Price::new(Decimal::new(12_345, 3)).unwrap();
        assert_eq!(price.to_string(), "$12.34");
    }

    #[test]
    fn test_rejects_negative() {
        assert_eq!(Price::new(Decimal::new(-1, 0)), Err(PriceError::Negative));
        assert_eq!("abc".parse::<Price>(), Err(PriceError::Invalid));
    }

    #[test]
    fn test_serde_uses_string_amount() {
        let price: Price = "9.5".parse().unwrap();
        assert_eq!(serde_json::to_string(&price).unwrap(), "\"9.50\"");

        let parsed: Price = serde_json::from_str("\"9.50\"").unwrap();
        assert_eq!(parsed, price);
        assert!(serde_json::from_str::<Price>("\"-2\"").is_err());
    }
}
