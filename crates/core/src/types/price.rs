//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`UnitPrice`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum UnitPriceError {
    /// The amount is below zero.
    #[error("unit price cannot be negative: {amount}")]
    Negative {
        /// The rejected amount.
        amount: Decimal,
    },
}

/// A non-negative per-unit price.
///
/// Amounts are decimal, never floating point, so `19.99 * 3` is exact.
/// Serialized as a decimal string to survive storage backends that would
/// otherwise mangle the value through binary floats. Deserialization
/// re-checks the sign, so a stored negative price is rejected as malformed
/// rather than silently admitted.
///
/// ## Examples
///
/// ```
/// use cartwheel_core::UnitPrice;
/// use rust_decimal::Decimal;
///
/// let price = UnitPrice::new(Decimal::new(1999, 2)).unwrap();
/// assert_eq!(price.amount(), Decimal::new(1999, 2));
///
/// // Free items are fine; negative prices are not.
/// assert!(UnitPrice::new(Decimal::ZERO).is_ok());
/// assert!(UnitPrice::new(Decimal::new(-1, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct UnitPrice(Decimal);

impl UnitPrice {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a `UnitPrice` from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`UnitPriceError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, UnitPriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(UnitPriceError::Negative { amount });
        }
        Ok(Self(amount))
    }

    /// Returns the decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// The extended price for `quantity` units.
    #[must_use]
    pub fn extend(&self, quantity: u32) -> Decimal {
        self.0 * Decimal::from(quantity)
    }
}

impl fmt::Display for UnitPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Decimal> for UnitPrice {
    type Error = UnitPriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<UnitPrice> for Decimal {
    fn from(price: UnitPrice) -> Self {
        price.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_zero_and_positive() {
        assert!(UnitPrice::new(Decimal::ZERO).is_ok());
        assert!(UnitPrice::new(Decimal::new(1999, 2)).is_ok());
        assert_eq!(UnitPrice::new(Decimal::ZERO).unwrap(), UnitPrice::ZERO);
    }

    #[test]
    fn test_new_rejects_negative() {
        assert!(matches!(
            UnitPrice::new(Decimal::new(-1999, 2)),
            Err(UnitPriceError::Negative { .. })
        ));
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert!(UnitPrice::new(-Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_extend_is_exact() {
        let price = UnitPrice::new(Decimal::new(1999, 2)).unwrap();
        assert_eq!(price.extend(3), Decimal::new(5997, 2));
    }

    #[test]
    fn test_serde_uses_decimal_strings() {
        let price = UnitPrice::new(Decimal::new(1999, 2)).unwrap();
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "\"19.99\"");

        let parsed: UnitPrice = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, price);
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        let result: Result<UnitPrice, _> = serde_json::from_str("\"-19.99\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        let price = UnitPrice::new(Decimal::new(500, 2)).unwrap();
        assert_eq!(format!("{price}"), "5.00");
    }
}
