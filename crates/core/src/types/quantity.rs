//! Positive cart line quantity.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum QuantityError {
    /// Quantities start at one; zero means the line should not exist.
    #[error("quantity must be at least 1")]
    Zero,
}

/// How many units of a product a cart line holds.
///
/// Always at least one. A line whose quantity would drop to zero is removed,
/// never stored; deserialization enforces the same rule so a stored zero is
/// treated as malformed data.
///
/// ## Examples
///
/// ```
/// use cartwheel_core::Quantity;
///
/// let qty = Quantity::new(3).unwrap();
/// assert_eq!(qty.get(), 3);
///
/// assert!(Quantity::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// A quantity of one, the value every new line starts with.
    pub const ONE: Self = Self(1);

    /// Create a `Quantity` from a unit count.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::Zero`] if `count` is zero.
    pub const fn new(count: u32) -> Result<Self, QuantityError> {
        if count == 0 {
            return Err(QuantityError::Zero);
        }
        Ok(Self(count))
    }

    /// Returns the unit count.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = QuantityError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}
