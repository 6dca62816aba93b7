//! Core types for Cartwheel.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod price;
pub mod quantity;
pub mod variant;

pub use email::{Email, EmailError};
pub use id::{LineUid, ProductId};
pub use price::{UnitPrice, UnitPriceError};
pub use quantity::{Quantity, QuantityError};
pub use variant::VariantLabel;
