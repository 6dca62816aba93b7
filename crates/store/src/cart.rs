//! Cart collections.
//!
//! A [`Cart`] is a pure value: an ordered list of lines with no storage
//! attached. Persistence and scope resolution live in
//! [`ClientStore`](crate::store::ClientStore); everything here is plain data
//! and arithmetic, which keeps the policy decisions (fresh uid per add,
//! in-place quantity edits, idempotent removal) independently testable.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use cartwheel_core::{LineUid, ProductId, Quantity, UnitPrice, VariantLabel};

use crate::error::StoreError;

/// A priced product reference about to become a cart line.
///
/// Carries everything a line needs except the uid, which is minted when the
/// item is actually appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartItem {
    /// Catalog reference; `None` for fallback items.
    pub product_id: Option<ProductId>,
    /// Product display name.
    pub name: String,
    /// Product image URL.
    pub image_url: String,
    /// Per-unit price.
    pub unit_price: UnitPrice,
    /// Units to add.
    pub quantity: Quantity,
    /// Variant the customer picked.
    pub variant_label: VariantLabel,
}

/// One line in a cart.
///
/// Lines are identified by their generated [`LineUid`], never by product:
/// adding the same product twice deliberately yields two lines. Serialized
/// field names match the historical storage format (`productId`,
/// `imageUrl`, `unitPrice`, `variantLabel`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Unique identifier of this line.
    pub uid: LineUid,
    /// Catalog reference; `None` for fallback items.
    pub product_id: Option<ProductId>,
    /// Product display name.
    pub name: String,
    /// Product image URL.
    pub image_url: String,
    /// Per-unit price.
    pub unit_price: UnitPrice,
    /// Units on this line.
    pub quantity: Quantity,
    /// Variant the customer picked.
    pub variant_label: VariantLabel,
}

impl CartItem {
    /// The extended price of this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price.extend(self.quantity.get())
    }
}

/// An ordered collection of cart lines.
///
/// Stored as a bare JSON array, so existing stored carts parse unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// The lines, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all lines.
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity.get()).sum()
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// The line with the given uid, if present.
    #[must_use]
    pub fn find(&self, uid: LineUid) -> Option<&CartItem> {
        self.items.iter().find(|line| line.uid == uid)
    }

    /// Append `item` as a new line with a fresh uid.
    ///
    /// Never merges with an existing line, even for an identical
    /// product/variant; duplicates are the policy, not an accident.
    pub fn push(&mut self, item: NewCartItem) -> CartItem {
        let line = CartItem {
            uid: LineUid::generate(),
            product_id: item.product_id,
            name: item.name,
            image_url: item.image_url,
            unit_price: item.unit_price,
            quantity: item.quantity,
            variant_label: item.variant_label,
        };
        self.items.push(line.clone());
        line
    }

    /// Set the quantity of the line with the given uid.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::LineNotFound`] if no line carries `uid`; the
    /// cart is left unchanged.
    pub fn set_quantity(&mut self, uid: LineUid, quantity: Quantity) -> Result<(), StoreError> {
        let line = self
            .items
            .iter_mut()
            .find(|line| line.uid == uid)
            .ok_or(StoreError::LineNotFound(uid))?;
        line.quantity = quantity;
        Ok(())
    }

    /// Remove every line whose uid appears in `uids`.
    ///
    /// Returns the number of lines removed. Uids with no matching line are
    /// ignored, so removal is idempotent.
    pub fn remove(&mut self, uids: &[LineUid]) -> usize {
        let before = self.items.len();
        self.items.retain(|line| !uids.contains(&line.uid));
        before - self.items.len()
    }
}
