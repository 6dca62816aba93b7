//! Wishlist collections.
//!
//! Wishlists are keyed by product identity, the opposite policy from carts:
//! saving a product that is already saved is a no-op, and removal addresses
//! products rather than generated line uids.

use serde::{Deserialize, Serialize};

use cartwheel_core::{ProductId, UnitPrice};

/// One saved product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    /// Catalog reference.
    pub product_id: ProductId,
    /// Product display name.
    pub name: String,
    /// Product image URL.
    pub image_url: String,
    /// Per-unit price at the time of saving.
    pub unit_price: UnitPrice,
}

/// An ordered collection of saved products, one entry per product.
///
/// Stored as a bare JSON array, like the cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wishlist {
    items: Vec<WishlistItem>,
}

impl Wishlist {
    /// Create an empty wishlist.
    #[must_use]
    pub const fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// The saved products, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }

    /// Number of saved products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the given product is saved.
    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|item| item.product_id == *product_id)
    }

    /// Save a product. Returns `false` if it was already saved.
    pub fn add(&mut self, item: WishlistItem) -> bool {
        if self.contains(&item.product_id) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove a saved product. Returns `true` if an entry was removed.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.product_id != *product_id);
        before != self.items.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn item(product_id: &str) -> WishlistItem {
        WishlistItem {
            product_id: ProductId::new(product_id),
            name: format!("Product {product_id}"),
            image_url: format!("https://img.example.com/{product_id}.jpg"),
            unit_price: UnitPrice::new(Decimal::new(1999, 2)).unwrap(),
        }
    }

    #[test]
    fn test_add_is_idempotent_by_product() {
        let mut wishlist = Wishlist::empty();
        assert!(wishlist.add(item("p-1")));
        assert!(!wishlist.add(item("p-1")));
        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_contains_and_remove() {
        let mut wishlist = Wishlist::empty();
        wishlist.add(item("p-1"));
        wishlist.add(item("p-2"));

        let p1 = ProductId::new("p-1");
        assert!(wishlist.contains(&p1));
        assert!(wishlist.remove(&p1));
        assert!(!wishlist.contains(&p1));
        assert!(!wishlist.remove(&p1));
        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_wire_format_uses_historical_field_names() {
        let value = serde_json::to_value(item("p-9")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "productId": "p-9",
                "name": "Product p-9",
                "imageUrl": "https://img.example.com/p-9.jpg",
                "unitPrice": "19.99",
            })
        );
    }
}
