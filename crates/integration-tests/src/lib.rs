//! Integration tests for Cartwheel.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p cartwheel-integration-tests
//! ```
//!
//! Degrade paths log at WARN; run with `RUST_LOG=warn` to see them.
//!
//! # Test Categories
//!
//! - `cart_flow` - Shopper journeys over file-backed storage
//! - `stored_data` - On-disk formats, legacy payloads and corruption
//!
//! This crate only provides the shared fixtures; the scenarios live under
//! `tests/`.

#![cfg_attr(not(test), forbid(unsafe_code))]
// Fixture builders panic on bad inputs instead of returning Results.
#![allow(clippy::unwrap_used)]

use std::path::Path;
use std::sync::Once;

use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use cartwheel_core::{Email, ProductId, Quantity, UnitPrice, VariantLabel};
use cartwheel_store::{ClientStore, FileStorage, NewCartItem, WishlistItem};

static TRACING: Once = Once::new();

/// Install a log subscriber honoring `RUST_LOG`, once per test binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}

/// Open a store over file storage rooted at `dir`.
///
/// Opening the same directory again simulates the next visit on the same
/// device.
pub fn open_store(dir: &Path) -> ClientStore<FileStorage> {
    let storage = FileStorage::open(dir).unwrap();
    ClientStore::open(storage)
}

/// A parsed email fixture.
pub fn email(address: &str) -> Email {
    Email::parse(address).unwrap()
}

/// A cart line fixture priced in cents.
pub fn cart_item(name: &str, price_cents: i64) -> NewCartItem {
    NewCartItem {
        product_id: Some(ProductId::new(format!("prod-{name}"))),
        name: name.to_owned(),
        image_url: format!("https://img.example.com/{name}.jpg"),
        unit_price: UnitPrice::new(Decimal::new(price_cents, 2)).unwrap(),
        quantity: Quantity::ONE,
        variant_label: VariantLabel::None,
    }
}

/// A wishlist entry fixture.
pub fn wishlist_item(product_id: &str, price_cents: i64) -> WishlistItem {
    WishlistItem {
        product_id: ProductId::new(product_id),
        name: format!("Product {product_id}"),
        image_url: format!("https://img.example.com/{product_id}.jpg"),
        unit_price: UnitPrice::new(Decimal::new(price_cents, 2)).unwrap(),
    }
}
