//! On-disk formats: exact file names, payloads from earlier releases, and
//! recovery from corrupt or unavailable data.

#![allow(clippy::unwrap_used)]

use std::fs;

use rust_decimal::Decimal;
use serde_json::json;

use cartwheel_core::VariantLabel;
use cartwheel_store::{Cart, SessionToken};

use cartwheel_integration_tests::{cart_item, email, init_tracing, open_store, wishlist_item};

// =============================================================================
// File layout
// =============================================================================

#[test]
fn test_keys_map_to_percent_encoded_file_names() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(dir.path());

    store.add_item(cart_item("tea", 1999));
    store.on_login(SessionToken::new("tok-ada"), email("ada@example.com"));
    store.add_item(cart_item("kettle", 4900));
    store.add_to_wishlist(wishlist_item("p-7", 999));

    assert!(dir.path().join("cart_items__guest").is_file());
    assert!(dir.path().join("cart_items__ada%40example.com").is_file());
    assert!(dir.path().join("wishlist_items__ada%40example.com").is_file());
    assert!(dir.path().join("userToken").is_file());
    assert!(dir.path().join("userEmail").is_file());
}

#[test]
fn test_session_files_hold_the_raw_values() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(dir.path());

    store.on_login(SessionToken::new("tok-ada"), email("ada@example.com"));

    assert_eq!(
        fs::read_to_string(dir.path().join("userToken")).unwrap(),
        "tok-ada"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("userEmail")).unwrap(),
        "ada@example.com"
    );
}

#[test]
fn test_cart_files_store_prices_as_decimal_strings() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(dir.path());
    store.add_item(cart_item("tea", 1999));

    let raw = fs::read_to_string(dir.path().join("cart_items__guest")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value.pointer("/0/unitPrice"), Some(&json!("19.99")));
    assert_eq!(value.pointer("/0/quantity"), Some(&json!(1)));
    assert_eq!(value.pointer("/0/variantLabel"), Some(&json!("none")));
    assert_eq!(value.pointer("/0/name"), Some(&json!("tea")));
}

// =============================================================================
// Data written by earlier releases
// =============================================================================

#[test]
fn test_payloads_from_an_earlier_release_still_parse() {
    let dir = tempfile::tempdir().unwrap();
    let legacy = json!([{
        "uid": "550e8400-e29b-41d4-a716-446655440000",
        "productId": null,
        "name": "Gift wrap",
        "imageUrl": "/images/placeholder.png",
        "unitPrice": "4.50",
        "quantity": 1,
        "variantLabel": "none"
    }]);
    fs::write(dir.path().join("cart_items__guest"), legacy.to_string()).unwrap();

    let store = open_store(dir.path());
    let cart = store.cart();
    assert_eq!(cart.len(), 1);

    let line = cart.items().first().unwrap();
    assert!(line.product_id.is_none());
    assert_eq!(line.variant_label, VariantLabel::None);
    assert_eq!(line.unit_price.amount(), Decimal::new(450, 2));
    assert_eq!(line.name, "Gift wrap");
}

// =============================================================================
// Corruption and recovery
// =============================================================================

#[test]
fn test_corrupt_cart_file_reads_empty_and_heals_on_the_next_write() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("cart_items__guest"), "{definitely not json").unwrap();

    let mut store = open_store(dir.path());
    assert!(store.cart().is_empty());

    store.add_item(cart_item("fresh", 100));

    let raw = fs::read_to_string(dir.path().join("cart_items__guest")).unwrap();
    let healed: Cart = serde_json::from_str(&raw).unwrap();
    assert_eq!(healed.len(), 1);
}

#[test]
fn test_a_zero_quantity_line_poisons_the_stored_cart() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let bad = json!([{
        "uid": "550e8400-e29b-41d4-a716-446655440000",
        "productId": "p-1",
        "name": "Tea",
        "imageUrl": "/images/tea.jpg",
        "unitPrice": "19.99",
        "quantity": 0,
        "variantLabel": "none"
    }]);
    fs::write(dir.path().join("cart_items__guest"), bad.to_string()).unwrap();

    let store = open_store(dir.path());
    assert!(store.cart().is_empty());
}

#[test]
fn test_a_negative_price_poisons_the_stored_cart() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let bad = json!([{
        "uid": "550e8400-e29b-41d4-a716-446655440000",
        "productId": "p-1",
        "name": "Tea",
        "imageUrl": "/images/tea.jpg",
        "unitPrice": "-19.99",
        "quantity": 1,
        "variantLabel": "none"
    }]);
    fs::write(dir.path().join("cart_items__guest"), bad.to_string()).unwrap();

    let store = open_store(dir.path());
    assert!(store.cart().is_empty());
}

#[test]
fn test_invalid_stored_email_falls_back_to_guest_without_deleting() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("userToken"), "tok-1").unwrap();
    fs::write(dir.path().join("userEmail"), "not an email").unwrap();

    let store = open_store(dir.path());
    assert!(!store.is_logged_in());

    // Restore never deletes; a later login or logout settles the keys.
    assert_eq!(
        fs::read_to_string(dir.path().join("userToken")).unwrap(),
        "tok-1"
    );
}

#[test]
fn test_a_token_without_an_email_falls_back_to_guest() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("userToken"), "tok-orphan").unwrap();

    let store = open_store(dir.path());
    assert!(!store.is_logged_in());
    assert!(store.cart().is_empty());
}

#[test]
fn test_corrupt_wishlist_degrades_independently_of_the_cart() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("wishlist_items__guest"), "[[[").unwrap();

    let mut store = open_store(dir.path());
    store.add_item(cart_item("tea", 1999));

    assert!(store.wishlist().is_empty());
    assert_eq!(store.cart().len(), 1);
}
