//! Cartwheel Store library.
//!
//! The client-side state manager of the storefront: carts, wishlists and the
//! customer session, persisted through an injected storage port and
//! namespaced by the active identity (guest, or a logged-in email).
//!
//! The store never surfaces storage failures to its callers: unreadable
//! state degrades to empty collections and failed writes are dropped with a
//! warning, so pages keep rendering whatever the backing storage does.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod backend;
pub mod cart;
pub mod config;
pub mod error;
pub mod keys;
pub mod session;
pub mod storage;
pub mod store;
pub mod wishlist;

pub use backend::{AuthError, AuthResponse, ProductSummary};
pub use cart::{Cart, CartItem, NewCartItem};
pub use config::{ConfigError, StoreConfig};
pub use error::StoreError;
pub use keys::{Scope, StorageKey};
pub use session::{Session, SessionToken, UserIdentity};
pub use storage::{FileStorage, MemoryStorage, StorageError, StoragePort};
pub use store::ClientStore;
pub use wishlist::{Wishlist, WishlistItem};
