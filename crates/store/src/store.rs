//! The client store.
//!
//! [`ClientStore`] owns a storage port and the active [`Session`], and keys
//! every cart/wishlist operation to the session's scope. It is the only
//! module that touches storage; carts and wishlists themselves are pure
//! values.
//!
//! ## Degrade rules
//!
//! Pages call the store on every interaction, so it must keep working when
//! storage does not: unreadable or malformed state reads as an empty
//! collection, failed writes are dropped, and both are logged at WARN. The
//! one error callers can observe is [`StoreError::LineNotFound`] from
//! [`ClientStore::set_quantity`]. Collections are re-read from storage on
//! every operation; the session is the only state cached in memory.

use serde::Serialize;
use serde::de::DeserializeOwned;

use cartwheel_core::{Email, LineUid, ProductId, Quantity};

use crate::cart::{Cart, CartItem, NewCartItem};
use crate::error::{Result, StoreError};
use crate::keys::{Scope, StorageKey};
use crate::session::{Session, SessionToken};
use crate::storage::StoragePort;
use crate::wishlist::{Wishlist, WishlistItem};

/// Cart, wishlist and session state over an injected storage port.
#[derive(Debug)]
pub struct ClientStore<S> {
    storage: S,
    session: Session,
    admin_token: Option<SessionToken>,
}

impl<S: StoragePort> ClientStore<S> {
    /// Open a store, restoring the session persisted in `storage`.
    ///
    /// A stored token whose companion email is missing or unparseable
    /// violates the session invariant; the store then starts as guest (with
    /// a warning) and leaves the stored keys untouched, so a later login or
    /// logout decides what happens to them.
    pub fn open(storage: S) -> Self {
        let mut store = Self {
            storage,
            session: Session::Guest,
            admin_token: None,
        };
        store.restore_session();
        store
    }

    /// The active session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Whether a customer is logged in.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    /// The logged-in email, if any.
    #[must_use]
    pub const fn current_email(&self) -> Option<&Email> {
        self.session.email()
    }

    /// The scope collections currently resolve to.
    #[must_use]
    pub fn scope(&self) -> Scope {
        self.session.scope()
    }

    /// Borrow the underlying storage.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Mutably borrow the underlying storage.
    pub const fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Consume the store and hand back its storage.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }

    // =========================================================================
    // Cart operations
    // =========================================================================

    /// The current scope's cart.
    #[must_use]
    pub fn cart(&self) -> Cart {
        self.read_json(&self.cart_key())
    }

    /// Append `item` to the current scope's cart and return the stored line.
    ///
    /// Always appends a new line with a fresh uid; a second add of the same
    /// product/variant never merges into an existing line.
    pub fn add_item(&mut self, item: NewCartItem) -> CartItem {
        let key = self.cart_key();
        let mut cart: Cart = self.read_json(&key);
        let line = cart.push(item);
        self.write_json(&key, &cart);
        line
    }

    /// Set the quantity of the line with the given uid.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::LineNotFound`] if the current cart has no such
    /// line; nothing is written in that case.
    pub fn set_quantity(&mut self, uid: LineUid, quantity: Quantity) -> Result<()> {
        let key = self.cart_key();
        let mut cart: Cart = self.read_json(&key);
        cart.set_quantity(uid, quantity)?;
        self.write_json(&key, &cart);
        Ok(())
    }

    /// Remove every line whose uid appears in `uids`.
    ///
    /// Returns the number of lines removed; absent uids are ignored, so
    /// removal is idempotent. The cart is rewritten only when something was
    /// actually removed.
    pub fn remove_items(&mut self, uids: &[LineUid]) -> usize {
        let key = self.cart_key();
        let mut cart: Cart = self.read_json(&key);
        let removed = cart.remove(uids);
        if removed > 0 {
            self.write_json(&key, &cart);
        }
        removed
    }

    /// Drop the purchased lines from the cart after a completed checkout.
    ///
    /// Same removal semantics as [`ClientStore::remove_items`].
    pub fn complete_checkout(&mut self, uids: &[LineUid]) -> usize {
        self.remove_items(uids)
    }

    // =========================================================================
    // Wishlist operations
    // =========================================================================

    /// The current scope's wishlist.
    #[must_use]
    pub fn wishlist(&self) -> Wishlist {
        self.read_json(&self.wishlist_key())
    }

    /// Save a product to the wishlist. Returns `false` if it was already
    /// saved; nothing is rewritten in that case.
    pub fn add_to_wishlist(&mut self, item: WishlistItem) -> bool {
        let key = self.wishlist_key();
        let mut wishlist: Wishlist = self.read_json(&key);
        let added = wishlist.add(item);
        if added {
            self.write_json(&key, &wishlist);
        }
        added
    }

    /// Remove a saved product. Returns `true` if an entry was removed.
    pub fn remove_from_wishlist(&mut self, product_id: &ProductId) -> bool {
        let key = self.wishlist_key();
        let mut wishlist: Wishlist = self.read_json(&key);
        let removed = wishlist.remove(product_id);
        if removed {
            self.write_json(&key, &wishlist);
        }
        removed
    }

    // =========================================================================
    // Session transitions
    // =========================================================================

    /// Record a successful login and switch to the per-email scope.
    ///
    /// Whatever sits in the guest cart stays stored under the guest key;
    /// nothing is merged into the customer's cart.
    pub fn on_login(&mut self, token: SessionToken, email: Email) {
        self.write_raw(&StorageKey::UserToken, token.as_str());
        self.write_raw(&StorageKey::UserEmail, email.as_str());
        self.session = Session::logged_in(token, email);
    }

    /// Clear the session keys and switch back to the guest scope.
    ///
    /// The customer's cart stays persisted under its own key for their next
    /// login. The admin token is independent and survives.
    pub fn on_logout(&mut self) {
        self.remove_key(&StorageKey::UserToken);
        self.remove_key(&StorageKey::UserEmail);
        self.session = Session::Guest;
    }

    /// The admin access token, if one is active.
    ///
    /// Admin state never affects scope resolution; carts and wishlists are
    /// customer-scoped only.
    #[must_use]
    pub const fn admin_token(&self) -> Option<&SessionToken> {
        self.admin_token.as_ref()
    }

    /// Record an admin login.
    pub fn on_admin_login(&mut self, token: SessionToken) {
        self.write_raw(&StorageKey::AdminToken, token.as_str());
        self.admin_token = Some(token);
    }

    /// Clear the admin token.
    pub fn on_admin_logout(&mut self) {
        self.remove_key(&StorageKey::AdminToken);
        self.admin_token = None;
    }

    // =========================================================================
    // Storage helpers
    // =========================================================================

    fn cart_key(&self) -> StorageKey {
        StorageKey::Cart(self.session.scope())
    }

    fn wishlist_key(&self) -> StorageKey {
        StorageKey::Wishlist(self.session.scope())
    }

    fn restore_session(&mut self) {
        let token = self.read_raw(&StorageKey::UserToken);
        let email = self.read_raw(&StorageKey::UserEmail);

        self.session = match (token, email) {
            (Some(token), Some(raw)) => match Email::parse(&raw) {
                Ok(email) => Session::logged_in(SessionToken::new(token), email),
                Err(e) => {
                    tracing::warn!("Stored email is invalid, starting as guest: {e}");
                    Session::Guest
                }
            },
            (Some(_), None) => {
                tracing::warn!("Stored token has no stored email, starting as guest");
                Session::Guest
            }
            _ => Session::Guest,
        };

        self.admin_token = self.read_raw(&StorageKey::AdminToken).map(SessionToken::new);
    }

    /// Read and parse a stored collection, degrading to its default.
    fn read_json<T: DeserializeOwned + Default>(&self, key: &StorageKey) -> T {
        match self.try_read_json(key) {
            Ok(Some(value)) => value,
            Ok(None) => T::default(),
            Err(e) => {
                tracing::warn!("Failed to read {key}: {e}");
                T::default()
            }
        }
    }

    fn try_read_json<T: DeserializeOwned>(&self, key: &StorageKey) -> Result<Option<T>> {
        let Some(raw) = self.storage.get(key)? else {
            return Ok(None);
        };
        let value = serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
            key: key.name(),
            source,
        })?;
        Ok(Some(value))
    }

    /// Serialize and store a collection, dropping the write on failure.
    fn write_json<T: Serialize>(&mut self, key: &StorageKey, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.write_raw(key, &raw),
            Err(e) => tracing::warn!("Failed to serialize {key}, write dropped: {e}"),
        }
    }

    fn read_raw(&self, key: &StorageKey) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to read {key}: {e}");
                None
            }
        }
    }

    fn write_raw(&mut self, key: &StorageKey, value: &str) {
        if let Err(e) = self.storage.set(key, value) {
            tracing::warn!("Failed to write {key}, write dropped: {e}");
        }
    }

    fn remove_key(&mut self, key: &StorageKey) {
        if let Err(e) = self.storage.remove(key) {
            tracing::warn!("Failed to remove {key}: {e}");
        }
    }
}
