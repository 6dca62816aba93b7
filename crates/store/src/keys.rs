//! Typed storage keys.
//!
//! Every key this store owns is constructed here; no other module builds a
//! key name by string concatenation. Collection keys are scoped to the
//! active identity, session keys are fixed names. The rendered names match
//! the historical storage format exactly, so existing stored data keeps
//! working.

use core::fmt;

use cartwheel_core::Email;

/// Literal key names and prefixes as they appear in storage.
pub mod names {
    /// Prefix for per-scope cart collections.
    pub const CART_ITEMS: &str = "cart_items";

    /// Prefix for per-scope wishlist collections.
    pub const WISHLIST_ITEMS: &str = "wishlist_items";

    /// Separator between a collection prefix and its scope.
    pub const SCOPE_SEPARATOR: &str = "__";

    /// Scope suffix used when no user is logged in.
    pub const GUEST_SCOPE: &str = "guest";

    /// Key for the customer's backend access token.
    pub const USER_TOKEN: &str = "userToken";

    /// Key for the logged-in customer's email address.
    pub const USER_EMAIL: &str = "userEmail";

    /// Key for the admin access token.
    pub const ADMIN_TOKEN: &str = "adminToken";
}

/// The identity namespace a stored collection belongs to.
///
/// Guests share one namespace; each logged-in customer gets their own, keyed
/// by the exact email string they logged in with. [`Email::parse`] requires
/// an `@`, so a user scope can never render as the literal `guest`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    /// No user identity present.
    Guest,
    /// Logged in as the given email.
    User(Email),
}

impl Scope {
    /// The scope's suffix in a rendered key name.
    #[must_use]
    pub fn suffix(&self) -> &str {
        match self {
            Self::Guest => names::GUEST_SCOPE,
            Self::User(email) => email.as_str(),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

/// A key in the underlying storage.
///
/// ## Examples
///
/// ```
/// use cartwheel_core::Email;
/// use cartwheel_store::keys::{Scope, StorageKey};
///
/// assert_eq!(StorageKey::Cart(Scope::Guest).to_string(), "cart_items__guest");
///
/// let email = Email::parse("ada@example.com").unwrap();
/// assert_eq!(
///     StorageKey::Cart(Scope::User(email)).to_string(),
///     "cart_items__ada@example.com",
/// );
/// assert_eq!(StorageKey::UserToken.to_string(), "userToken");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// A cart collection, scoped to an identity.
    Cart(Scope),
    /// A wishlist collection, scoped to an identity.
    Wishlist(Scope),
    /// The customer's backend access token.
    UserToken,
    /// The logged-in customer's email address.
    UserEmail,
    /// The admin access token.
    AdminToken,
}

impl StorageKey {
    /// Render the key name as stored.
    #[must_use]
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cart(scope) => write!(
                f,
                "{}{}{scope}",
                names::CART_ITEMS,
                names::SCOPE_SEPARATOR
            ),
            Self::Wishlist(scope) => write!(
                f,
                "{}{}{scope}",
                names::WISHLIST_ITEMS,
                names::SCOPE_SEPARATOR
            ),
            Self::UserToken => f.write_str(names::USER_TOKEN),
            Self::UserEmail => f.write_str(names::USER_EMAIL),
            Self::AdminToken => f.write_str(names::ADMIN_TOKEN),
        }
    }
}
