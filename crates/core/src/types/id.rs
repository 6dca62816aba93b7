//! Newtype IDs for type-safe entity references.
//!
//! Catalog identifiers come from an external API and are treated as opaque
//! strings; cart line identifiers are generated locally as UUIDs. Both get
//! newtype wrappers so the two can never be mixed up.

use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An opaque product identifier assigned by the commerce backend.
///
/// No structure is assumed beyond being a string; the backend may use
/// numeric IDs, slugs, or GIDs, and all of them round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a product ID from a backend-assigned value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ProductId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

/// A unique identifier for a single cart line.
///
/// Every line gets a fresh UID when it is added, even when the same product
/// is added twice. Quantity edits and removals address lines by this UID,
/// never by product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineUid(Uuid);

impl LineUid {
    /// Generate a fresh, unique line UID.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for LineUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for LineUid {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<LineUid> for Uuid {
    fn from(uid: LineUid) -> Self {
        uid.0
    }
}

impl std::str::FromStr for LineUid {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}
