//! Typed shapes of the commerce backend's JSON payloads.
//!
//! The backend is an external API someone else calls; no HTTP client lives
//! in this crate. Pages hand the already-fetched payloads to these types,
//! which bridge them into store inputs at one seam instead of scattering
//! field plucking across the UI.

use core::fmt;

use serde::Deserialize;
use thiserror::Error;

use cartwheel_core::{ProductId, Quantity, UnitPrice, VariantLabel};

use crate::cart::NewCartItem;
use crate::session::SessionToken;

/// Image shown when a product has no usable image of its own.
pub const PLACEHOLDER_IMAGE_URL: &str = "/images/placeholder.png";

/// Errors in an authentication payload.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The backend rejected the credentials.
    #[error("authentication rejected: {0}")]
    Rejected(String),

    /// The response carried neither an error nor a token.
    #[error("authentication response carried no token")]
    MissingToken,
}

/// The backend's authentication response.
///
/// Implements `Debug` manually to redact the token.
#[derive(Clone, Deserialize)]
pub struct AuthResponse {
    /// Access token, present on success.
    pub token: Option<String>,
    /// Rejection message, present on failure.
    pub error: Option<String>,
}

impl AuthResponse {
    /// Extract the session token.
    ///
    /// A present `error` wins over a present `token`: a response that says
    /// it failed is a failure no matter what else it carries.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Rejected`] when the payload carries an error,
    /// and [`AuthError::MissingToken`] when it carries neither an error nor
    /// a token.
    pub fn into_token(self) -> Result<SessionToken, AuthError> {
        if let Some(error) = self.error {
            return Err(AuthError::Rejected(error));
        }
        self.token.map(SessionToken::new).ok_or(AuthError::MissingToken)
    }
}

impl fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthResponse")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("error", &self.error)
            .finish()
    }
}

/// A product entry from the backend's listing or detail payloads.
///
/// Prices arrive as JSON numbers; [`UnitPrice`] reads them exactly and
/// rejects negatives as malformed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductSummary {
    /// Backend-assigned product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current per-unit price.
    pub price: UnitPrice,
    /// Image URLs, best first. May be absent or empty.
    #[serde(default)]
    pub images: Vec<String>,
}

impl ProductSummary {
    /// The image to display: the first one, if the payload carried any.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

impl NewCartItem {
    /// Build a cart line input from a backend product.
    ///
    /// Takes the product's first image, or the placeholder when the payload
    /// carried none.
    #[must_use]
    pub fn from_product(
        product: &ProductSummary,
        quantity: Quantity,
        variant_label: VariantLabel,
    ) -> Self {
        Self {
            product_id: Some(product.id.clone()),
            name: product.name.clone(),
            image_url: product
                .primary_image()
                .unwrap_or(PLACEHOLDER_IMAGE_URL)
                .to_owned(),
            unit_price: product.price,
            quantity,
            variant_label,
        }
    }

    /// Build the fallback line used when the real product is unavailable:
    /// no catalog reference, placeholder image, no variant.
    #[must_use]
    pub fn fallback(name: impl Into<String>, unit_price: UnitPrice, quantity: Quantity) -> Self {
        Self {
            product_id: None,
            name: name.into(),
            image_url: PLACEHOLDER_IMAGE_URL.to_owned(),
            unit_price,
            quantity,
            variant_label: VariantLabel::None,
        }
    }
}
