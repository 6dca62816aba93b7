//! Product variant labels with a `"none"` sentinel.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The label of the product variant a cart line refers to.
///
/// Products without variants have historically been stored with the literal
/// string `"none"` rather than a null, and existing stored carts depend on
/// that spelling. This type keeps the sentinel on the wire but makes the
/// "no variant" case explicit in code.
///
/// An empty label is normalized to [`VariantLabel::None`]; the sentinel
/// string itself parses back to `None` as well, so the mapping round-trips.
///
/// ## Examples
///
/// ```
/// use cartwheel_core::VariantLabel;
///
/// assert_eq!(VariantLabel::from_label("Large / Blue").as_str(), "Large / Blue");
/// assert_eq!(VariantLabel::None.as_str(), "none");
/// assert_eq!(VariantLabel::from_label(""), VariantLabel::None);
/// assert_eq!(VariantLabel::from_label("none"), VariantLabel::None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VariantLabel {
    /// The product has no variant dimension.
    #[default]
    None,
    /// A named variant, e.g. `"Large / Blue"`.
    Named(String),
}

impl VariantLabel {
    /// The stored spelling of the "no variant" case.
    pub const NONE_SENTINEL: &'static str = "none";

    /// Build a label from raw text, normalizing the sentinel and empty
    /// strings to [`VariantLabel::None`].
    #[must_use]
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        if label.is_empty() || label == Self::NONE_SENTINEL {
            Self::None
        } else {
            Self::Named(label)
        }
    }

    /// Returns the stored spelling: the label itself, or `"none"`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => Self::NONE_SENTINEL,
            Self::Named(label) => label,
        }
    }

    /// Returns the label if one is present.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Named(label) => Some(label),
        }
    }
}

impl fmt::Display for VariantLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for VariantLabel {
    fn from(label: String) -> Self {
        Self::from_label(label)
    }
}

impl From<VariantLabel> for String {
    fn from(variant: VariantLabel) -> Self {
        match variant {
            VariantLabel::None => VariantLabel::NONE_SENTINEL.to_owned(),
            VariantLabel::Named(label) => label,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_named_label() {
        let variant = VariantLabel::from_label("Large / Blue");
        assert_eq!(variant, VariantLabel::Named("Large / Blue".to_owned()));
        assert_eq!(variant.label(), Some("Large / Blue"));
        assert_eq!(variant.as_str(), "Large / Blue");
    }

    #[test]
    fn test_sentinel_normalizes_to_none() {
        assert_eq!(VariantLabel::from_label("none"), VariantLabel::None);
        assert_eq!(VariantLabel::from_label(""), VariantLabel::None);
        assert_eq!(VariantLabel::None.label(), None);
    }

    #[test]
    fn test_sentinel_is_case_sensitive() {
        let variant = VariantLabel::from_label("None");
        assert_eq!(variant, VariantLabel::Named("None".to_owned()));
    }

    #[test]
    fn test_serde_keeps_the_sentinel_spelling() {
        let json = serde_json::to_string(&VariantLabel::None).unwrap();
        assert_eq!(json, "\"none\"");

        let parsed: VariantLabel = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(parsed, VariantLabel::None);

        let named: VariantLabel = serde_json::from_str("\"Small\"").unwrap();
        assert_eq!(named, VariantLabel::Named("Small".to_owned()));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", VariantLabel::None), "none");
        assert_eq!(
            format!("{}", VariantLabel::from_label("XL")),
            "XL"
        );
    }
}
