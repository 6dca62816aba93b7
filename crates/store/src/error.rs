//! Store error types.
//!
//! The taxonomy is deliberately small. Storage failures and malformed stored
//! data exist as variants so internal helpers can report precisely what went
//! wrong, but [`ClientStore`](crate::store::ClientStore) absorbs both into
//! safe defaults; the only variant a caller can observe through the public
//! API is [`StoreError::LineNotFound`].

use thiserror::Error;

use cartwheel_core::LineUid;

use crate::storage::StorageError;

/// Errors arising while reading, writing, or editing stored state.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage port could not complete an operation.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The bytes stored under a key do not parse as the expected shape.
    #[error("malformed data under {key}: {source}")]
    Malformed {
        /// The key whose value failed to parse.
        key: String,
        /// The parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// No cart line carries the given uid.
    #[error("no cart line with uid {0}")]
    LineNotFound(LineUid),
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::Storage(StorageError::Unavailable("storage is offline".to_owned()));
        assert_eq!(err.to_string(), "storage error: storage unavailable: storage is offline");

        let uid = LineUid::generate();
        let err = StoreError::LineNotFound(uid);
        assert_eq!(err.to_string(), format!("no cart line with uid {uid}"));
    }

    #[test]
    fn test_malformed_names_the_key() {
        let source = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err = StoreError::Malformed {
            key: "cart_items__guest".to_owned(),
            source,
        };
        assert!(err.to_string().contains("cart_items__guest"));
    }
}
