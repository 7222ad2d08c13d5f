//! Error Types
//!
//! Everything here is recoverable; the UI ignores validation errors and
//! logs the rest.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GiftError {
    #[error("gift name is empty")]
    EmptyName,

    #[error("quantity must be a positive integer")]
    InvalidQuantity,

    #[error("a gift named '{0}' already exists")]
    DuplicateName(String),

    #[error("index {index} out of range for list of {len} gifts")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("storage unavailable: {0}")]
    Storage(String),

    #[error("malformed gift data: {0}")]
    Parse(#[from] serde_json::Error),
}

impl GiftError {
    /// Validation failures are rejected without user feedback
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            GiftError::EmptyName | GiftError::InvalidQuantity | GiftError::DuplicateName(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GiftError>;
