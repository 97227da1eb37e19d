use thiserror::Error;

/// Errors raised while parsing wire values into model types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Object ids are exactly 24 lowercase hex characters.
    #[error("Object id must be 24 hex characters, got {0}")]
    InvalidObjectIdLength(usize),

    #[error("Object id contains a non-hex character: {0:?}")]
    InvalidObjectIdChar(char),

    #[error("Not a valid sort method: {0}")]
    InvalidSortMethod(String),

    #[error("Not a valid page value: {0}")]
    InvalidPageDirection(String),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Prices are finite and never negative.
    #[error("Price must be a non-negative number, got {0}")]
    InvalidPrice(String),
}
