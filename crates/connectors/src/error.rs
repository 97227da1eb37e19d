use model::{core::identifiers::ObjectId, error::ModelError};
use thiserror::Error;

/// All errors coming from the document store layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Low-level I/O failure, e.g. while reading a seed file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Documents could not be decoded.
    #[error("Invalid document data: {0}")]
    Decode(#[from] serde_json::Error),

    /// A write carried a document that breaks an item invariant.
    #[error("Invalid item: {0}")]
    InvalidItem(#[from] ModelError),

    /// A quantity change would take the stock below zero.
    #[error("Insufficient quantity for {id}: have {available}, change {delta}")]
    InsufficientQuantity {
        id: ObjectId,
        available: u32,
        delta: i64,
    },

    /// The find could not be evaluated.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// The store cannot serve requests right now.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
