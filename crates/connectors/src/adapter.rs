use crate::error::StoreError;
use async_trait::async_trait;
use model::{
    catalog::item::{Item, NewItem},
    core::identifiers::ObjectId,
};
use planner::query::ast::find::Find;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreKind {
    Memory,
    Other(String),
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Memory => f.write_str("memory"),
            StoreKind::Other(name) => f.write_str(name),
        }
    }
}

/// A document returned by a find, with its text relevance
/// (0.0 when the find carried no text search).
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredItem {
    pub item: Item,
    pub score: f64,
}

/// Document collection with full-text search and ordered scans.
///
/// Writes against an id that does not exist are no-ops.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert(&self, item: NewItem) -> Result<ObjectId, StoreError>;
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Item>, StoreError>;
    async fn update(&self, id: ObjectId, item: NewItem) -> Result<(), StoreError>;
    async fn delete(&self, id: ObjectId) -> Result<(), StoreError>;

    /// Adds `delta` to the stock of an item.
    async fn adjust_quantity(&self, id: ObjectId, delta: i64) -> Result<(), StoreError>;

    /// Runs a find: text search, filter, sort, then limit.
    async fn find(&self, query: &Find) -> Result<Vec<ScoredItem>, StoreError>;

    /// The maintained category list.
    async fn categories(&self) -> Result<Vec<String>, StoreError>;

    fn kind(&self) -> StoreKind;
}
