use crate::{
    adapter::{DocumentStore, ScoredItem, StoreKind},
    error::StoreError,
    memory::text::TextMatcher,
};
use async_trait::async_trait;
use model::{
    catalog::{
        category::Category,
        item::{Item, NewItem},
    },
    core::identifiers::ObjectId,
};
use planner::query::{ast::find::Find, search::SearchExpression};
use std::{collections::BTreeMap, path::Path};
use tokio::sync::RwLock;
use tracing::{debug, info};

pub mod eval;
pub mod text;

/// In-process document collection with a text index over name, brand and
/// category tags.
pub struct MemoryStore {
    items: RwLock<BTreeMap<ObjectId, Item>>,
    categories: Vec<String>,
}

impl MemoryStore {
    /// An empty store with the default category list.
    pub fn new() -> Self {
        Self::with_categories(Category::ALL.iter().map(|c| c.to_string()).collect())
    }

    pub fn with_categories(categories: Vec<String>) -> Self {
        MemoryStore {
            items: RwLock::new(BTreeMap::new()),
            categories,
        }
    }

    /// Loads a JSON array of new items into an empty store.
    pub async fn from_seed_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        let items: Vec<NewItem> = serde_json::from_str(&content)?;

        let store = Self::new();
        let ids = store.seed(items).await?;
        info!(path = %path.display(), count = ids.len(), "Seeded memory store");

        Ok(store)
    }

    pub async fn seed(&self, items: Vec<NewItem>) -> Result<Vec<ObjectId>, StoreError> {
        let mut ids = Vec::with_capacity(items.len());
        for item in items {
            ids.push(self.insert(item).await?);
        }
        Ok(ids)
    }

    /// Stores an item under the id it already carries, replacing any
    /// document with that id.
    pub async fn put(&self, item: Item) -> Result<(), StoreError> {
        item.validate()?;
        self.items.write().await.insert(item.id, item);
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, item: NewItem) -> Result<ObjectId, StoreError> {
        item.validate()?;
        let id = ObjectId::new();
        self.items
            .write()
            .await
            .insert(id, Item::from_new(id, item));
        Ok(id)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Item>, StoreError> {
        Ok(self.items.read().await.get(&id).cloned())
    }

    async fn update(&self, id: ObjectId, item: NewItem) -> Result<(), StoreError> {
        item.validate()?;
        let mut items = self.items.write().await;
        if let Some(existing) = items.get_mut(&id) {
            *existing = Item::from_new(id, item);
        }
        Ok(())
    }

    async fn delete(&self, id: ObjectId) -> Result<(), StoreError> {
        self.items.write().await.remove(&id);
        Ok(())
    }

    async fn adjust_quantity(&self, id: ObjectId, delta: i64) -> Result<(), StoreError> {
        let mut items = self.items.write().await;
        let Some(item) = items.get_mut(&id) else {
            return Ok(());
        };

        let updated = item.quantity as i64 + delta;
        if updated < 0 {
            return Err(StoreError::InsufficientQuantity {
                id,
                available: item.quantity,
                delta,
            });
        }
        item.quantity = u32::try_from(updated)
            .map_err(|_| StoreError::InvalidQuery(format!("quantity {updated} out of range")))?;

        Ok(())
    }

    async fn find(&self, query: &Find) -> Result<Vec<ScoredItem>, StoreError> {
        let matcher = query
            .text
            .as_deref()
            .map(|t| TextMatcher::new(&SearchExpression::parse(t)));

        let items = self.items.read().await;
        let mut rows = Vec::new();
        for item in items.values() {
            let score = match &matcher {
                Some(m) => match m.score(item) {
                    Some(score) => score,
                    None => continue,
                },
                None => 0.0,
            };

            if let Some(filter) = &query.filter
                && !eval::matches(filter, item, score)?
            {
                continue;
            }

            rows.push(ScoredItem {
                item: item.clone(),
                score,
            });
        }
        drop(items);

        eval::sort(&mut rows, &query.order_by)?;
        if let Some(limit) = query.limit {
            rows.truncate(limit);
        }

        debug!(query = %query, returned = rows.len(), "Find evaluated");
        Ok(rows)
    }

    async fn categories(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.categories.clone())
    }

    fn kind(&self) -> StoreKind {
        StoreKind::Memory
    }
}
