use crate::{error::CatalogError, settings::CatalogSettings};
use connectors::adapter::DocumentStore;
use model::pagination::{page::PaginationResult, request::PaginationRequest};
use planner::query::offsets::{OffsetStrategy, display_order};
use std::{fmt, sync::Arc};
use tracing::debug;

/// Runs one keyset strategy against the document store.
#[derive(Clone)]
pub struct PaginationStrategy {
    offset: Box<dyn OffsetStrategy>,
    store: Arc<dyn DocumentStore>,
    settings: CatalogSettings,
}

impl PaginationStrategy {
    pub fn new(
        offset: Box<dyn OffsetStrategy>,
        store: Arc<dyn DocumentStore>,
        settings: CatalogSettings,
    ) -> Self {
        PaginationStrategy {
            offset,
            store,
            settings,
        }
    }

    pub fn name(&self) -> &'static str {
        self.offset.name()
    }

    /// Fetches the page past `request.boundary`, in display order, with
    /// the ordering key of every item.
    pub async fn paginate(
        &self,
        request: &PaginationRequest,
    ) -> Result<PaginationResult, CatalogError> {
        let find = self
            .offset
            .plan(&self.settings.collection, request, self.settings.page_size);
        debug!(strategy = self.name(), query = %find, "Fetching page");

        let rows = self.store.find(&find).await?;
        let rows = display_order(self.offset.as_ref(), rows);

        Ok(PaginationResult::from_pairs(rows.into_iter().map(|row| {
            let key = self.offset.ordering_key(&row.item, row.score);
            (row.item, key)
        })))
    }
}

impl fmt::Debug for PaginationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginationStrategy")
            .field("offset", &self.offset.name())
            .field("store", &self.store.kind())
            .field("settings", &self.settings)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use connectors::memory::MemoryStore;
    use model::{
        catalog::item::{Item, NewItem, Seller},
        core::identifiers::ObjectId,
        pagination::cursor::{Boundary, PageDirection, SortMethod},
    };
    use planner::query::offsets::{PriceNext, PricePrevious, TextNext};

    fn id(n: u8) -> ObjectId {
        let mut bytes = [0u8; 12];
        bytes[11] = n;
        ObjectId::from_bytes(bytes)
    }

    fn item(n: u8, name: &str, price: f64) -> Item {
        Item::from_new(
            id(n),
            NewItem {
                name: name.into(),
                price,
                description: "Tasty".into(),
                category: vec!["food".into()],
                image_uri: "/image".into(),
                quantity: 12,
                brand: "Fruity".into(),
                user: Seller {
                    username: "woo woo".into(),
                    email: "woo@gmail.com".into(),
                },
            },
        )
    }

    async fn store() -> Arc<MemoryStore> {
        let store = MemoryStore::new();
        store.put(item(1, "Gusher", 10.05)).await.unwrap();
        store.put(item(2, "Gusher", 11.5)).await.unwrap();
        store.put(item(3, "Gusher", 12.5)).await.unwrap();
        store.put(item(4, "Gusher", 12.5)).await.unwrap();
        store.put(item(5, "Gusher Tropical Mix", 15.0)).await.unwrap();
        Arc::new(store)
    }

    fn strategy(offset: Box<dyn OffsetStrategy>, store: Arc<MemoryStore>) -> PaginationStrategy {
        PaginationStrategy::new(offset, store, CatalogSettings::new(2))
    }

    #[tokio::test]
    async fn test_price_next_from_tie() {
        let s = strategy(Box::new(PriceNext::default()), store().await);
        let request = PaginationRequest::builder(SortMethod::PriceLowToHigh, PageDirection::Next)
            .boundary(Boundary::new(12.5, id(3)))
            .build();

        let page = s.paginate(&request).await.unwrap();
        assert_eq!(page.ids(), vec![id(4), id(5)]);
        assert_eq!(page.ordering_keys, vec![12.5, 15.0]);
    }

    #[tokio::test]
    async fn test_price_previous_is_in_display_order() {
        let s = strategy(Box::new(PricePrevious::default()), store().await);
        let request =
            PaginationRequest::builder(SortMethod::PriceLowToHigh, PageDirection::Previous)
                .boundary(Boundary::new(12.0, ObjectId::MIN))
                .build();

        let page = s.paginate(&request).await.unwrap();
        assert_eq!(page.ordering_keys, vec![10.05, 11.5]);
    }

    #[tokio::test]
    async fn test_text_next_orders_by_relevance() {
        let s = strategy(Box::new(TextNext::default()), store().await);
        let request = PaginationRequest::builder(SortMethod::Text, PageDirection::Next)
            .query(Some("gusher".into()))
            .build();

        let page = s.paginate(&request).await.unwrap();
        // Four exact matches tie on score; ids break the tie.
        assert_eq!(page.ids(), vec![id(1), id(2)]);
        assert_eq!(page.ordering_keys[0], page.ordering_keys[1]);
        assert_eq!(s.name(), "TextNext");
    }
}
