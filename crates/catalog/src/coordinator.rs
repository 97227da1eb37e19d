use crate::{
    error::CatalogError, metrics::Metrics, settings::CatalogSettings,
    strategy::PaginationStrategy,
};
use connectors::adapter::DocumentStore;
use model::pagination::{
    cursor::{PageDirection, SortMethod},
    page::PaginationResult,
    request::PaginationRequest,
};
use planner::query::offsets::strategy_for;
use std::sync::Arc;
use tracing::{error, info};

/// Picks the strategy for a request and runs it.
#[derive(Clone)]
pub struct PaginationCoordinator {
    store: Arc<dyn DocumentStore>,
    settings: CatalogSettings,
    metrics: Metrics,
}

impl PaginationCoordinator {
    pub fn new(store: Arc<dyn DocumentStore>, settings: CatalogSettings, metrics: Metrics) -> Self {
        PaginationCoordinator {
            store,
            settings,
            metrics,
        }
    }

    pub fn select(
        &self,
        method: SortMethod,
        direction: PageDirection,
    ) -> Result<PaginationStrategy, CatalogError> {
        match strategy_for(method, direction) {
            Ok(offset) => Ok(PaginationStrategy::new(
                offset,
                Arc::clone(&self.store),
                self.settings.clone(),
            )),
            Err(err) => {
                self.metrics.increment_rejections();
                error!(method = %method, direction = %direction, "No pagination strategy for request");
                Err(err.into())
            }
        }
    }

    pub async fn paginate(
        &self,
        request: &PaginationRequest,
    ) -> Result<PaginationResult, CatalogError> {
        let strategy = self.select(request.sort_method, request.direction)?;

        match strategy.paginate(request).await {
            Ok(page) => {
                self.metrics.record_page(page.len() as u64);
                info!(
                    strategy = strategy.name(),
                    items = page.len(),
                    "Served page"
                );
                Ok(page)
            }
            Err(err) => {
                if matches!(err, CatalogError::Store(_)) {
                    self.metrics.increment_store_failures();
                }
                error!(strategy = strategy.name(), error = %err, "Pagination failed");
                Err(err)
            }
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn settings(&self) -> &CatalogSettings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use connectors::{
        adapter::{ScoredItem, StoreKind},
        error::StoreError,
        memory::MemoryStore,
    };
    use model::{
        catalog::item::{Item, NewItem},
        core::identifiers::ObjectId,
    };
    use planner::query::ast::find::Find;
    use tracing_test::traced_test;

    // Store that fails every read
    struct UnavailableStore;

    #[async_trait]
    impl DocumentStore for UnavailableStore {
        async fn insert(&self, _item: NewItem) -> Result<ObjectId, StoreError> {
            Err(StoreError::Unavailable("down".into()))
        }

        async fn find_by_id(&self, _id: ObjectId) -> Result<Option<Item>, StoreError> {
            Err(StoreError::Unavailable("down".into()))
        }

        async fn update(&self, _id: ObjectId, _item: NewItem) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("down".into()))
        }

        async fn delete(&self, _id: ObjectId) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("down".into()))
        }

        async fn adjust_quantity(&self, _id: ObjectId, _delta: i64) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("down".into()))
        }

        async fn find(&self, _query: &Find) -> Result<Vec<ScoredItem>, StoreError> {
            Err(StoreError::Unavailable("down".into()))
        }

        async fn categories(&self) -> Result<Vec<String>, StoreError> {
            Err(StoreError::Unavailable("down".into()))
        }

        fn kind(&self) -> StoreKind {
            StoreKind::Other("unavailable".into())
        }
    }

    fn coordinator(store: Arc<dyn DocumentStore>) -> PaginationCoordinator {
        PaginationCoordinator::new(store, CatalogSettings::default(), Metrics::new())
    }

    #[test]
    fn test_select_mapping() {
        let c = coordinator(Arc::new(MemoryStore::new()));
        let cases = [
            (SortMethod::Text, PageDirection::Next, "TextNext"),
            (SortMethod::Text, PageDirection::Previous, "TextPrevious"),
            (SortMethod::PriceLowToHigh, PageDirection::Next, "PriceNext"),
            (SortMethod::PriceLowToHigh, PageDirection::Previous, "PricePrevious"),
        ];
        for (method, direction, name) in cases {
            assert_eq!(c.select(method, direction).unwrap().name(), name);
        }
    }

    #[test]
    fn test_select_rejects_unimplemented() {
        let c = coordinator(Arc::new(MemoryStore::new()));

        let err = c
            .select(SortMethod::PriceHighToLow, PageDirection::Next)
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::UnsupportedStrategy {
                method: SortMethod::PriceHighToLow,
                direction: PageDirection::Next
            }
        ));
        assert!(err.to_string().contains("Not a valid pagination strategy"));

        assert!(c.select(SortMethod::Date, PageDirection::Previous).is_err());
        assert_eq!(c.metrics().snapshot().strategy_rejections, 2);
    }

    #[tokio::test]
    async fn test_empty_store_yields_empty_pages() {
        let c = coordinator(Arc::new(MemoryStore::new()));
        for method in [SortMethod::Text, SortMethod::PriceLowToHigh] {
            for direction in [PageDirection::Next, PageDirection::Previous] {
                let request = PaginationRequest::builder(method, direction).build();
                let page = c.paginate(&request).await.unwrap();
                assert!(page.items.is_empty());
                assert!(page.ordering_keys.is_empty());
            }
        }
        assert_eq!(c.metrics().snapshot().pages_served, 4);
    }

    #[traced_test]
    #[tokio::test]
    async fn test_store_errors_propagate() {
        let c = coordinator(Arc::new(UnavailableStore));
        let request =
            PaginationRequest::builder(SortMethod::PriceLowToHigh, PageDirection::Next).build();

        let err = c.paginate(&request).await.unwrap_err();
        assert!(matches!(err, CatalogError::Store(StoreError::Unavailable(_))));
        assert_eq!(c.metrics().snapshot().store_failures, 1);
        assert!(logs_contain("Pagination failed"));
    }
}
