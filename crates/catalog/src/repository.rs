use crate::{
    coordinator::PaginationCoordinator, error::CatalogError, metrics::Metrics,
    settings::CatalogSettings,
};
use connectors::adapter::DocumentStore;
use model::{
    catalog::item::{Item, NewItem},
    core::identifiers::ObjectId,
    pagination::{page::PaginationResult, request::PaginationRequest},
};
use std::sync::Arc;
use tracing::info;

/// The product catalog: item storage plus keyset pagination over it.
#[derive(Clone)]
pub struct CatalogRepository {
    store: Arc<dyn DocumentStore>,
    coordinator: PaginationCoordinator,
}

impl CatalogRepository {
    pub fn new(store: Arc<dyn DocumentStore>, settings: CatalogSettings) -> Self {
        let coordinator = PaginationCoordinator::new(Arc::clone(&store), settings, Metrics::new());
        CatalogRepository { store, coordinator }
    }

    pub async fn create(&self, item: NewItem) -> Result<ObjectId, CatalogError> {
        let id = self.store.insert(item).await?;
        info!(id = %id, "Created item");
        Ok(id)
    }

    pub async fn find_one(&self, id: ObjectId) -> Result<Option<Item>, CatalogError> {
        Ok(self.store.find_by_id(id).await?)
    }

    pub async fn update(&self, id: ObjectId, item: NewItem) -> Result<(), CatalogError> {
        Ok(self.store.update(id, item).await?)
    }

    pub async fn delete(&self, id: ObjectId) -> Result<(), CatalogError> {
        Ok(self.store.delete(id).await?)
    }

    /// Moves the stock of an item up or down by one.
    pub async fn change_quantity(&self, id: ObjectId, up: bool) -> Result<(), CatalogError> {
        let delta = if up { 1 } else { -1 };
        Ok(self.store.adjust_quantity(id, delta).await?)
    }

    pub async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        Ok(self.store.categories().await?)
    }

    pub async fn is_known_category(&self, category: &str) -> Result<bool, CatalogError> {
        Ok(self.categories().await?.iter().any(|c| c == category))
    }

    pub async fn paginate(
        &self,
        request: &PaginationRequest,
    ) -> Result<PaginationResult, CatalogError> {
        self.coordinator.paginate(request).await
    }

    pub fn coordinator(&self) -> &PaginationCoordinator {
        &self.coordinator
    }

    pub fn metrics(&self) -> &Metrics {
        self.coordinator.metrics()
    }
}
