use catalog::repository::CatalogRepository;
use std::sync::Arc;

pub struct AppState {
    pub repository: CatalogRepository,
}

impl AppState {
    pub fn new(repository: CatalogRepository) -> Arc<Self> {
        Arc::new(Self { repository })
    }
}
