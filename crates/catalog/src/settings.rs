use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 4;
pub const DEFAULT_COLLECTION: &str = "products";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Items per page, at least 1.
    pub page_size: usize,
    pub collection: String,
}

impl CatalogSettings {
    pub fn new(page_size: usize) -> Self {
        CatalogSettings {
            page_size: page_size.max(1),
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }

    pub fn with_collection(mut self, collection: &str) -> Self {
        self.collection = collection.to_string();
        self
    }
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
