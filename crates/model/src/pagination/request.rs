use crate::pagination::cursor::{Boundary, PageDirection, SortMethod};
use serde::{Deserialize, Serialize};

/// One keyset page request: where to start, which way to go, and the
/// optional filters that narrow the result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationRequest {
    pub sort_method: SortMethod,
    pub direction: PageDirection,
    pub boundary: Boundary,
    pub query: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
}

impl PaginationRequest {
    pub fn builder(sort_method: SortMethod, direction: PageDirection) -> PaginationRequestBuilder {
        PaginationRequestBuilder::new(sort_method, direction)
    }
}

pub struct PaginationRequestBuilder {
    sort_method: SortMethod,
    direction: PageDirection,
    boundary: Option<Boundary>,
    query: Option<String>,
    brand: Option<String>,
    category: Option<String>,
}

impl PaginationRequestBuilder {
    pub fn new(sort_method: SortMethod, direction: PageDirection) -> Self {
        PaginationRequestBuilder {
            sort_method,
            direction,
            boundary: None,
            query: None,
            brand: None,
            category: None,
        }
    }

    pub fn boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = Some(boundary);
        self
    }

    pub fn query(mut self, query: Option<String>) -> Self {
        self.query = query;
        self
    }

    pub fn brand(mut self, brand: Option<String>) -> Self {
        self.brand = brand;
        self
    }

    pub fn category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    /// Without an explicit boundary the request starts from the sentinel
    /// for its method and direction.
    pub fn build(self) -> PaginationRequest {
        let boundary = self
            .boundary
            .unwrap_or_else(|| Boundary::first_page(self.sort_method, self.direction));

        PaginationRequest {
            sort_method: self.sort_method,
            direction: self.direction,
            boundary,
            query: self.query,
            brand: self.brand,
            category: self.category,
        }
    }
}
