use catalog::{repository::CatalogRepository, settings::CatalogSettings};
use connectors::memory::MemoryStore;
use model::{
    catalog::item::{Item, NewItem, Seller},
    core::identifiers::ObjectId,
    pagination::{
        cursor::{Boundary, PageDirection, SortMethod},
        page::PaginationResult,
        request::PaginationRequest,
    },
};
use std::sync::Arc;

/// Upper bound on pages walked before a test gives up.
pub const MAX_PAGES: usize = 1_000;

/// Deterministic id whose order follows `n`.
pub fn fixed_id(n: u32) -> ObjectId {
    let mut bytes = [0u8; 12];
    bytes[8..].copy_from_slice(&n.to_be_bytes());
    ObjectId::from_bytes(bytes)
}

pub fn new_item(name: &str, brand: &str, category: &str, price: f64) -> NewItem {
    NewItem {
        name: name.to_string(),
        price,
        description: "Tasty".to_string(),
        category: vec![category.to_string()],
        image_uri: "/image".to_string(),
        quantity: 12,
        brand: brand.to_string(),
        user: Seller {
            username: "woo woo".to_string(),
            email: "woo@gmail.com".to_string(),
        },
    }
}

pub fn item(n: u32, name: &str, brand: &str, category: &str, price: f64) -> Item {
    Item::from_new(fixed_id(n), new_item(name, brand, category, price))
}

pub async fn catalog_with(items: Vec<Item>, page_size: usize) -> CatalogRepository {
    let store = MemoryStore::new();
    for item in items {
        store.put(item).await.unwrap();
    }
    CatalogRepository::new(Arc::new(store), CatalogSettings::new(page_size))
}

/// Filters shared by every request of one walk.
#[derive(Debug, Clone, Default)]
pub struct Filters {
    pub query: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
}

pub fn request(
    method: SortMethod,
    direction: PageDirection,
    boundary: Option<Boundary>,
    filters: &Filters,
) -> PaginationRequest {
    let builder = PaginationRequest::builder(method, direction)
        .query(filters.query.clone())
        .brand(filters.brand.clone())
        .category(filters.category.clone());

    match boundary {
        Some(boundary) => builder.boundary(boundary).build(),
        None => builder.build(),
    }
}

/// Pages `Next` from the first-page sentinel until an empty page.
pub async fn walk_forward(
    repo: &CatalogRepository,
    method: SortMethod,
    filters: &Filters,
) -> Vec<PaginationResult> {
    walk(repo, method, PageDirection::Next, filters).await
}

/// Pages `Previous` from the last-page sentinel until an empty page.
pub async fn walk_backward(
    repo: &CatalogRepository,
    method: SortMethod,
    filters: &Filters,
) -> Vec<PaginationResult> {
    walk(repo, method, PageDirection::Previous, filters).await
}

async fn walk(
    repo: &CatalogRepository,
    method: SortMethod,
    direction: PageDirection,
    filters: &Filters,
) -> Vec<PaginationResult> {
    let mut pages = Vec::new();
    let mut boundary = None;

    for _ in 0..MAX_PAGES {
        let page = repo
            .paginate(&request(method, direction, boundary, filters))
            .await
            .unwrap();
        if page.is_empty() {
            return pages;
        }

        boundary = match direction {
            PageDirection::Next => page.last_boundary(),
            PageDirection::Previous => page.first_boundary(),
        };
        pages.push(page);
    }

    panic!("pagination did not terminate after {MAX_PAGES} pages");
}

pub fn ids(pages: &[PaginationResult]) -> Vec<ObjectId> {
    pages.iter().flat_map(|p| p.ids()).collect()
}
