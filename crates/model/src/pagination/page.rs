use crate::{catalog::item::Item, core::identifiers::ObjectId, pagination::cursor::Boundary};
use serde::Serialize;

/// A page of items in display order, with the ordering value each item
/// was positioned by. `ordering_keys[i]` belongs to `items[i]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PaginationResult {
    pub items: Vec<Item>,
    pub ordering_keys: Vec<f64>,
}

impl PaginationResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (Item, f64)>) -> Self {
        let (items, ordering_keys) = pairs.into_iter().unzip();
        PaginationResult {
            items,
            ordering_keys,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Boundary of the first displayed item; page `Previous` from here.
    pub fn first_boundary(&self) -> Option<Boundary> {
        let item = self.items.first()?;
        let key = self.ordering_keys.first()?;
        Some(Boundary::new(*key, item.id))
    }

    /// Boundary of the last displayed item; page `Next` from here.
    pub fn last_boundary(&self) -> Option<Boundary> {
        let item = self.items.last()?;
        let key = self.ordering_keys.last()?;
        Some(Boundary::new(*key, item.id))
    }

    pub fn ids(&self) -> Vec<ObjectId> {
        self.items.iter().map(|i| i.id).collect()
    }
}
