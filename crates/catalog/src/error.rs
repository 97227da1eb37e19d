use connectors::error::StoreError;
use model::pagination::cursor::{PageDirection, SortMethod};
use planner::error::PlanError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// A sort method and direction with no pagination strategy reached the
    /// coordinator. This is a server defect, not a bad request.
    #[error("Not a valid pagination strategy: sort method '{method}', page '{direction}'")]
    UnsupportedStrategy {
        method: SortMethod,
        direction: PageDirection,
    },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl From<PlanError> for CatalogError {
    fn from(err: PlanError) -> Self {
        match err {
            PlanError::UnsupportedStrategy { method, direction } => {
                CatalogError::UnsupportedStrategy { method, direction }
            }
        }
    }
}
