use model::pagination::cursor::{PageDirection, SortMethod};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// No keyset strategy exists for this ordering and direction.
    #[error("Not a valid pagination strategy: sort method '{method}', page '{direction}'")]
    UnsupportedStrategy {
        method: SortMethod,
        direction: PageDirection,
    },
}
