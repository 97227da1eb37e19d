pub mod catalog;
pub mod core;
pub mod error;
pub mod pagination;
