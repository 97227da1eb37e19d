pub mod common;
pub mod expr;
pub mod find;
