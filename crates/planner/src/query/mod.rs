use crate::query::ast::expr::{Expr, Ident};
use model::core::value::Value;

pub mod ast;
pub mod builder;
pub mod macros;
pub mod offsets;
pub mod renderer;
pub mod search;

pub fn ident(name: &str) -> Expr {
    Expr::Identifier(Ident {
        name: name.to_string(),
    })
}

pub fn value(val: impl Into<Value>) -> Expr {
    Expr::Value(val.into())
}

/// The relevance score computed by the store's text search.
pub fn text_score() -> Expr {
    Expr::TextScore
}
