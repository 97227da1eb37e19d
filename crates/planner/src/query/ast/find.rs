//! Defines the AST for a find over a document collection.

use crate::query::ast::{common::OrderDir, expr::Expr};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Find {
    /// The collection being scanned.
    pub collection: String,

    /// Search expression handed to the store's text engine. `None` means
    /// no text constraint and a relevance score of zero for every document.
    pub text: Option<String>,

    /// Filter condition, which may reference the text score.
    pub filter: Option<Expr>,

    /// Sort keys, most significant first.
    pub order_by: Vec<OrderByExpr>,

    pub limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    pub expr: Expr,
    pub direction: OrderDir,
}
