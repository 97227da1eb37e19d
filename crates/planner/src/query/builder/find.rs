use crate::query::ast::{
    common::OrderDir,
    expr::{BinaryOp, BinaryOperator, Expr},
    find::{Find, OrderByExpr},
};

#[derive(Debug, Clone)]
pub struct FindBuilder {
    pub ast: Find,
}

impl FindBuilder {
    pub fn new(collection: &str) -> Self {
        Self {
            ast: Find {
                collection: collection.to_string(),
                ..Default::default()
            },
        }
    }

    /// Attaches a text search. An empty expression leaves the query
    /// without a text constraint.
    pub fn text_search(mut self, expression: &str) -> Self {
        self.ast.text = if expression.is_empty() {
            None
        } else {
            Some(expression.to_string())
        };
        self
    }

    /// Adds a condition, AND-ed with any filter already present.
    pub fn filter(mut self, cond: Expr) -> Self {
        self.ast.filter = Some(match self.ast.filter.take() {
            Some(existing) => Expr::BinaryOp(Box::new(BinaryOp {
                left: existing,
                op: BinaryOperator::And,
                right: cond,
            })),
            None => cond,
        });
        self
    }

    pub fn order_by(mut self, expr: Expr, direction: OrderDir) -> Self {
        self.ast.order_by.push(OrderByExpr { expr, direction });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.ast.limit = Some(limit);
        self
    }

    pub fn build(self) -> Find {
        self.ast
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{binary, query::ident, value};

    #[test]
    fn test_filters_are_and_combined() {
        let ast = FindBuilder::new("items")
            .filter(binary!(ident("price"), Gt, value!(1.0)))
            .filter(binary!(ident("quantity"), Gt, value!(0.0)))
            .build();

        let expected = binary!(
            binary!(ident("price"), Gt, value!(1.0)),
            And,
            binary!(ident("quantity"), Gt, value!(0.0))
        );
        assert_eq!(ast.filter, Some(expected));
    }

    #[test]
    fn test_empty_text_search_is_no_constraint() {
        let ast = FindBuilder::new("items").text_search("").build();
        assert_eq!(ast.text, None);

        let ast = FindBuilder::new("items").text_search("\"Fruity\"").build();
        assert_eq!(ast.text.as_deref(), Some("\"Fruity\""));
    }

    #[test]
    fn test_order_and_limit() {
        let ast = FindBuilder::new("items")
            .order_by(ident("price"), OrderDir::Asc)
            .order_by(ident("_id"), OrderDir::Asc)
            .limit(4)
            .build();

        assert_eq!(ast.collection, "items");
        assert_eq!(ast.order_by.len(), 2);
        assert_eq!(ast.order_by[1].expr, ident("_id"));
        assert_eq!(ast.limit, Some(4));
    }
}
