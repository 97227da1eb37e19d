use crate::{
    binary,
    error::PlanError,
    query::{
        ast::{
            common::OrderDir,
            expr::{BinaryOp, BinaryOperator, Expr},
            find::Find,
        },
        builder::find::FindBuilder,
        ident,
        search::build_search_expression,
        text_score, value,
    },
};
use model::{
    catalog::item::{FIELD_ID, FIELD_PRICE, Item},
    core::identifiers::ObjectId,
    pagination::{
        cursor::{Boundary, PageDirection, SortMethod},
        request::PaginationRequest,
    },
};
use tracing::debug;

/// Keyset pagination for one (ordering, direction) pair.
///
/// Every strategy orders by its primary key first and by ascending id among
/// equal keys, whichever way it pages.
pub trait OffsetStrategy: Send + Sync {
    /// Applies the boundary condition, scan order and limit to a builder.
    fn apply_to_builder(
        &self,
        builder: FindBuilder,
        boundary: &Boundary,
        limit: usize,
    ) -> FindBuilder;

    /// The value an item is positioned by. `score` is its text relevance.
    fn ordering_key(&self, item: &Item, score: f64) -> f64;

    /// True when the scan walks against display order, so fetched rows are
    /// reversed before they are returned.
    fn reverses_scan(&self) -> bool;

    fn name(&self) -> &'static str;

    /// Clones the boxed trait object.
    fn clone_box(&self) -> Box<dyn OffsetStrategy>;

    /// Builds the complete find for a page request: the search expression
    /// from the request filters plus this strategy's keyset clauses.
    fn plan(&self, collection: &str, request: &PaginationRequest, limit: usize) -> Find {
        let expression = build_search_expression(
            request.brand.as_deref(),
            request.category.as_deref(),
            request.query.as_deref(),
        );
        let builder = FindBuilder::new(collection).text_search(&expression);
        self.apply_to_builder(builder, &request.boundary, limit)
            .build()
    }
}

impl Clone for Box<dyn OffsetStrategy> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl std::fmt::Debug for dyn OffsetStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Puts scanned rows into display order for `strategy`.
pub fn display_order<T>(strategy: &dyn OffsetStrategy, mut rows: Vec<T>) -> Vec<T> {
    if strategy.reverses_scan() {
        rows.reverse();
    }
    rows
}

/// Price ascending, paging forward.
#[derive(Debug, Clone)]
pub struct PriceNext {
    pub col: String,
    pub pk: String,
}

/// Price ascending, paging backward.
#[derive(Debug, Clone)]
pub struct PricePrevious {
    pub col: String,
    pub pk: String,
}

/// Relevance descending, paging forward.
#[derive(Debug, Clone)]
pub struct TextNext {
    pub pk: String,
}

/// Relevance descending, paging backward.
#[derive(Debug, Clone)]
pub struct TextPrevious {
    pub pk: String,
}

impl Default for PriceNext {
    fn default() -> Self {
        PriceNext {
            col: FIELD_PRICE.to_string(),
            pk: FIELD_ID.to_string(),
        }
    }
}

impl Default for PricePrevious {
    fn default() -> Self {
        PricePrevious {
            col: FIELD_PRICE.to_string(),
            pk: FIELD_ID.to_string(),
        }
    }
}

impl Default for TextNext {
    fn default() -> Self {
        TextNext {
            pk: FIELD_ID.to_string(),
        }
    }
}

impl Default for TextPrevious {
    fn default() -> Self {
        TextPrevious {
            pk: FIELD_ID.to_string(),
        }
    }
}

/// `(key <past> k) OR (key = k AND pk <pk_past> anchor)`
fn keyset_condition(
    key: Expr,
    past: BinaryOperator,
    sort_key: f64,
    pk: &str,
    pk_past: BinaryOperator,
    anchor: ObjectId,
) -> Expr {
    let beyond = Expr::BinaryOp(Box::new(BinaryOp {
        left: key.clone(),
        op: past,
        right: value(sort_key),
    }));

    let tied = binary!(key, Eq, value(sort_key));

    let after_anchor = Expr::BinaryOp(Box::new(BinaryOp {
        left: ident(pk),
        op: pk_past,
        right: value(anchor),
    }));

    binary!(beyond, Or, binary!(tied, And, after_anchor))
}

impl OffsetStrategy for PriceNext {
    fn apply_to_builder(
        &self,
        builder: FindBuilder,
        boundary: &Boundary,
        limit: usize,
    ) -> FindBuilder {
        // WHERE price > k OR (price = k AND _id > anchor)
        let cond = keyset_condition(
            ident(&self.col),
            BinaryOperator::Gt,
            boundary.sort_key,
            &self.pk,
            BinaryOperator::Gt,
            boundary.anchor,
        );

        builder
            .filter(cond)
            .order_by(ident(&self.col), OrderDir::Asc)
            .order_by(ident(&self.pk), OrderDir::Asc)
            .limit(limit)
    }

    fn ordering_key(&self, item: &Item, _score: f64) -> f64 {
        item.field(&self.col).as_f64().unwrap_or(item.price)
    }

    fn reverses_scan(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "PriceNext"
    }

    fn clone_box(&self) -> Box<dyn OffsetStrategy> {
        Box::new(self.clone())
    }
}

impl OffsetStrategy for PricePrevious {
    fn apply_to_builder(
        &self,
        builder: FindBuilder,
        boundary: &Boundary,
        limit: usize,
    ) -> FindBuilder {
        // WHERE price < k OR (price = k AND _id < anchor), scanned nearest first
        let cond = keyset_condition(
            ident(&self.col),
            BinaryOperator::Lt,
            boundary.sort_key,
            &self.pk,
            BinaryOperator::Lt,
            boundary.anchor,
        );

        builder
            .filter(cond)
            .order_by(ident(&self.col), OrderDir::Desc)
            .order_by(ident(&self.pk), OrderDir::Desc)
            .limit(limit)
    }

    fn ordering_key(&self, item: &Item, _score: f64) -> f64 {
        item.field(&self.col).as_f64().unwrap_or(item.price)
    }

    fn reverses_scan(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "PricePrevious"
    }

    fn clone_box(&self) -> Box<dyn OffsetStrategy> {
        Box::new(self.clone())
    }
}

impl OffsetStrategy for TextNext {
    fn apply_to_builder(
        &self,
        builder: FindBuilder,
        boundary: &Boundary,
        limit: usize,
    ) -> FindBuilder {
        // Lower relevance is further along.
        let cond = keyset_condition(
            text_score(),
            BinaryOperator::Lt,
            boundary.sort_key,
            &self.pk,
            BinaryOperator::Gt,
            boundary.anchor,
        );

        builder
            .filter(cond)
            .order_by(text_score(), OrderDir::Desc)
            .order_by(ident(&self.pk), OrderDir::Asc)
            .limit(limit)
    }

    fn ordering_key(&self, _item: &Item, score: f64) -> f64 {
        score
    }

    fn reverses_scan(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "TextNext"
    }

    fn clone_box(&self) -> Box<dyn OffsetStrategy> {
        Box::new(self.clone())
    }
}

impl OffsetStrategy for TextPrevious {
    fn apply_to_builder(
        &self,
        builder: FindBuilder,
        boundary: &Boundary,
        limit: usize,
    ) -> FindBuilder {
        let cond = keyset_condition(
            text_score(),
            BinaryOperator::Gt,
            boundary.sort_key,
            &self.pk,
            BinaryOperator::Lt,
            boundary.anchor,
        );

        builder
            .filter(cond)
            .order_by(text_score(), OrderDir::Asc)
            .order_by(ident(&self.pk), OrderDir::Desc)
            .limit(limit)
    }

    fn ordering_key(&self, _item: &Item, score: f64) -> f64 {
        score
    }

    fn reverses_scan(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "TextPrevious"
    }

    fn clone_box(&self) -> Box<dyn OffsetStrategy> {
        Box::new(self.clone())
    }
}

/// Selects the strategy for an ordering and direction. Orderings without
/// a keyset implementation are rejected, never substituted.
pub fn strategy_for(
    method: SortMethod,
    direction: PageDirection,
) -> Result<Box<dyn OffsetStrategy>, PlanError> {
    let strategy: Box<dyn OffsetStrategy> = match (method, direction) {
        (SortMethod::Text, PageDirection::Next) => Box::new(TextNext::default()),
        (SortMethod::Text, PageDirection::Previous) => Box::new(TextPrevious::default()),
        (SortMethod::PriceLowToHigh, PageDirection::Next) => Box::new(PriceNext::default()),
        (SortMethod::PriceLowToHigh, PageDirection::Previous) => {
            Box::new(PricePrevious::default())
        }
        (SortMethod::PriceHighToLow, _) | (SortMethod::Date, _) => {
            return Err(PlanError::UnsupportedStrategy { method, direction });
        }
    };

    debug!(method = %method, direction = %direction, strategy = strategy.name(), "Selected offset strategy");
    Ok(strategy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::renderer::render;

    const ANCHOR: &str = "0000000000000000000000aa";

    fn boundary(k: f64) -> Boundary {
        Boundary::new(k, ANCHOR.parse().unwrap())
    }

    fn find(strategy: &dyn OffsetStrategy, b: Boundary) -> Find {
        strategy
            .apply_to_builder(FindBuilder::new("items"), &b, 4)
            .build()
    }

    #[test]
    fn test_price_next_clauses() {
        let find = find(&PriceNext::default(), boundary(12.5));
        assert_eq!(
            render(&find),
            "FIND items WHERE ((price > 12.5) OR ((price = 12.5) AND (_id > ObjectId(0000000000000000000000aa)))) \
             ORDER BY price ASC, _id ASC LIMIT 4"
        );
    }

    #[test]
    fn test_price_previous_clauses() {
        let find = find(&PricePrevious::default(), boundary(12.0));
        assert_eq!(
            render(&find),
            "FIND items WHERE ((price < 12) OR ((price = 12) AND (_id < ObjectId(0000000000000000000000aa)))) \
             ORDER BY price DESC, _id DESC LIMIT 4"
        );
    }

    #[test]
    fn test_text_next_clauses() {
        let find = find(&TextNext::default(), boundary(1.5));
        assert_eq!(
            render(&find),
            "FIND items WHERE (($textScore < 1.5) OR (($textScore = 1.5) AND (_id > ObjectId(0000000000000000000000aa)))) \
             ORDER BY $textScore DESC, _id ASC LIMIT 4"
        );
    }

    #[test]
    fn test_text_previous_clauses() {
        let find = find(&TextPrevious::default(), boundary(1.5));
        assert_eq!(
            render(&find),
            "FIND items WHERE (($textScore > 1.5) OR (($textScore = 1.5) AND (_id < ObjectId(0000000000000000000000aa)))) \
             ORDER BY $textScore ASC, _id DESC LIMIT 4"
        );
    }

    #[test]
    fn test_keyset_is_anded_with_existing_filter() {
        let existing = binary!(ident("quantity"), Gt, value(0.0));
        let builder = FindBuilder::new("items").filter(existing.clone());
        let find = PriceNext::default()
            .apply_to_builder(builder, &boundary(1.0), 4)
            .build();

        match find.filter {
            Some(Expr::BinaryOp(op)) => {
                assert_eq!(op.op, BinaryOperator::And);
                assert_eq!(op.left, existing);
            }
            other => panic!("unexpected filter: {other:?}"),
        }
    }

    #[test]
    fn test_plan_uses_request_filters() {
        let request = PaginationRequest::builder(SortMethod::PriceLowToHigh, PageDirection::Next)
            .brand(Some("Fruity".into()))
            .query(Some("Gusher".into()))
            .build();

        let find = PriceNext::default().plan("items", &request, 4);
        assert_eq!(find.text.as_deref(), Some("\"Fruity\" Gusher"));
        assert_eq!(find.limit, Some(4));
    }

    #[test]
    fn test_plan_without_filters_has_no_text() {
        let request = PaginationRequest::builder(SortMethod::Text, PageDirection::Next).build();
        let find = TextNext::default().plan("items", &request, 4);
        assert_eq!(find.text, None);
    }

    #[test]
    fn test_strategy_for_supported_pairs() {
        let cases = [
            (SortMethod::Text, PageDirection::Next, "TextNext"),
            (SortMethod::Text, PageDirection::Previous, "TextPrevious"),
            (SortMethod::PriceLowToHigh, PageDirection::Next, "PriceNext"),
            (SortMethod::PriceLowToHigh, PageDirection::Previous, "PricePrevious"),
        ];

        for (method, direction, name) in cases {
            let strategy = strategy_for(method, direction).unwrap();
            assert_eq!(strategy.name(), name);
            assert_eq!(strategy.reverses_scan(), direction == PageDirection::Previous);
        }
    }

    #[test]
    fn test_strategy_for_rejects_unimplemented_orderings() {
        let err = strategy_for(SortMethod::PriceHighToLow, PageDirection::Next).unwrap_err();
        assert_eq!(
            err,
            PlanError::UnsupportedStrategy {
                method: SortMethod::PriceHighToLow,
                direction: PageDirection::Next,
            }
        );
        assert!(err.to_string().starts_with("Not a valid pagination strategy"));

        assert!(strategy_for(SortMethod::Date, PageDirection::Previous).is_err());
    }

    #[test]
    fn test_display_order_reverses_previous_scans() {
        let prev = PricePrevious::default();
        assert_eq!(display_order(&prev, vec![3, 2, 1]), vec![1, 2, 3]);

        let next = PriceNext::default();
        assert_eq!(display_order(&next, vec![1, 2, 3]), vec![1, 2, 3]);
    }
}
