use crate::{adapter::ScoredItem, error::StoreError};
use model::{catalog::item::Item, core::value::Value};
use planner::query::ast::{
    common::OrderDir,
    expr::{BinaryOperator, Expr},
    find::OrderByExpr,
};
use std::cmp::Ordering;

/// Evaluates an expression against one document and its text score.
pub fn eval(expr: &Expr, item: &Item, score: f64) -> Result<Value, StoreError> {
    match expr {
        Expr::Identifier(ident) => Ok(item.field(&ident.name)),
        Expr::TextScore => Ok(Value::Float(score)),
        Expr::Value(value) => Ok(value.clone()),
        Expr::BinaryOp(op) if op.op.is_logical() => {
            let left = as_bool(eval(&op.left, item, score)?)?;
            let result = match op.op {
                BinaryOperator::And => left && as_bool(eval(&op.right, item, score)?)?,
                _ => left || as_bool(eval(&op.right, item, score)?)?,
            };
            Ok(Value::Boolean(result))
        }
        Expr::BinaryOp(op) => {
            let left = eval(&op.left, item, score)?;
            let right = eval(&op.right, item, score)?;
            Ok(Value::Boolean(compare(&left, op.op, &right)))
        }
    }
}

/// Whether a document passes `filter`.
pub fn matches(filter: &Expr, item: &Item, score: f64) -> Result<bool, StoreError> {
    as_bool(eval(filter, item, score)?)
}

fn as_bool(value: Value) -> Result<bool, StoreError> {
    match value {
        Value::Boolean(b) => Ok(b),
        other => Err(StoreError::InvalidQuery(format!(
            "expected a condition, got {other}"
        ))),
    }
}

// Values of different kinds never satisfy an ordering comparison. An array
// equals a scalar it contains.
fn compare(left: &Value, op: BinaryOperator, right: &Value) -> bool {
    if let (Value::StringArray(values), Value::String(needle)) = (left, right) {
        let contains = values.iter().any(|v| v == needle);
        return match op {
            BinaryOperator::Eq => contains,
            BinaryOperator::NotEq => !contains,
            _ => false,
        };
    }

    let ord = left.compare(right);
    match op {
        BinaryOperator::Eq => ord == Some(Ordering::Equal),
        BinaryOperator::NotEq => ord != Some(Ordering::Equal),
        BinaryOperator::Gt => ord == Some(Ordering::Greater),
        BinaryOperator::GtEq => matches!(ord, Some(Ordering::Greater | Ordering::Equal)),
        BinaryOperator::Lt => ord == Some(Ordering::Less),
        BinaryOperator::LtEq => matches!(ord, Some(Ordering::Less | Ordering::Equal)),
        BinaryOperator::And | BinaryOperator::Or => false,
    }
}

/// Sorts rows by the order-by list. Keys that cannot be compared are
/// treated as equal and fall through to the next key.
pub fn sort(rows: &mut Vec<ScoredItem>, order_by: &[OrderByExpr]) -> Result<(), StoreError> {
    if order_by.is_empty() {
        return Ok(());
    }

    let mut keyed = Vec::with_capacity(rows.len());
    for row in rows.drain(..) {
        let keys = order_by
            .iter()
            .map(|o| eval(&o.expr, &row.item, row.score))
            .collect::<Result<Vec<_>, _>>()?;
        keyed.push((keys, row));
    }

    keyed.sort_by(|(a, _), (b, _)| {
        for (i, order) in order_by.iter().enumerate() {
            let ord = a[i].compare(&b[i]).unwrap_or(Ordering::Equal);
            let ord = match order.direction {
                OrderDir::Asc => ord,
                OrderDir::Desc => ord.reverse(),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    });

    rows.extend(keyed.into_iter().map(|(_, row)| row));
    Ok(())
}
