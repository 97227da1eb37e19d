#[macro_export]
macro_rules! value {
    ($val:expr) => {
        $crate::query::ast::expr::Expr::Value(::model::core::value::Value::from($val))
    };
}

/// Builds `left <op> right` as a boxed binary expression.
#[macro_export]
macro_rules! binary {
    ($left:expr, $op:ident, $right:expr) => {
        $crate::query::ast::expr::Expr::BinaryOp(Box::new($crate::query::ast::expr::BinaryOp {
            left: $left,
            op: $crate::query::ast::expr::BinaryOperator::$op,
            right: $right,
        }))
    };
}
