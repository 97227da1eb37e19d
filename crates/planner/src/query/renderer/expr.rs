use crate::query::{
    ast::expr::Expr,
    renderer::{Render, Renderer},
};

impl Render for Expr {
    fn render(&self, r: &mut Renderer) {
        match self {
            Expr::Identifier(ident) => r.out.push_str(&ident.name),
            Expr::TextScore => r.out.push_str("$textScore"),
            Expr::Value(value) => r.out.push_str(&value.to_string()),
            Expr::BinaryOp(op) => {
                r.out.push('(');
                op.left.render(r);
                r.out.push(' ');
                r.out.push_str(op.op.symbol());
                r.out.push(' ');
                op.right.render(r);
                r.out.push(')');
            }
        }
    }
}
