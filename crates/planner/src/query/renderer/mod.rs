//! Renders query ASTs into a readable one-line form for logs and errors.

use std::fmt;

pub mod expr;
pub mod find;

/// A trait for any AST node that can be rendered into query text.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

#[derive(Default)]
pub struct Renderer {
    pub out: String,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.out
    }
}

/// Renders any node to a string in one call.
pub fn render<R: Render + ?Sized>(node: &R) -> String {
    let mut renderer = Renderer::new();
    node.render(&mut renderer);
    renderer.finish()
}

impl fmt::Display for crate::query::ast::find::Find {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

impl fmt::Display for crate::query::ast::expr::Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
