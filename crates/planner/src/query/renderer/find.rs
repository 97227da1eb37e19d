use crate::query::{
    ast::{common::OrderDir, find::Find},
    renderer::{Render, Renderer},
};

impl Render for Find {
    fn render(&self, r: &mut Renderer) {
        r.out.push_str("FIND ");
        r.out.push_str(&self.collection);

        if let Some(text) = &self.text {
            r.out.push_str(" TEXT ");
            r.out.push_str(&format!("{text:?}"));
        }

        if let Some(filter) = &self.filter {
            r.out.push_str(" WHERE ");
            filter.render(r);
        }

        if !self.order_by.is_empty() {
            r.out.push_str(" ORDER BY ");
            for (i, order) in self.order_by.iter().enumerate() {
                if i > 0 {
                    r.out.push_str(", ");
                }
                order.expr.render(r);
                r.out.push_str(match order.direction {
                    OrderDir::Asc => " ASC",
                    OrderDir::Desc => " DESC",
                });
            }
        }

        if let Some(limit) = self.limit {
            r.out.push_str(&format!(" LIMIT {limit}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        binary,
        query::{ast::common::OrderDir, builder::find::FindBuilder, ident},
        value,
    };

    #[test]
    fn test_render_find() {
        let find = FindBuilder::new("items")
            .text_search("\"Fruity\" Gusher")
            .filter(binary!(ident("price"), Gt, value!(10.0)))
            .order_by(ident("price"), OrderDir::Asc)
            .order_by(ident("_id"), OrderDir::Asc)
            .limit(4)
            .build();

        assert_eq!(
            find.to_string(),
            r#"FIND items TEXT "\"Fruity\" Gusher" WHERE (price > 10) ORDER BY price ASC, _id ASC LIMIT 4"#
        );
    }

    #[test]
    fn test_render_bare_find() {
        let find = FindBuilder::new("items").build();
        assert_eq!(find.to_string(), "FIND items");
    }
}
