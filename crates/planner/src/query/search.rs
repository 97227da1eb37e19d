//! Composition and parsing of text-search expressions.
//!
//! An expression is a space-separated mix of double-quoted phrases, which
//! must all match, and bare terms, of which at least one must match.

/// Composes the filters of a page request into one search expression.
///
/// Brand and category become exact phrases, free text is appended as bare
/// terms, in that order. Absent or empty inputs contribute nothing.
pub fn build_search_expression(
    brand: Option<&str>,
    category: Option<&str>,
    query: Option<&str>,
) -> String {
    let mut parts = Vec::with_capacity(3);

    if let Some(brand) = brand.map(phrase_body).filter(|b| !b.is_empty()) {
        parts.push(format!("\"{brand}\""));
    }
    if let Some(category) = category.map(phrase_body).filter(|c| !c.is_empty()) {
        parts.push(format!("\"{category}\""));
    }
    if let Some(query) = query.map(str::trim).filter(|q| !q.is_empty()) {
        parts.push(query.to_string());
    }

    parts.join(" ")
}

// Quotes inside a phrase would end it early.
fn phrase_body(s: &str) -> String {
    s.replace('"', "").trim().to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchExpression {
    pub phrases: Vec<String>,
    pub terms: Vec<String>,
}

impl SearchExpression {
    /// Splits an expression into phrases and terms. An unterminated quote
    /// runs to the end of the input.
    pub fn parse(expression: &str) -> Self {
        let mut parsed = SearchExpression::default();
        let mut rest = expression;

        while let Some(start) = rest.find('"') {
            parsed.push_terms(&rest[..start]);

            let after = &rest[start + 1..];
            let (phrase, remainder) = match after.find('"') {
                Some(end) => (&after[..end], &after[end + 1..]),
                None => (after, ""),
            };

            let phrase = phrase.trim();
            if !phrase.is_empty() {
                parsed.phrases.push(phrase.to_string());
            }
            rest = remainder;
        }
        parsed.push_terms(rest);

        parsed
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty() && self.terms.is_empty()
    }

    fn push_terms(&mut self, s: &str) {
        self.terms
            .extend(s.split_whitespace().map(ToString::to_string));
    }
}
