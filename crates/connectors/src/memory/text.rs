//! Text search over the indexed fields of an item: name, brand and every
//! category tag.

use model::catalog::item::Item;
use planner::query::search::SearchExpression;
use std::collections::HashSet;

/// Lowercases, splits on non-alphanumeric characters and stems.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(stem)
        .collect()
}

/// Reduces common English plurals to their singular form.
pub fn stem(token: &str) -> String {
    if token.len() > 4
        && let Some(base) = token.strip_suffix("ies")
    {
        return format!("{base}y");
    }

    if let Some(base) = token.strip_suffix("es")
        && ["s", "x", "z", "ch", "sh"].iter().any(|s| base.ends_with(s))
    {
        return base.to_string();
    }

    if token.len() > 3 && token.ends_with('s') && !token.ends_with("ss") {
        return token[..token.len() - 1].to_string();
    }

    token.to_string()
}

fn indexed_fields(item: &Item) -> impl Iterator<Item = &str> {
    [item.name.as_str(), item.brand.as_str()]
        .into_iter()
        .chain(item.category.iter().map(String::as_str))
}

/// A parsed search expression ready to be matched against items.
#[derive(Debug, Clone)]
pub struct TextMatcher {
    /// Lowercased phrases; each must appear in some indexed field.
    phrases: Vec<String>,
    /// Stemmed bare terms.
    terms: Vec<String>,
    /// Distinct stemmed tokens of terms and phrases, used for scoring.
    scoring: Vec<String>,
}

impl TextMatcher {
    pub fn new(expression: &SearchExpression) -> Self {
        let phrases: Vec<String> = expression
            .phrases
            .iter()
            .map(|p| p.to_lowercase())
            .collect();

        let terms: Vec<String> = expression.terms.iter().flat_map(|t| tokenize(t)).collect();

        let mut seen = HashSet::new();
        let scoring = terms
            .iter()
            .cloned()
            .chain(phrases.iter().flat_map(|p| tokenize(p)))
            .filter(|t| seen.insert(t.clone()))
            .collect();

        TextMatcher {
            phrases,
            terms,
            scoring,
        }
    }

    /// The relevance of `item`, or `None` when it does not match.
    pub fn score(&self, item: &Item) -> Option<f64> {
        let fields: Vec<(String, Vec<String>)> = indexed_fields(item)
            .map(|f| (f.to_lowercase(), tokenize(f)))
            .collect();

        let has_phrases = self
            .phrases
            .iter()
            .all(|p| fields.iter().any(|(raw, _)| raw.contains(p.as_str())));
        if !has_phrases {
            return None;
        }

        if self.phrases.is_empty() {
            let any_term = self
                .terms
                .iter()
                .any(|t| fields.iter().any(|(_, tokens)| tokens.contains(t)));
            if !any_term {
                return None;
            }
        }

        let score = fields
            .iter()
            .filter(|(_, tokens)| !tokens.is_empty())
            .map(|(_, tokens)| {
                self.scoring
                    .iter()
                    .map(|term| tokens.iter().filter(|t| *t == term).count())
                    .filter(|&occurrences| occurrences > 0)
                    .map(|occurrences| 0.5 + 0.5 * occurrences as f64 / tokens.len() as f64)
                    .sum::<f64>()
            })
            .sum();

        Some(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{
        catalog::item::{NewItem, Seller},
        core::identifiers::ObjectId,
    };

    fn item(name: &str, brand: &str, category: &[&str]) -> Item {
        Item::from_new(
            ObjectId::new(),
            NewItem {
                name: name.into(),
                price: 1.0,
                description: "not indexed gusher".into(),
                category: category.iter().map(|c| c.to_string()).collect(),
                image_uri: "/image".into(),
                quantity: 1,
                brand: brand.into(),
                user: Seller {
                    username: "woo".into(),
                    email: "woo@gmail.com".into(),
                },
            },
        )
    }

    fn matcher(expression: &str) -> TextMatcher {
        TextMatcher::new(&SearchExpression::parse(expression))
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("Fruity Gushers, 12-pack!"), vec!["fruity", "gusher", "12", "pack"]);
        assert!(tokenize("...").is_empty());
    }

    #[test]
    fn test_stem_plurals() {
        assert_eq!(stem("candies"), "candy");
        assert_eq!(stem("boxes"), "box");
        assert_eq!(stem("gushers"), "gusher");
        assert_eq!(stem("shoes"), "shoe");
        assert_eq!(stem("glass"), "glass");
        assert_eq!(stem("bus"), "bus");
    }

    #[test]
    fn test_phrases_must_all_match() {
        let gusher = item("Gusher", "Fruity", &["food"]);
        assert!(matcher("\"Fruity\" \"food\"").score(&gusher).is_some());
        assert!(matcher("\"fruity\"").score(&gusher).is_some());
        assert!(matcher("\"Fruity\" \"music\"").score(&gusher).is_none());
    }

    #[test]
    fn test_terms_need_one_match_without_phrases() {
        let gusher = item("Gusher", "Fruity", &["food"]);
        assert!(matcher("gushers snack").score(&gusher).is_some());
        assert!(matcher("snack").score(&gusher).is_none());
    }

    #[test]
    fn test_description_is_not_indexed() {
        let other = item("Roll Up", "Fruity", &["food"]);
        assert!(matcher("gusher").score(&other).is_none());
    }

    #[test]
    fn test_phrase_with_unmatched_terms_still_matches() {
        let gusher = item("Gusher", "Fruity", &["food"]);
        assert!(matcher("\"Fruity\" snack").score(&gusher).is_some());
    }

    #[test]
    fn test_better_match_scores_higher() {
        let exact = item("Gusher", "Fruity", &["food"]);
        let diluted = item("Gusher Tropical Mix Flavors", "Fruity", &["food"]);
        let m = matcher("\"Fruity\" Gusher");

        let exact_score = m.score(&exact).unwrap();
        let diluted_score = m.score(&diluted).unwrap();
        assert!(exact_score > diluted_score);
        // name: 0.5 + 0.5 * 1/1, brand: 0.5 + 0.5 * 1/1
        assert_eq!(exact_score, 2.0);
    }
}
