use crate::{core::identifiers::ObjectId, error::ModelError};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The orderings a catalog page can be requested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortMethod {
    /// Relevance to the search expression, best match first.
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "price: low - high")]
    PriceLowToHigh,
    #[serde(rename = "price: high - low")]
    PriceHighToLow,
    #[serde(rename = "date")]
    Date,
}

impl SortMethod {
    pub const ALL: [SortMethod; 4] = [
        SortMethod::Text,
        SortMethod::PriceLowToHigh,
        SortMethod::PriceHighToLow,
        SortMethod::Date,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            SortMethod::Text => "text",
            SortMethod::PriceLowToHigh => "price: low - high",
            SortMethod::PriceHighToLow => "price: high - low",
            SortMethod::Date => "date",
        }
    }
}

impl FromStr for SortMethod {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ModelError::InvalidSortMethod(s.to_string()))
    }
}

impl fmt::Display for SortMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which way to move from the boundary item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageDirection {
    Next,
    Previous,
}

impl PageDirection {
    pub const fn as_str(&self) -> &'static str {
        match self {
            PageDirection::Next => "next",
            PageDirection::Previous => "previous",
        }
    }
}

impl FromStr for PageDirection {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "next" => Ok(PageDirection::Next),
            "previous" => Ok(PageDirection::Previous),
            other => Err(ModelError::InvalidPageDirection(other.to_string())),
        }
    }
}

impl fmt::Display for PageDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composite keyset cursor: the ordering value of one boundary item paired
/// with its id, which breaks ties.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub sort_key: f64,
    pub anchor: ObjectId,
}

impl Boundary {
    pub const fn new(sort_key: f64, anchor: ObjectId) -> Self {
        Boundary { sort_key, anchor }
    }

    /// The sentinel boundary that sits outside every real item.
    ///
    /// Paging `Next` from it yields the first page; paging `Previous` from
    /// it yields the last page.
    pub fn first_page(method: SortMethod, direction: PageDirection) -> Self {
        match (method, direction) {
            (SortMethod::Text, PageDirection::Next) => {
                Boundary::new(f64::INFINITY, ObjectId::MIN)
            }
            (SortMethod::Text, PageDirection::Previous) => {
                Boundary::new(f64::NEG_INFINITY, ObjectId::MAX)
            }
            (SortMethod::PriceLowToHigh, PageDirection::Next) => Boundary::new(0.0, ObjectId::MIN),
            (SortMethod::PriceLowToHigh, PageDirection::Previous) => {
                Boundary::new(f64::INFINITY, ObjectId::MAX)
            }
            (_, PageDirection::Next) => Boundary::new(f64::INFINITY, ObjectId::MIN),
            (_, PageDirection::Previous) => Boundary::new(f64::NEG_INFINITY, ObjectId::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_method_wire_strings() {
        for method in SortMethod::ALL {
            assert_eq!(method.as_str().parse::<SortMethod>().unwrap(), method);
        }
        assert_eq!(
            "price: low - high".parse::<SortMethod>().unwrap(),
            SortMethod::PriceLowToHigh
        );
        assert!("price".parse::<SortMethod>().is_err());
    }

    #[test]
    fn test_sort_method_serde() {
        let json = serde_json::to_string(&SortMethod::PriceHighToLow).unwrap();
        assert_eq!(json, "\"price: high - low\"");
    }

    #[test]
    fn test_page_direction_parse() {
        assert_eq!("next".parse::<PageDirection>().unwrap(), PageDirection::Next);
        assert_eq!(
            "previous".parse::<PageDirection>().unwrap(),
            PageDirection::Previous
        );
        assert_eq!(
            "back".parse::<PageDirection>().unwrap_err(),
            ModelError::InvalidPageDirection("back".into())
        );
    }

    #[test]
    fn test_first_page_sentinels() {
        let b = Boundary::first_page(SortMethod::Text, PageDirection::Next);
        assert_eq!(b.sort_key, f64::INFINITY);
        assert_eq!(b.anchor, ObjectId::MIN);

        let b = Boundary::first_page(SortMethod::PriceLowToHigh, PageDirection::Next);
        assert_eq!(b.sort_key, 0.0);
        assert_eq!(b.anchor, ObjectId::MIN);

        let b = Boundary::first_page(SortMethod::Text, PageDirection::Previous);
        assert_eq!(b.sort_key, f64::NEG_INFINITY);
        assert_eq!(b.anchor, ObjectId::MAX);

        let b = Boundary::first_page(SortMethod::PriceLowToHigh, PageDirection::Previous);
        assert_eq!(b.sort_key, f64::INFINITY);
        assert_eq!(b.anchor, ObjectId::MAX);
    }
}
