use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The categories a catalog starts out with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Footwear,
    Food,
    Outdoor,
    Medicine,
    Music,
    Education,
    Entertainment,
    Candy,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Footwear,
        Category::Food,
        Category::Outdoor,
        Category::Medicine,
        Category::Music,
        Category::Education,
        Category::Entertainment,
        Category::Candy,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Footwear => "footwear",
            Category::Food => "food",
            Category::Outdoor => "outdoor",
            Category::Medicine => "medicine",
            Category::Music => "music",
            Category::Education => "education",
            Category::Entertainment => "entertainment",
            Category::Candy => "candy",
        }
    }
}

impl FromStr for Category {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ModelError::InvalidCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_category() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(Category::Candy.to_string(), "candy");
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Food".parse::<Category>().is_err());
        assert!("groceries".parse::<Category>().is_err());
    }
}
