use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The fixed set of categories the board displays.
///
/// Labels compare case-insensitively; stored rows whose label is outside this
/// set are kept in the repository but excluded from every grouped view.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Clothing,
    Sports,
    Cosmetics,
    Jewelry,
    Food,
    Electronics,
    Medical,
    Automobile,
    Education,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 9] = [
        Category::Clothing,
        Category::Sports,
        Category::Cosmetics,
        Category::Jewelry,
        Category::Food,
        Category::Electronics,
        Category::Medical,
        Category::Automobile,
        Category::Education,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Clothing => "clothing",
            Category::Sports => "sports",
            Category::Cosmetics => "cosmetics",
            Category::Jewelry => "jewelry",
            Category::Food => "food",
            Category::Electronics => "electronics",
            Category::Medical => "medical",
            Category::Automobile => "automobile",
            Category::Education => "education",
        }
    }

    /// Case-insensitive lookup; `None` for labels outside the fixed set.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "clothing" => Some(Category::Clothing),
            "sports" => Some(Category::Sports),
            "cosmetics" => Some(Category::Cosmetics),
            "jewelry" => Some(Category::Jewelry),
            "food" => Some(Category::Food),
            "electronics" => Some(Category::Electronics),
            "medical" => Some(Category::Medical),
            "automobile" => Some(Category::Automobile),
            "education" => Some(Category::Education),
            _ => None,
        }
    }

}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Category::parse("Food"), Some(Category::Food));
        assert_eq!(Category::parse(" ELECTRONICS "), Some(Category::Electronics));
    }

    #[test]
    fn parse_rejects_unknown_labels() {
        assert_eq!(Category::parse("furniture"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn all_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
    }
}
