//! Category and source catalogs
//!
//! The catalogs drive expense categorization. Matching is by case-insensitive
//! substring and the declaration order of both tables decides ties, so the
//! tables are kept as ordered lists.

use serde::{Deserialize, Serialize};

/// Category assigned when no catalog category matches
pub const MISCELLANEOUS: &str = "Miscellaneous";

/// Source assigned when no catalog source matches
pub const UNKNOWN_SOURCE: &str = "Unknown";

const DEFAULT_CATEGORIES: &[&str] = &[
    "Food",
    "Coffee",
    "Dining",
    "Transport",
    "Rent",
    "Utilities",
    "Entertainment",
    "Shopping",
    "Electronics",
    "Healthcare",
    "Fitness",
    "Education",
    "Travel",
    "Groceries",
    "Savings",
];

const DEFAULT_SOURCES: &[(&str, &[&str])] = &[
    ("Food", &["Whole Foods", "Trader Joe's", "Local market", "Costco"]),
    ("Coffee", &["Starbucks", "Blue Bottle", "Peet's Coffee", "Local cafe"]),
    (
        "Dining",
        &["Restaurant", "Food delivery", "Lunch break", "Business dinner"],
    ),
    (
        "Transport",
        &["Uber", "Lyft", "Public transit", "Gas station", "Car maintenance"],
    ),
    (
        "Entertainment",
        &["Cinema", "Concert", "Theater", "Streaming service"],
    ),
    ("Shopping", &["Amazon", "Target", "Mall", "Department store"]),
    (
        "Electronics",
        &["Apple Store", "Best Buy", "B&H Photo", "Online tech store"],
    ),
    ("Healthcare", &["Pharmacy", "Doctor visit", "Therapy session"]),
    ("Fitness", &["Gym membership", "Yoga studio", "Sports equipment"]),
    ("Groceries", &["Supermarket", "Farmer's market", "Online grocery"]),
    ("Travel", &["Airline tickets", "Hotel booking", "Vacation package"]),
];

/// Known sources belonging to one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceGroup {
    pub category: String,
    pub sources: Vec<String>,
}

/// A source hit from the catalog, with the category that owns it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceMatch<'a> {
    pub category: &'a str,
    pub source: &'a str,
}

/// Ordered category list plus ordered category -> sources table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub sources: Vec<SourceGroup>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            sources: DEFAULT_SOURCES
                .iter()
                .map(|(category, sources)| SourceGroup {
                    category: category.to_string(),
                    sources: sources.iter().map(|s| s.to_string()).collect(),
                })
                .collect(),
        }
    }
}

impl Catalog {
    /// First category (in catalog order) whose name occurs in the text
    pub fn match_category(&self, text: &str) -> Option<&str> {
        let haystack = text.to_lowercase();
        self.categories
            .iter()
            .find(|category| haystack.contains(&category.to_lowercase()))
            .map(String::as_str)
    }

    /// First source (categories in order, then sources in order) whose
    /// name occurs in the text
    pub fn match_source(&self, text: &str) -> Option<SourceMatch<'_>> {
        let haystack = text.to_lowercase();
        self.sources.iter().find_map(|group| {
            group
                .sources
                .iter()
                .find(|source| haystack.contains(&source.to_lowercase()))
                .map(|source| SourceMatch {
                    category: &group.category,
                    source,
                })
        })
    }
}
