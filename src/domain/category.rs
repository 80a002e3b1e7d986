//! Category entity and identifiers.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Primary key of a category row.
///
/// Id `0` never names a stored category; quiz play uses it to mean
/// "all categories".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(i32);

impl CategoryId {
    /// Quiz sentinel for "no category filter".
    pub const ALL: Self = Self(0);

    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    #[must_use]
    pub const fn is_all(self) -> bool {
        self.0 == 0
    }
}

impl From<i32> for CategoryId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// A question category such as "Science" or "History".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    #[must_use]
    pub fn new(id: impl Into<CategoryId>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
        }
    }
}

/// Id-to-label mapping as returned to clients (`{"1": "Science", ...}`).
pub type CategoryMap = BTreeMap<CategoryId, String>;

/// Builds the id-to-label mapping from a list of categories.
#[must_use]
pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|category| (category.id, category.kind.clone()))
        .collect()
}

/// The six categories the trivia game ships with.
#[must_use]
pub fn default_categories() -> Vec<Category> {
    [
        "Science",
        "Art",
        "Geography",
        "History",
        "Entertainment",
        "Sports",
    ]
    .into_iter()
    .zip(1_i32..)
    .map(|(kind, id)| Category::new(id, kind))
    .collect()
}
