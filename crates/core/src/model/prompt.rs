use std::path::{Path, PathBuf};

use crate::model::Category;

/// The challenge currently on screen: an item and the category it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    category: Category,
    item: PathBuf,
}

impl Prompt {
    #[must_use]
    pub fn new(category: Category, item: impl Into<PathBuf>) -> Self {
        Self {
            category,
            item: item.into(),
        }
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Opaque item identifier (a file path for on-disk datasets).
    #[must_use]
    pub fn item(&self) -> &Path {
        &self.item
    }

    /// Exact match against the prompt's category.
    #[must_use]
    pub fn is_answered_by(&self, guess: Category) -> bool {
        self.category == guess
    }
}
