use std::fmt;
use std::str::FromStr;

use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CategoryError {
    #[error("unknown category: {0}")]
    Unknown(String),
}

//
// ─── CATEGORY ─────────────────────────────────────────────────────────────────
//

/// One of the fixed labels the quiz asks about.
///
/// The label string doubles as the dataset folder name, so `as_str` and
/// `FromStr` must stay in sync with the on-disk layout:
///
/// ```text
/// image_data/
///   glioma/  meningioma/  no_tumor/  pituitary/
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Glioma,
    Meningioma,
    NoTumor,
    Pituitary,
}

impl Category {
    /// Every category, in the order the guess buttons are shown.
    pub const ALL: [Category; 4] = [
        Category::Glioma,
        Category::Meningioma,
        Category::NoTumor,
        Category::Pituitary,
    ];

    /// Folder / label name for this category.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Glioma => "glioma",
            Category::Meningioma => "meningioma",
            Category::NoTumor => "no_tumor",
            Category::Pituitary => "pituitary",
        }
    }

    /// Human-facing label for buttons and feedback.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Glioma => "Glioma",
            Category::Meningioma => "Meningioma",
            Category::NoTumor => "No tumor",
            Category::Pituitary => "Pituitary",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    /// Case-sensitive, exact match on the folder name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CategoryError::Unknown(s.to_string()))
    }
}
