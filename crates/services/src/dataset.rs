use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, info, warn};

use quiz_core::model::{Category, Prompt};

use crate::error::DatasetError;

/// Items available per category, scanned once at startup.
///
/// Every requested category has an entry, possibly empty. The index is
/// read-only after construction and can be shared behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetIndex {
    entries: Vec<(Category, Vec<PathBuf>)>,
}

impl DatasetIndex {
    /// Scan `root/<category>` for every category.
    ///
    /// Categories without a directory get an empty item list. Items are sorted
    /// by path so repeated scans of the same tree produce the same index.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Unavailable` if `root` is missing or not a directory.
    /// Returns `DatasetError::Io` if a category directory exists but cannot be read.
    pub fn build(root: &Path, categories: &[Category]) -> Result<Self, DatasetError> {
        if !root.is_dir() {
            return Err(DatasetError::Unavailable {
                path: root.to_path_buf(),
            });
        }

        let mut entries: Vec<(Category, Vec<PathBuf>)> = Vec::with_capacity(categories.len());
        for &category in categories {
            if entries.iter().any(|(existing, _)| *existing == category) {
                continue;
            }
            let dir = root.join(category.as_str());
            let items = if dir.is_dir() {
                list_files(&dir)?
            } else {
                debug!(category = %category, dir = %dir.display(), "category directory missing");
                Vec::new()
            };
            if items.is_empty() {
                warn!(category = %category, "category has no items");
            }
            entries.push((category, items));
        }

        let index = Self { entries };
        info!(
            root = %root.display(),
            categories = index.entries.len(),
            items = index.total_items(),
            "dataset indexed"
        );
        Ok(index)
    }

    /// Build an index from already-known items.
    #[must_use]
    pub fn from_entries<I, P>(entries: impl IntoIterator<Item = (Category, I)>) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut index = Self {
            entries: Vec::new(),
        };
        for (category, items) in entries {
            let items: Vec<PathBuf> = items.into_iter().map(Into::into).collect();
            match index.entries.iter_mut().find(|(existing, _)| *existing == category) {
                Some((_, existing)) => existing.extend(items),
                None => index.entries.push((category, items)),
            }
        }
        index
    }

    /// Pick a category uniformly, then an item uniformly within it.
    ///
    /// Items in small categories are therefore more likely to be drawn than
    /// items in large ones.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::EmptyCategory` if the chosen category has no items.
    /// Returns `DatasetError::NoCategories` if the index was built without categories.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Prompt, DatasetError> {
        let (category, items) = self.entries.choose(rng).ok_or(DatasetError::NoCategories)?;
        let item = items
            .choose(rng)
            .ok_or(DatasetError::EmptyCategory(*category))?;
        Ok(Prompt::new(*category, item.clone()))
    }

    /// Categories in index order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.iter().map(|(category, _)| *category)
    }

    /// Items for `category`, empty if the category is not indexed.
    #[must_use]
    pub fn items(&self, category: Category) -> &[PathBuf] {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == category)
            .map(|(_, items)| items.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self, category: Category) -> usize {
        self.items(category).len()
    }

    #[must_use]
    pub fn total_items(&self) -> usize {
        self.entries.iter().map(|(_, items)| items.len()).sum()
    }

    /// Categories that would fail a draw.
    #[must_use]
    pub fn empty_categories(&self) -> Vec<Category> {
        self.entries
            .iter()
            .filter(|(_, items)| items.is_empty())
            .map(|(category, _)| *category)
            .collect()
    }
}

fn list_files(dir: &Path) -> Result<Vec<PathBuf>, DatasetError> {
    let io_err = |source| DatasetError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut items = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() {
            items.push(path);
        }
    }
    items.sort();
    Ok(items)
}
