//! Shared error types for the services crate.

use std::path::PathBuf;

use quiz_core::model::{Category, RoundCountError, RunSummaryError};
use thiserror::Error;

/// Errors emitted while building or drawing from a `DatasetIndex`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DatasetError {
    #[error("dataset directory is unavailable: {}", .path.display())]
    Unavailable { path: PathBuf },
    #[error("failed to read dataset directory {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("category {0} has no items")]
    EmptyCategory(Category),
    #[error("dataset has no categories")]
    NoCategories,
}

/// Errors emitted by `QuizSession`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error(transparent)]
    RoundCount(#[from] RoundCountError),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Summary(#[from] RunSummaryError),
}
