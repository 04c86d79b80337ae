mod category;
mod prompt;
mod round;
mod summary;

pub use category::{Category, CategoryError};
pub use prompt::Prompt;
pub use round::{RoundCount, RoundCountError};
pub use summary::{RunSummary, RunSummaryError, ScoreTier, percentage};
