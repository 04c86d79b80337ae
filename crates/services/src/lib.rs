#![forbid(unsafe_code)]

pub mod dataset;
pub mod error;
pub mod quiz;

pub use quiz_core::Clock;

pub use dataset::DatasetIndex;
pub use error::{DatasetError, QuizError};
pub use quiz::{
    GuessFeedback, GuessOutcome, QuizPhase, QuizProgress, QuizSession, RunStarted, ScoredGuess,
};
