mod outcome;
mod progress;
mod session;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use outcome::{GuessFeedback, GuessOutcome, RunStarted, ScoredGuess};
pub use progress::{QuizPhase, QuizProgress};
pub use session::QuizSession;
