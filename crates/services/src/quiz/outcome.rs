use quiz_core::model::{Category, Prompt, RunSummary};

/// What `start_run` changed.
#[derive(Debug, Clone, PartialEq)]
pub struct RunStarted {
    pub target_rounds: u32,
    pub prompt: Prompt,
}

/// Per-guess result signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessFeedback {
    Correct,
    Incorrect { correct: Category },
}

impl GuessFeedback {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, GuessFeedback::Correct)
    }
}

/// A guess that counted towards the run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredGuess {
    pub feedback: GuessFeedback,
    /// Prompt drawn for the next round; `None` once the run is complete.
    pub next_prompt: Option<Prompt>,
    /// Present only on the guess that completes the run.
    pub summary: Option<RunSummary>,
}

/// What `submit_guess` changed.
#[derive(Debug, Clone, PartialEq)]
pub enum GuessOutcome {
    /// The session was idle or complete; nothing changed.
    Ignored,
    Scored(ScoredGuess),
}
