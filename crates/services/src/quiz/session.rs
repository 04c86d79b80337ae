use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

use quiz_core::Clock;
use quiz_core::model::{Category, Prompt, RoundCount, RunSummary};

use super::outcome::{GuessFeedback, GuessOutcome, RunStarted, ScoredGuess};
use super::progress::{QuizPhase, QuizProgress};
use crate::dataset::DatasetIndex;
use crate::error::QuizError;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One user's quiz state: score, attempts, round target and the current prompt.
///
/// The session starts `Idle` with a preview prompt already drawn so there is
/// something to show before the first run. `start_run` moves it to `Running`;
/// the guess that reaches the target moves it to `Complete`.
///
/// Failed operations leave every field untouched.
pub struct QuizSession {
    index: Arc<DatasetIndex>,
    clock: Clock,
    rng: StdRng,
    score: u32,
    attempts: u32,
    target_rounds: u32,
    current: Option<Prompt>,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Create an idle session and draw a preview prompt.
    ///
    /// A failed preview draw is logged and leaves the session without a prompt.
    #[must_use]
    pub fn new(index: Arc<DatasetIndex>, clock: Clock, mut rng: StdRng) -> Self {
        let current = match index.pick_random(&mut rng) {
            Ok(prompt) => Some(prompt),
            Err(err) => {
                warn!(error = %err, "could not draw preview prompt");
                None
            }
        };

        Self {
            index,
            clock,
            rng,
            score: 0,
            attempts: 0,
            target_rounds: 0,
            current,
            started_at: None,
            completed_at: None,
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub fn target_rounds(&self) -> u32 {
        self.target_rounds
    }

    #[must_use]
    pub fn current_prompt(&self) -> Option<&Prompt> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn dataset(&self) -> &DatasetIndex {
        &self.index
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        if self.target_rounds == 0 {
            QuizPhase::Idle
        } else if self.attempts >= self.target_rounds {
            QuizPhase::Complete
        } else {
            QuizPhase::Running
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase() == QuizPhase::Complete
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            score: self.score,
            attempts: self.attempts,
            target: self.target_rounds,
            remaining: self.target_rounds.saturating_sub(self.attempts),
            is_complete: self.is_complete(),
        }
    }

    /// Start (or restart) a run of `round_count` rounds.
    ///
    /// Any progress from a previous run is discarded.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::RoundCount` if `round_count` is out of range.
    /// Returns `QuizError::Dataset` if no prompt could be drawn.
    pub fn start_run(&mut self, round_count: u32) -> Result<RunStarted, QuizError> {
        let rounds = RoundCount::new(round_count)?;
        let prompt = self.index.pick_random(&mut self.rng)?;

        self.score = 0;
        self.attempts = 0;
        self.target_rounds = rounds.get();
        self.current = Some(prompt.clone());
        self.started_at = Some(self.clock.now());
        self.completed_at = None;

        info!(rounds = self.target_rounds, "quiz run started");
        Ok(RunStarted {
            target_rounds: self.target_rounds,
            prompt,
        })
    }

    /// Record a guess for the current prompt.
    ///
    /// Outside a running session this is a no-op and returns `GuessOutcome::Ignored`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Dataset` if the next prompt cannot be drawn; the guess
    /// is not recorded in that case.
    pub fn submit_guess(&mut self, guess: Category) -> Result<GuessOutcome, QuizError> {
        if self.attempts >= self.target_rounds {
            debug!(guess = %guess, "guess ignored outside a running quiz");
            return Ok(GuessOutcome::Ignored);
        }
        let Some(current) = self.current.as_ref() else {
            return Ok(GuessOutcome::Ignored);
        };

        let feedback = if current.is_answered_by(guess) {
            GuessFeedback::Correct
        } else {
            GuessFeedback::Incorrect {
                correct: current.category(),
            }
        };
        let attempts = self.attempts + 1;
        let score = self.score + u32::from(feedback.is_correct());
        debug!(guess = %guess, correct = feedback.is_correct(), attempts, "guess scored");

        if attempts >= self.target_rounds {
            let (started_at, completed_at) = self.run_window(self.clock.now());
            let summary = RunSummary::new(score, self.target_rounds, started_at, completed_at)?;

            self.attempts = attempts;
            self.score = score;
            self.completed_at = Some(completed_at);
            info!(
                score,
                rounds = self.target_rounds,
                percentage = summary.percentage(),
                "quiz run complete"
            );

            return Ok(GuessOutcome::Scored(ScoredGuess {
                feedback,
                next_prompt: None,
                summary: Some(summary),
            }));
        }

        let next = self.index.pick_random(&mut self.rng)?;
        self.attempts = attempts;
        self.score = score;
        self.current = Some(next.clone());

        Ok(GuessOutcome::Scored(ScoredGuess {
            feedback,
            next_prompt: Some(next),
            summary: None,
        }))
    }

    /// Final result of the run, once every round has been answered.
    #[must_use]
    pub fn summarize(&self) -> Option<RunSummary> {
        if !self.is_complete() {
            return None;
        }
        let (started_at, completed_at) =
            self.run_window(self.completed_at.unwrap_or_else(|| self.clock.now()));
        RunSummary::new(self.score, self.target_rounds, started_at, completed_at).ok()
    }

    /// Start and end of the current run; the end never precedes the start,
    /// even when the wall clock has stepped backwards.
    fn run_window(&self, now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        let started_at = self.started_at.unwrap_or(now);
        (started_at, now.max(started_at))
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("score", &self.score)
            .field("attempts", &self.attempts)
            .field("target_rounds", &self.target_rounds)
            .field("current", &self.current)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
