use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RunSummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("score ({score}) exceeds target rounds ({target})")]
    ScoreAboveTarget { score: u32, target: u32 },
}

//
// ─── TIER ─────────────────────────────────────────────────────────────────────
//

/// Qualitative band for a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    /// Every guess was right.
    Perfect,
    /// At least 70%.
    Pass,
    NeedsPractice,
}

impl ScoreTier {
    pub const PASS_THRESHOLD: f64 = 70.0;

    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 100.0 {
            Self::Perfect
        } else if percentage >= Self::PASS_THRESHOLD {
            Self::Pass
        } else {
            Self::NeedsPractice
        }
    }
}

/// `100 * score / target`, or 0 when there is no target.
#[must_use]
pub fn percentage(score: u32, target: u32) -> f64 {
    if target == 0 {
        return 0.0;
    }
    f64::from(score) * 100.0 / f64::from(target)
}

//
// ─── SUMMARY ──────────────────────────────────────────────────────────────────
//

/// Final result of a run, produced once the last round is answered.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    score: u32,
    target_rounds: u32,
    percentage: f64,
    tier: ScoreTier,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl RunSummary {
    /// # Errors
    ///
    /// Returns `RunSummaryError::ScoreAboveTarget` if `score > target_rounds`.
    /// Returns `RunSummaryError::InvalidTimeRange` if `completed_at` is before `started_at`.
    pub fn new(
        score: u32,
        target_rounds: u32,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, RunSummaryError> {
        if score > target_rounds {
            return Err(RunSummaryError::ScoreAboveTarget {
                score,
                target: target_rounds,
            });
        }
        if completed_at < started_at {
            return Err(RunSummaryError::InvalidTimeRange);
        }

        let percentage = percentage(score, target_rounds);
        Ok(Self {
            score,
            target_rounds,
            percentage,
            tier: ScoreTier::from_percentage(percentage),
            started_at,
            completed_at,
        })
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn target_rounds(&self) -> u32 {
        self.target_rounds
    }

    #[must_use]
    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    #[must_use]
    pub fn tier(&self) -> ScoreTier {
        self.tier
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }
}
