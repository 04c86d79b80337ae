/// Where a session sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// No run configured yet.
    Idle,
    Running,
    /// Every round answered; guesses are ignored until the next run.
    Complete,
}

/// Aggregated view of run progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub score: u32,
    pub attempts: u32,
    pub target: u32,
    pub remaining: u32,
    pub is_complete: bool,
}
