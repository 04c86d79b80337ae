use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use quiz_core::Clock;
use quiz_core::model::RoundCount;
use services::{DatasetIndex, QuizSession};

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn dataset(&self) -> Arc<DatasetIndex>;
    fn default_rounds(&self) -> RoundCount;
    fn clock(&self) -> Clock;

    /// Fixed RNG seed for reproducible runs; `None` seeds from the OS.
    fn rng_seed(&self) -> Option<u64>;
}

#[derive(Clone)]
pub struct AppContext {
    dataset: Arc<DatasetIndex>,
    default_rounds: RoundCount,
    clock: Clock,
    rng_seed: Option<u64>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &dyn UiApp) -> Self {
        Self {
            dataset: app.dataset(),
            default_rounds: app.default_rounds(),
            clock: app.clock(),
            rng_seed: app.rng_seed(),
        }
    }

    #[must_use]
    pub fn dataset(&self) -> Arc<DatasetIndex> {
        Arc::clone(&self.dataset)
    }

    #[must_use]
    pub fn default_rounds(&self) -> RoundCount {
        self.default_rounds
    }

    /// Fresh idle session over the shared dataset.
    #[must_use]
    pub fn new_session(&self) -> QuizSession {
        let rng = match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        QuizSession::new(self.dataset(), self.clock, rng)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app.as_ref())
}
