use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundCountError {
    #[error("round count must be between {min} and {max}, got {value}")]
    OutOfRange { value: u32, min: u32, max: u32 },
}

/// Number of rounds in a run.
///
/// Bounded to `MIN..=MAX` so the number input and the session agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoundCount(u32);

impl RoundCount {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 20;
    pub const DEFAULT: RoundCount = RoundCount(5);

    /// Validates a requested round count.
    ///
    /// # Errors
    ///
    /// Returns `RoundCountError::OutOfRange` if `value` is outside `MIN..=MAX`.
    pub fn new(value: u32) -> Result<Self, RoundCountError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RoundCountError::OutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for RoundCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for RoundCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
