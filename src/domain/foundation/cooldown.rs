//! Cooldown value object (strictly positive duration).

use std::fmt;
use std::time::Duration;

use super::ValidationError;

/// Minimum time between two invocations of a command by the same invoker.
///
/// Stores the policy only; enforcing it is up to the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cooldown(Duration);

impl Cooldown {
    /// Creates a Cooldown, returning error if the duration is zero.
    pub fn try_new(duration: Duration) -> Result<Self, ValidationError> {
        if duration.is_zero() {
            return Err(ValidationError::out_of_range(
                "cooldown_ms",
                1,
                u64::MAX,
                0,
            ));
        }
        Ok(Self(duration))
    }

    /// Creates a Cooldown from milliseconds.
    pub fn from_millis(millis: u64) -> Result<Self, ValidationError> {
        Self::try_new(Duration::from_millis(millis))
    }

    /// Returns the cooldown as a Duration.
    pub fn as_duration(&self) -> Duration {
        self.0
    }

    /// Returns the cooldown in whole milliseconds.
    pub fn as_millis(&self) -> u128 {
        self.0.as_millis()
    }
}

impl From<Cooldown> for Duration {
    fn from(cooldown: Cooldown) -> Self {
        cooldown.0
    }
}

impl fmt::Display for Cooldown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0.as_millis())
    }
}
