//! Status messages for operation feedback.

use std::fmt;

/// Outcome line printed after a command that changes the plan.
///
/// `Unchanged` covers requests that were valid but had nothing to act on,
/// such as removing an id that is no longer in the slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationStatus {
    Success(String),
    Unchanged(String),
    Failure(String),
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(message.into())
    }

    pub fn unchanged(message: impl Into<String>) -> Self {
        Self::Unchanged(message.into())
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    /// Picks success or unchanged from a planner operation's return value.
    pub fn from_outcome(changed: bool, done: impl Into<String>, skipped: impl Into<String>) -> Self {
        if changed {
            Self::success(done)
        } else {
            Self::unchanged(skipped)
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(message) => writeln!(f, "**Done:** {message}"),
            Self::Unchanged(message) => writeln!(f, "_No change:_ {message}"),
            Self::Failure(message) => writeln!(f, "**Error:** {message}"),
        }
    }
}
