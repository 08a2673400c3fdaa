//! Error types for turn execution.

use crate::combat::ActionError;
use crate::error::{ErrorSeverity, GameError};

use super::Side;

/// Errors surfaced while taking a turn in a [`super::Match`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("it is not {side}'s turn (active side is {active})")]
    OutOfTurn { side: Side, active: Side },

    #[error("attack action failed: {0}")]
    Action(#[from] ActionError),
}

impl GameError for MatchError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::OutOfTurn { .. } => ErrorSeverity::Validation,
            Self::Action(inner) => inner.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfTurn { .. } => "MATCH_OUT_OF_TURN",
            Self::Action(inner) => inner.error_code(),
        }
    }
}
