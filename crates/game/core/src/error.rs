//! Common error infrastructure for duel-core.
//!
//! Domain-specific errors (`ActionError`, `MatchError`, `TemplateError`,
//! `RosterError`) live next to the operations they guard. This module holds the
//! classification shared by all of them so frontends can decide how loudly to
//! report a failure without matching on every variant.

/// Severity level of an error, used for categorization and reporting.
///
/// - **Validation**: invalid input (bad attack index, out-of-turn action,
///   malformed template); reject it and let the user try again
/// - **Internal**: the caller broke an invariant the core relies on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input that should be rejected without retry.
    Validation,

    /// Unexpected state inconsistency. Indicates a bug in the caller.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates a bug rather than bad input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all duel-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who is at fault, not on impact
/// - Return a stable upper-case code per variant for logs and tests
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
