//! Common error infrastructure for duel-core.
//!
//! Gameplay problems (not enough mana, a card that is not in hand) are not
//! errors: they are logged and the duel continues. The error types in this
//! crate cover misuse of the API by the orchestrating caller, and they never
//! leave the state half-updated.

/// Severity level of an error, used for categorization and recovery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The same request may succeed later (e.g. after the pending discard).
    Recoverable,

    /// Invalid input that should not be retried unchanged.
    Validation,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all duel-core errors.
///
/// Implementors derive `thiserror::Error` for Display/Error and classify
/// themselves so callers can pick a recovery strategy without matching on
/// every variant.
pub trait DuelError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for this error variant, used in logs and tests.
    fn error_code(&self) -> &'static str;
}
