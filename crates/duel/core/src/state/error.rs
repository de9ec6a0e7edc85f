use crate::error::{DuelError, ErrorSeverity};
use crate::state::Side;

/// Errors raised while setting up a duel.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitializationError {
    /// A wizard entered combat with no health pool and would lose before
    /// acting.
    #[error("{side} wizard '{name}' has no health (max_health = 0)")]
    NoHealth { side: Side, name: String },
}

impl DuelError for InitializationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoHealth { .. } => "INIT_NO_HEALTH",
        }
    }
}
