//! Error types for the action execution pipeline.

use crate::error::{DuelError, ErrorSeverity};
use crate::state::Side;

/// Orchestration mistakes rejected by [`super::CombatEngine::execute`].
///
/// A rejected action never touches the state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("{actor} cannot act during {current}'s turn")]
    ActorNotCurrent { actor: Side, current: Side },

    #[error("{side} must discard down to the hand limit before the duel continues")]
    DiscardPending { side: Side },

    /// `AdvanceTurn` only resumes a duel paused at the discard gate.
    #[error("{side} cannot advance the turn without a pending discard")]
    NoPendingDiscard { side: Side },
}

impl DuelError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ActorNotCurrent { .. } | Self::NoPendingDiscard { .. } => {
                ErrorSeverity::Validation
            }
            Self::DiscardPending { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ActorNotCurrent { .. } => "EXECUTE_ACTOR_NOT_CURRENT",
            Self::DiscardPending { .. } => "EXECUTE_DISCARD_PENDING",
            Self::NoPendingDiscard { .. } => "EXECUTE_NO_PENDING_DISCARD",
        }
    }
}
