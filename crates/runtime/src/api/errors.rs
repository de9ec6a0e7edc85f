//! Unified error types surfaced by the runtime API.

use duel_core::{DuelError, ExecuteError, InitializationError, Side};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{side} action provider not set")]
    ProviderNotSet { side: Side },

    #[error("failed to initialize combat")]
    Initialization(#[from] InitializationError),

    #[error("{side} action rejected")]
    ActionRejected {
        side: Side,
        #[source]
        source: ExecuteError,
    },

    #[error("{side} turn plan ended without casting, punching, or skipping")]
    IncompletePlan { side: Side },

    #[error("{side} still holds {excess} card(s) over the hand limit after discarding")]
    DiscardUnresolved { side: Side, excess: usize },

    #[error("{side} provider failed: {message}")]
    Provider { side: Side, message: String },
}

impl RuntimeError {
    /// Whether the caller may retry after fixing the orchestration state,
    /// e.g. resolving a pending discard first.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::ActionRejected { source, .. } => source.severity().is_recoverable(),
            _ => false,
        }
    }
}
