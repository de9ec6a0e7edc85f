//! Duel-specific behavior tree nodes.
//!
//! - `conditions`: read the blackboard and succeed or fail
//! - `actions`: pick a spell and store it with [`super::AiContext::choose`]
//! - `filter`: the spell categories both kinds of node reason about

pub mod actions;
pub mod conditions;
pub mod filter;

pub use actions::*;
pub use conditions::*;
pub use filter::SpellKind;
