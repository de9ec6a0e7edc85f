//! Action provider implementations for different kinds of duelists.

pub mod ai;
pub mod scripted;

pub use ai::{AiProvider, AiStrategy};
pub use scripted::ScriptedProvider;
