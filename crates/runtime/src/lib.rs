//! Runtime orchestration for wizard duels.
//!
//! This crate wires the action provider abstraction, the behavior-tree AI,
//! and the combat engine into a synchronous duel loop. Consumers embed
//! [`DuelRuntime`] to play a duel turn by turn or to completion.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the provider trait and error types
//! - [`providers`] contains the AI and scripted providers
pub mod api;
pub mod providers;
pub mod runtime;

pub use api::{ActionProvider, Result, RuntimeError, SkipTurnProvider, TurnPlan};
pub use providers::ai::{
    AI_PUNCH_TIER, AiContext, AiMemory, AiProvider, AiStrategy, AiStrategyFactory, Archetype,
};
pub use providers::ScriptedProvider;
pub use runtime::{DuelRuntime, DuelRuntimeBuilder, DuelSummary, RuntimeConfig, StepOutcome};
