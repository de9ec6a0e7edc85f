//! Behavior-tree AI for choosing spells.
//!
//! Decision-making runs in three steps every turn:
//!
//! 1. **Strategy**: [`AiStrategyFactory`] assigns a closed [`AiStrategy`]
//!    once per duel from difficulty, level, and the wizard's name
//! 2. **Tree**: [`presets::for_strategy`] builds the strategy's behavior tree
//! 3. **Evaluation**: the tree ticks once against an [`AiContext`]; the
//!    chosen spell is cast, or the AI punches when nothing was chosen
//!
//! # Core Components
//!
//! - [`AiProvider`]: implements [`crate::ActionProvider`]
//! - [`AiContext`]: blackboard with state queries and the chosen spell
//! - [`AiMemory`]: the only state carried between decisions
//! - [`nodes`], [`subtrees`], [`presets`]: the tree building blocks

pub mod context;
pub mod factory;
pub mod memory;
pub mod nodes;
pub mod presets;
pub mod provider;
pub mod strategy;
pub mod subtrees;

pub use context::AiContext;
pub use factory::AiStrategyFactory;
pub use memory::AiMemory;
pub use provider::{AI_PUNCH_TIER, AiProvider};
pub use strategy::{AiStrategy, Archetype};
