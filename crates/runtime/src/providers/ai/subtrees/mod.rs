//! Reusable behavior tree subtrees.
//!
//! Subtrees are organized in two layers that the strategy presets compose:
//!
//! - **Layer 1 (patterns)**: one condition guarding one spell choice
//! - **Layer 2 (tactics)**: weighted mixes and fallbacks built from patterns
//!
//! ```text
//! presets::balanced()
//!   └─ Selector
//!       ├─ patterns::heal_when_below(0.3)       ← Layer 1
//!       ├─ patterns::finish_when_opponent_below(0.3)
//!       ├─ patterns::debuff_when_opponent_buffed(100)
//!       ├─ tactics::balanced_mix()              ← Layer 2
//!       └─ patterns::any_affordable()
//! ```

pub mod patterns;
pub mod tactics;

use behavior_tree::Node;

use super::context::AiContext;

/// Every subtree and preset returns this type.
pub type BehaviorTree<'a> = Node<'a, AiContext<'a>>;
