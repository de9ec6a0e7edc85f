//! Lightweight behavior tree library for turn-based decision making.
//!
//! Every tick completes immediately: there is no `Running` state and no
//! delta time. A tree is evaluated once per decision against a mutable
//! context (the "blackboard"), and nodes either succeed or fail.
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success or Failure
//! - Composite nodes: [`Sequence`], [`Selector`], [`WeightedSelector`]
//! - Decorator nodes: [`Inverter`], [`AlwaysSucceed`], [`Chance`]
//! - [`Roll`]: randomness hook a context implements to drive [`Chance`] and
//!   [`WeightedSelector`] deterministically
//!
//! Trees borrow their context for the duration of a tick only, so nodes are
//! boxed as `Box<dyn Behavior<C> + 'n>` ([`Node`]) which lets contexts carry
//! references of their own.

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod roll;
pub mod status;

pub use behavior::{Behavior, Node};
pub use composite::{Selector, Sequence, WeightedSelector};
pub use decorator::{AlwaysSucceed, Chance, Inverter};
pub use roll::Roll;
pub use status::Status;
