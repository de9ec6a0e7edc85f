//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors:
//! [`Sequence`] (AND logic), [`Selector`] (OR logic) and
//! [`WeightedSelector`] (randomized OR logic).

use crate::{Behavior, Node, Roll, Status};

/// Executes child behaviors in order until one fails.
///
/// - If a child returns `Failure`, the sequence stops and returns `Failure`
/// - If every child returns `Success`, the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&).
pub struct Sequence<'n, C> {
    children: Vec<Node<'n, C>>,
}

impl<'n, C> Sequence<'n, C> {
    /// Creates a new sequence with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Node<'n, C>>) -> Self {
        assert!(
            !children.is_empty(),
            "Sequence must have at least one child"
        );
        Self { children }
    }
}

impl<C> Behavior<C> for Sequence<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_failure() {
                return Status::Failure;
            }
        }
        Status::Success
    }
}

/// Executes child behaviors in order until one succeeds.
///
/// - If a child returns `Success`, the selector stops and returns `Success`
/// - If every child returns `Failure`, the selector returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||).
pub struct Selector<'n, C> {
    children: Vec<Node<'n, C>>,
}

impl<'n, C> Selector<'n, C> {
    /// Creates a new selector with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Node<'n, C>>) -> Self {
        assert!(
            !children.is_empty(),
            "Selector must have at least one child"
        );
        Self { children }
    }
}

impl<C> Behavior<C> for Selector<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_success() {
                return Status::Success;
            }
        }
        Status::Failure
    }
}

/// Picks one child at random in proportion to its weight.
///
/// # Semantics
///
/// - One roll against the total weight picks the first child to try
/// - If that child fails, the remaining children are tried in declaration
///   order (zero-weight children included), like a [`Selector`]
/// - Returns `Failure` only when every child fails
///
/// With a total weight of zero no roll is made and the node behaves exactly
/// like a [`Selector`].
pub struct WeightedSelector<'n, C> {
    options: Vec<(u32, Node<'n, C>)>,
}

impl<'n, C> WeightedSelector<'n, C> {
    /// Creates a weighted selector from `(weight, behavior)` pairs.
    ///
    /// # Panics
    ///
    /// Panics if `options` is empty.
    pub fn new(options: Vec<(u32, Node<'n, C>)>) -> Self {
        assert!(
            !options.is_empty(),
            "WeightedSelector must have at least one option"
        );
        Self { options }
    }

    fn total_weight(&self) -> u32 {
        self.options.iter().map(|(weight, _)| *weight).sum()
    }

    fn pick(&self, mut roll: u32) -> usize {
        for (index, (weight, _)) in self.options.iter().enumerate() {
            if roll < *weight {
                return index;
            }
            roll -= weight;
        }
        self.options.len() - 1
    }
}

impl<C: Roll> Behavior<C> for WeightedSelector<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        let total = self.total_weight();
        let first = if total == 0 {
            None
        } else {
            let roll = ctx.roll(total);
            Some(self.pick(roll))
        };

        if let Some(index) = first
            && self.options[index].1.tick(ctx).is_success()
        {
            return Status::Success;
        }

        for (index, (_, child)) in self.options.iter().enumerate() {
            if Some(index) == first {
                continue;
            }
            if child.tick(ctx).is_success() {
                return Status::Success;
            }
        }
        Status::Failure
    }
}
