//! Decorator behavior nodes.
//!
//! Decorators wrap a single child behavior and modify its result or whether
//! it runs at all: [`Inverter`] (NOT logic), [`AlwaysSucceed`] (error
//! suppression) and [`Chance`] (probabilistic gate).

use crate::{Behavior, Node, Roll, Status};

/// Inverts the result of its child behavior.
pub struct Inverter<'n, C> {
    child: Node<'n, C>,
}

impl<'n, C> Inverter<'n, C> {
    /// Creates a new inverter that wraps the given child behavior.
    pub fn new(child: Node<'n, C>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for Inverter<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        self.child.tick(ctx).invert()
    }
}

/// Always returns `Success`, regardless of the child's result.
///
/// Useful for optional steps inside a [`crate::Sequence`].
pub struct AlwaysSucceed<'n, C> {
    child: Node<'n, C>,
}

impl<'n, C> AlwaysSucceed<'n, C> {
    /// Creates a new always-succeed wrapper around the given child behavior.
    pub fn new(child: Node<'n, C>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for AlwaysSucceed<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        let _ = self.child.tick(ctx);
        Status::Success
    }
}

/// Runs its child only when a percentage roll passes.
///
/// The roll is drawn from the context ([`Roll`]) on every tick, even when
/// the child would fail, so the number of rolls consumed per evaluation only
/// depends on which `Chance` nodes are reached.
pub struct Chance<'n, C> {
    percent: u32,
    child: Node<'n, C>,
}

impl<'n, C> Chance<'n, C> {
    /// Creates a gate that lets the child run `percent`% of the time.
    ///
    /// Values above 100 are treated as 100.
    pub fn new(percent: u32, child: Node<'n, C>) -> Self {
        Self {
            percent: percent.min(100),
            child,
        }
    }
}

impl<C: Roll> Behavior<C> for Chance<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        if ctx.roll(100) < self.percent {
            self.child.tick(ctx)
        } else {
            Status::Failure
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestContext {
        value: i32,
        next_roll: u32,
    }

    impl Roll for TestContext {
        fn roll(&mut self, bound: u32) -> u32 {
            self.next_roll % bound.max(1)
        }
    }

    struct IsPositive;
    impl Behavior<TestContext> for IsPositive {
        fn tick(&self, ctx: &mut TestContext) -> Status {
            Status::from_bool(ctx.value > 0)
        }
    }

    struct FailAndIncrement;
    impl Behavior<TestContext> for FailAndIncrement {
        fn tick(&self, ctx: &mut TestContext) -> Status {
            ctx.value += 1;
            Status::Failure
        }
    }

    fn ctx(value: i32, next_roll: u32) -> TestContext {
        TestContext { value, next_roll }
    }

    #[test]
    fn inverter_inverts_both_ways() {
        let inverter = Inverter::new(Box::new(IsPositive));

        assert_eq!(inverter.tick(&mut ctx(10, 0)), Status::Failure);
        assert_eq!(inverter.tick(&mut ctx(-10, 0)), Status::Success);
    }

    #[test]
    fn always_succeed_still_runs_child() {
        let always = AlwaysSucceed::new(Box::new(FailAndIncrement));

        let mut c = ctx(0, 0);
        assert_eq!(always.tick(&mut c), Status::Success);
        assert_eq!(c.value, 1);
    }

    #[test]
    fn chance_gates_on_roll() {
        let gate = Chance::new(70, Box::new(IsPositive));

        assert_eq!(gate.tick(&mut ctx(1, 69)), Status::Success);
        assert_eq!(gate.tick(&mut ctx(1, 70)), Status::Failure);
    }

    #[test]
    fn chance_zero_never_runs_child() {
        let gate = Chance::new(0, Box::new(FailAndIncrement));

        let mut c = ctx(0, 0);
        assert_eq!(gate.tick(&mut c), Status::Failure);
        assert_eq!(c.value, 0);
    }
}
