//! Builder utilities for ergonomic behavior tree construction.
//!
//! Instead of writing `Box::new(Selector::new(vec![...]))` these helpers
//! let trees read top-down: `selector(vec![chance(60, ..), ..])`.

use crate::{Chance, Node, Roll, Selector, WeightedSelector};

/// Creates a selector node.
#[inline]
pub fn selector<'n, C: 'n>(children: Vec<Node<'n, C>>) -> Node<'n, C> {
    Box::new(Selector::new(children))
}

/// Creates a weighted selector node from `(weight, child)` pairs.
#[inline]
pub fn weighted<'n, C: Roll + 'n>(options: Vec<(u32, Node<'n, C>)>) -> Node<'n, C> {
    Box::new(WeightedSelector::new(options))
}

/// Creates a percentage gate around `child`.
#[inline]
pub fn chance<'n, C: Roll + 'n>(percent: u32, child: Node<'n, C>) -> Node<'n, C> {
    Box::new(Chance::new(percent, child))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Behavior, Status};

    struct Rolls {
        next: u32,
        picked: Option<&'static str>,
    }

    impl Roll for Rolls {
        fn roll(&mut self, bound: u32) -> u32 {
            self.next % bound.max(1)
        }
    }

    struct Pick(&'static str);

    impl Behavior<Rolls> for Pick {
        fn tick(&self, ctx: &mut Rolls) -> Status {
            ctx.picked = Some(self.0);
            Status::Success
        }
    }

    fn tree<'n>() -> Node<'n, Rolls> {
        selector(vec![
            chance(40, Box::new(Pick("gated"))),
            weighted(vec![(50, Box::new(Pick("low"))), (50, Box::new(Pick("high")))]),
        ])
    }

    fn run(next: u32) -> Option<&'static str> {
        let mut ctx = Rolls { next, picked: None };
        assert_eq!(tree().tick(&mut ctx), Status::Success);
        ctx.picked
    }

    #[test]
    fn composed_builders_route_on_the_roll() {
        assert_eq!(run(10), Some("gated"));
        assert_eq!(run(45), Some("low"));
        assert_eq!(run(75), Some("high"));
    }
}
