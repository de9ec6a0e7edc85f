//! Layer 2: goal-oriented mixes.
//!
//! Each tactic picks between several spell categories with fixed weights,
//! falling through the remaining categories in order when the rolled one
//! has nothing affordable.

use behavior_tree::Behavior;
use behavior_tree::builder::{chance, selector, weighted};

use super::BehaviorTree;
use crate::providers::ai::AiContext;
use crate::providers::ai::nodes::{
    CastCounterElement, CastRandom, CastRandomTop, CastRememberedElement, CastStrongest,
    SpellKind,
};

fn option<'a>(weight: u32, choice: impl Behavior<AiContext<'a>> + 'a) -> (u32, BehaviorTree<'a>) {
    (weight, Box::new(choice))
}

/// Heal 25, buff 20, debuff 20, damage 35.
pub fn defensive_mix<'a>() -> BehaviorTree<'a> {
    weighted(vec![
        option(25, CastStrongest(SpellKind::Healing)),
        option(20, CastRandom(SpellKind::Buff)),
        option(20, CastRandom(SpellKind::Debuff)),
        option(35, CastStrongest(SpellKind::Damage)),
    ])
}

/// Damage 40, tactical 30, recovery 30.
pub fn balanced_mix<'a>() -> BehaviorTree<'a> {
    weighted(vec![
        option(40, CastStrongest(SpellKind::Damage)),
        option(30, CastRandom(SpellKind::Tactical)),
        option(30, CastRandom(SpellKind::Recovery)),
    ])
}

/// 70% of the time, one of the three hardest hitters.
pub fn heavy_hitter<'a>() -> BehaviorTree<'a> {
    chance(
        70,
        Box::new(CastRandomTop {
            kind: SpellKind::Damage,
            count: 3,
        }),
    )
}

/// Continue the remembered element's combo 60% of the time, otherwise
/// counter the opponent's elements.
pub fn elemental_play<'a>() -> BehaviorTree<'a> {
    selector(vec![
        chance(60, Box::new(CastRememberedElement)),
        Box::new(CastCounterElement),
    ])
}
