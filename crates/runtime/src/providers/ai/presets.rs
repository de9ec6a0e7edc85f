//! Complete spell-selection trees, one per strategy.
//!
//! Each tree is a top-level selector built from subtrees. When no branch
//! chooses a spell the AI falls back to a Mystic Punch.
//!
//! ```text
//! defensive()
//!   └─ Selector
//!       ├─ patterns::heal_when_below(0.3)
//!       ├─ patterns::maybe_heal_when_below(0.5, 70)
//!       ├─ tactics::defensive_mix()
//!       ├─ patterns::strongest_damage()
//!       └─ patterns::any_affordable()
//! ```

use behavior_tree::Selector;
use duel_core::Element;

use super::nodes::{CastElementDamage, CastRandom, SpellKind};
use super::strategy::{AiStrategy, Archetype};
use super::subtrees::{BehaviorTree, patterns, tactics};

pub fn for_strategy<'a>(strategy: AiStrategy) -> BehaviorTree<'a> {
    match strategy {
        AiStrategy::Defensive => defensive(),
        AiStrategy::Aggressive => aggressive(),
        AiStrategy::Balanced => balanced(),
        AiStrategy::Elemental => elemental(),
        AiStrategy::Archetype(Archetype::Necromancer) => necromancer(),
        AiStrategy::Archetype(Archetype::TimeWeaver) => time_weaver(),
        AiStrategy::Archetype(Archetype::BattleMage) => battle_mage(),
        AiStrategy::Archetype(Archetype::Illusionist) => illusionist(),
        AiStrategy::Archetype(Archetype::Alchemist) => alchemist(),
    }
}

// ============================================================================
// General strategies
// ============================================================================

pub fn defensive<'a>() -> BehaviorTree<'a> {
    Box::new(Selector::new(vec![
        patterns::heal_when_below(0.3),
        patterns::maybe_heal_when_below(0.5, 70),
        tactics::defensive_mix(),
        patterns::strongest_damage(),
        patterns::any_affordable(),
    ]))
}

pub fn aggressive<'a>() -> BehaviorTree<'a> {
    Box::new(Selector::new(vec![
        patterns::maybe_heal_when_below(0.2, 30),
        tactics::heavy_hitter(),
        patterns::debuff_when_opponent_buffed(50),
        patterns::strongest_damage(),
        patterns::any_affordable(),
    ]))
}

pub fn balanced<'a>() -> BehaviorTree<'a> {
    Box::new(Selector::new(vec![
        patterns::heal_when_below(0.3),
        patterns::finish_when_opponent_below(0.3),
        patterns::debuff_when_opponent_buffed(100),
        tactics::balanced_mix(),
        patterns::any_affordable(),
    ]))
}

pub fn elemental<'a>() -> BehaviorTree<'a> {
    Box::new(Selector::new(vec![
        tactics::elemental_play(),
        patterns::strongest_damage(),
        patterns::any_affordable(),
    ]))
}

// ============================================================================
// Archetypes
// ============================================================================

pub fn necromancer<'a>() -> BehaviorTree<'a> {
    Box::new(Selector::new(vec![
        patterns::heal_when_below(0.4),
        patterns::attack_when_minion_active(),
        Box::new(CastRandom(SpellKind::Summon)),
        patterns::strongest_damage(),
    ]))
}

pub fn time_weaver<'a>() -> BehaviorTree<'a> {
    Box::new(Selector::new(vec![
        patterns::heal_when_below(0.3),
        Box::new(CastRandom(SpellKind::TimeWarp)),
        patterns::debuff_when_opponent_buffed(100),
        Box::new(CastElementDamage(Element::Time)),
        patterns::strongest_damage(),
    ]))
}

pub fn battle_mage<'a>() -> BehaviorTree<'a> {
    Box::new(Selector::new(vec![
        patterns::heal_when_below(0.25),
        patterns::buff_when_unbuffed(),
        patterns::strongest_damage(),
    ]))
}

pub fn illusionist<'a>() -> BehaviorTree<'a> {
    Box::new(Selector::new(vec![
        patterns::heal_when_below(0.35),
        patterns::debuff_when_opponent_clean(),
        Box::new(CastRandom(SpellKind::Damage)),
    ]))
}

pub fn alchemist<'a>() -> BehaviorTree<'a> {
    Box::new(Selector::new(vec![
        patterns::heal_when_below(0.5),
        patterns::restore_mana_when_below(0.3),
        Box::new(CastRandom(SpellKind::Buff)),
        patterns::strongest_damage(),
    ]))
}
