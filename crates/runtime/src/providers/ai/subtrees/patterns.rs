//! Layer 1: basic if-then patterns.
//!
//! Patterns follow the `choice_when_condition()` naming convention so each
//! reads as the rule it encodes.

use behavior_tree::builder::chance;
use behavior_tree::Sequence;

use super::BehaviorTree;
use crate::providers::ai::nodes::{
    CastRandom, CastStrongest, HasSummon, HealthBelow, ManaBelow, OpponentBuffed,
    OpponentHealthBelow, OpponentNotDebuffed, SelfNotBuffed, SpellKind,
};

// ============================================================================
// Survival
// ============================================================================

/// Best heal when health drops below `threshold`.
pub fn heal_when_below<'a>(threshold: f32) -> BehaviorTree<'a> {
    Box::new(Sequence::new(vec![
        Box::new(HealthBelow(threshold)),
        Box::new(CastStrongest(SpellKind::Healing)),
    ]))
}

/// Best heal below `threshold`, but only `percent`% of the time.
pub fn maybe_heal_when_below<'a>(threshold: f32, percent: u32) -> BehaviorTree<'a> {
    Box::new(Sequence::new(vec![
        Box::new(HealthBelow(threshold)),
        chance(percent, Box::new(CastStrongest(SpellKind::Healing))),
    ]))
}

pub fn restore_mana_when_below<'a>(threshold: f32) -> BehaviorTree<'a> {
    Box::new(Sequence::new(vec![
        Box::new(ManaBelow(threshold)),
        Box::new(CastRandom(SpellKind::ManaRestore)),
    ]))
}

// ============================================================================
// Pressure
// ============================================================================

/// Strongest damage when the opponent is nearly down.
pub fn finish_when_opponent_below<'a>(threshold: f32) -> BehaviorTree<'a> {
    Box::new(Sequence::new(vec![
        Box::new(OpponentHealthBelow(threshold)),
        Box::new(CastStrongest(SpellKind::Damage)),
    ]))
}

/// Debuff an opponent who buffed themselves, `percent`% of the time.
pub fn debuff_when_opponent_buffed<'a>(percent: u32) -> BehaviorTree<'a> {
    Box::new(Sequence::new(vec![
        Box::new(OpponentBuffed),
        chance(percent, Box::new(CastRandom(SpellKind::Debuff))),
    ]))
}

pub fn debuff_when_opponent_clean<'a>() -> BehaviorTree<'a> {
    Box::new(Sequence::new(vec![
        Box::new(OpponentNotDebuffed),
        Box::new(CastRandom(SpellKind::Debuff)),
    ]))
}

pub fn buff_when_unbuffed<'a>() -> BehaviorTree<'a> {
    Box::new(Sequence::new(vec![
        Box::new(SelfNotBuffed),
        Box::new(CastRandom(SpellKind::Buff)),
    ]))
}

/// Press the attack while a minion is on the field.
pub fn attack_when_minion_active<'a>() -> BehaviorTree<'a> {
    Box::new(Sequence::new(vec![
        Box::new(HasSummon),
        Box::new(CastStrongest(SpellKind::Damage)),
    ]))
}

// ============================================================================
// Fallbacks
// ============================================================================

pub fn strongest_damage<'a>() -> BehaviorTree<'a> {
    Box::new(CastStrongest(SpellKind::Damage))
}

/// Any affordable spell at all.
pub fn any_affordable<'a>() -> BehaviorTree<'a> {
    Box::new(CastRandom(SpellKind::Any))
}
