//! Action nodes for AI behavior trees.
//!
//! Action nodes pick one affordable spell and record it on the context.
//! They fail when nothing in hand qualifies, letting the enclosing selector
//! fall through to the next option.

use behavior_tree::{Behavior, Status};
use duel_core::Element;

use super::SpellKind;
use crate::providers::ai::AiContext;

/// Chooses the strongest affordable spell of a kind.
pub struct CastStrongest(pub SpellKind);

impl<'a> Behavior<AiContext<'a>> for CastStrongest {
    fn tick(&self, ctx: &mut AiContext<'a>) -> Status {
        match ctx.strongest(self.0) {
            Some(spell) => {
                ctx.choose(spell);
                Status::Success
            }
            None => Status::Failure,
        }
    }
}

/// Chooses uniformly among affordable spells of a kind.
pub struct CastRandom(pub SpellKind);

impl<'a> Behavior<AiContext<'a>> for CastRandom {
    fn tick(&self, ctx: &mut AiContext<'a>) -> Status {
        let candidates = ctx.candidates(self.0);
        match ctx.pick(&candidates) {
            Some(spell) => {
                ctx.choose(spell);
                Status::Success
            }
            None => Status::Failure,
        }
    }
}

/// Chooses uniformly among the `count` strongest spells of a kind.
pub struct CastRandomTop {
    pub kind: SpellKind,
    pub count: usize,
}

impl<'a> Behavior<AiContext<'a>> for CastRandomTop {
    fn tick(&self, ctx: &mut AiContext<'a>) -> Status {
        let mut candidates = ctx.candidates(self.kind);
        // Stable sort keeps hand order among equals.
        candidates.sort_by_key(|spell| core::cmp::Reverse(self.kind.power(spell)));
        candidates.truncate(self.count);
        match ctx.pick(&candidates) {
            Some(spell) => {
                ctx.choose(spell);
                Status::Success
            }
            None => Status::Failure,
        }
    }
}

/// Chooses the strongest damage spell of one element.
pub struct CastElementDamage(pub Element);

impl<'a> Behavior<AiContext<'a>> for CastElementDamage {
    fn tick(&self, ctx: &mut AiContext<'a>) -> Status {
        let best = ctx
            .candidates(SpellKind::Damage)
            .into_iter()
            .filter(|spell| spell.element == self.0)
            .fold(None, |best: Option<&duel_core::Spell>, spell| match best {
                Some(current) if current.damage_value() >= spell.damage_value() => Some(current),
                _ => Some(spell),
            });
        match best {
            Some(spell) => {
                ctx.choose(spell);
                Status::Success
            }
            None => Status::Failure,
        }
    }
}

/// Chains a combo: a damage spell sharing the element of the last choice.
pub struct CastRememberedElement;

impl<'a> Behavior<AiContext<'a>> for CastRememberedElement {
    fn tick(&self, ctx: &mut AiContext<'a>) -> Status {
        match ctx.memory.last_element {
            Some(element) => CastElementDamage(element).tick(ctx),
            None => Status::Failure,
        }
    }
}

/// Answers the opponent's active effects with the element that counters
/// them, trying each effect element in order.
pub struct CastCounterElement;

impl<'a> Behavior<AiContext<'a>> for CastCounterElement {
    fn tick(&self, ctx: &mut AiContext<'a>) -> Status {
        for element in ctx.opponent_effect_elements() {
            if CastElementDamage(element.countered_by()).tick(ctx).is_success() {
                return Status::Success;
            }
        }
        Status::Failure
    }
}
