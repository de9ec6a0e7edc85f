//! Condition nodes for AI behavior trees.
//!
//! Conditions inspect the blackboard and return Success or Failure. They
//! never choose a spell.

use behavior_tree::{Behavior, Status};

use crate::providers::ai::AiContext;

/// Succeeds when this side's health ratio is below `threshold` (0.0-1.0).
pub struct HealthBelow(pub f32);

impl<'a> Behavior<AiContext<'a>> for HealthBelow {
    fn tick(&self, ctx: &mut AiContext<'a>) -> Status {
        Status::from_bool(ctx.health_ratio() < self.0)
    }
}

pub struct ManaBelow(pub f32);

impl<'a> Behavior<AiContext<'a>> for ManaBelow {
    fn tick(&self, ctx: &mut AiContext<'a>) -> Status {
        Status::from_bool(ctx.mana_ratio() < self.0)
    }
}

pub struct OpponentHealthBelow(pub f32);

impl<'a> Behavior<AiContext<'a>> for OpponentHealthBelow {
    fn tick(&self, ctx: &mut AiContext<'a>) -> Status {
        Status::from_bool(ctx.opponent_health_ratio() < self.0)
    }
}

/// Succeeds when the opponent carries an effect it cast on itself.
pub struct OpponentBuffed;

impl<'a> Behavior<AiContext<'a>> for OpponentBuffed {
    fn tick(&self, ctx: &mut AiContext<'a>) -> Status {
        Status::from_bool(ctx.opponent_buffed())
    }
}

/// Succeeds when the opponent carries no effect cast by this side.
pub struct OpponentNotDebuffed;

impl<'a> Behavior<AiContext<'a>> for OpponentNotDebuffed {
    fn tick(&self, ctx: &mut AiContext<'a>) -> Status {
        Status::from_bool(!ctx.opponent_debuffed())
    }
}

pub struct SelfNotBuffed;

impl<'a> Behavior<AiContext<'a>> for SelfNotBuffed {
    fn tick(&self, ctx: &mut AiContext<'a>) -> Status {
        Status::from_bool(!ctx.self_buffed())
    }
}

/// Succeeds while a summoned minion fights on this side.
pub struct HasSummon;

impl<'a> Behavior<AiContext<'a>> for HasSummon {
    fn tick(&self, ctx: &mut AiContext<'a>) -> Status {
        Status::from_bool(ctx.has_summon())
    }
}
