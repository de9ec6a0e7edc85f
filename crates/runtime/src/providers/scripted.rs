//! Replays a fixed sequence of turn plans.

use std::collections::VecDeque;

use duel_core::{CombatAction, CombatState, RandomSource, Side};

use crate::api::{ActionProvider, Result, TurnPlan};

/// Plays queued turn plans in order, then skips every later turn.
///
/// Useful for tests, tutorials, and replaying a recorded duel.
#[derive(Clone, Debug, Default)]
pub struct ScriptedProvider {
    plans: VecDeque<TurnPlan>,
}

impl ScriptedProvider {
    pub fn new(plans: impl IntoIterator<Item = TurnPlan>) -> Self {
        Self {
            plans: plans.into_iter().collect(),
        }
    }

    pub fn push(&mut self, plan: TurnPlan) {
        self.plans.push_back(plan);
    }

    pub fn remaining(&self) -> usize {
        self.plans.len()
    }
}

impl ActionProvider for ScriptedProvider {
    fn provide_actions(
        &mut self,
        _side: Side,
        _state: &CombatState,
        _rng: &mut dyn RandomSource,
    ) -> Result<TurnPlan> {
        Ok(self
            .plans
            .pop_front()
            .unwrap_or_else(|| vec![CombatAction::SkipTurn]))
    }
}
