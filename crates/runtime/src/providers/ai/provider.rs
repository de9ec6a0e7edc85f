//! Behavior-tree backed opponent.

use behavior_tree::Behavior;
use duel_core::{CombatAction, CombatState, Difficulty, RandomSource, Side, Spell, Wizard};

use super::factory::AiStrategyFactory;
use super::memory::AiMemory;
use super::presets;
use super::strategy::AiStrategy;
use crate::api::{ActionProvider, Result, TurnPlan};
use crate::providers::ai::AiContext;

/// Spell tier used when the AI falls back to a Mystic Punch.
pub const AI_PUNCH_TIER: u32 = 1;

/// Plays one side by evaluating its strategy's tree every turn.
///
/// The provider owns the strategy and the AI memory. Randomness comes from
/// the duel's injected source so a seeded duel replays identically.
#[derive(Clone, Debug)]
pub struct AiProvider {
    strategy: AiStrategy,
    memory: AiMemory,
}

impl AiProvider {
    pub fn new(strategy: AiStrategy) -> Self {
        Self {
            strategy,
            memory: AiMemory::default(),
        }
    }

    /// Provider for `wizard` with the strategy the factory assigns.
    pub fn for_opponent(
        wizard: &Wizard,
        difficulty: Difficulty,
        rng: &mut dyn RandomSource,
    ) -> Self {
        let strategy =
            AiStrategyFactory::create_strategy(difficulty, wizard.level, &wizard.name, rng);
        tracing::info!(wizard = %wizard.name, %strategy, "assigned AI strategy");
        Self::new(strategy)
    }

    pub fn strategy(&self) -> AiStrategy {
        self.strategy
    }

    pub fn memory(&self) -> &AiMemory {
        &self.memory
    }

    /// Evaluates the strategy tree for `side`. `None` means punch.
    pub fn choose_spell(
        &mut self,
        side: Side,
        state: &CombatState,
        rng: &mut dyn RandomSource,
    ) -> Option<Spell> {
        let strategy = self.strategy;
        let choice = {
            let tree = presets::for_strategy(strategy);
            let mut ctx = AiContext::new(side, state, &mut self.memory, rng);
            tree.tick(&mut ctx);
            ctx.into_choice().cloned()
        };

        if let Some(spell) = &choice {
            if strategy.remembers_elements() {
                self.memory.remember(spell.element);
            }
        }
        tracing::debug!(
            %side,
            %strategy,
            spell = choice.as_ref().map(|spell| spell.name.as_str()),
            "AI decision"
        );
        choice
    }
}

impl ActionProvider for AiProvider {
    fn provide_actions(
        &mut self,
        side: Side,
        state: &CombatState,
        rng: &mut dyn RandomSource,
    ) -> Result<TurnPlan> {
        let plan = match self.choose_spell(side, state, rng) {
            Some(spell) => vec![
                CombatAction::SelectSpell { spell_id: spell.id },
                CombatAction::CastSpell,
            ],
            None => vec![CombatAction::MysticPunch {
                spell_tier: AI_PUNCH_TIER,
            }],
        };
        Ok(plan)
    }
}
