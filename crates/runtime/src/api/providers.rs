//! Abstraction for sourcing each side's intent.
//!
//! Runtime users plug in [`ActionProvider`] implementations so a duel can
//! run with human input, scripted fixtures, or AI policies.

use duel_core::{CombatAction, CombatState, RandomSource, Side, SpellId};

use super::errors::Result;

/// Actions one side takes in a single turn, in order.
///
/// A plan normally ends with exactly one turn-ending action (cast, punch,
/// or skip); anything after it is ignored.
pub type TurnPlan = Vec<CombatAction>;

/// Trait for providing a side's actions based on the current combat state.
///
/// Different implementations can handle:
/// - Player input (from a terminal)
/// - AI decisions
/// - Scripted or replayed turns
pub trait ActionProvider {
    /// Plans the turn of `side`.
    ///
    /// `rng` is the duel's injected random source; providers that roll dice
    /// must use it so seeded duels replay exactly.
    fn provide_actions(
        &mut self,
        side: Side,
        state: &CombatState,
        rng: &mut dyn RandomSource,
    ) -> Result<TurnPlan>;

    /// Cards to drop when `side` holds `excess` cards over the hand limit.
    ///
    /// Defaults to the first cards in hand, the same rule the engine applies
    /// to the enemy.
    fn choose_discards(
        &mut self,
        side: Side,
        state: &CombatState,
        excess: usize,
    ) -> Result<Vec<SpellId>> {
        Ok(state
            .wizard(side)
            .hand
            .iter()
            .take(excess)
            .map(|spell| spell.id.clone())
            .collect())
    }
}

impl<P: ActionProvider + ?Sized> ActionProvider for Box<P> {
    fn provide_actions(
        &mut self,
        side: Side,
        state: &CombatState,
        rng: &mut dyn RandomSource,
    ) -> Result<TurnPlan> {
        (**self).provide_actions(side, state, rng)
    }

    fn choose_discards(
        &mut self,
        side: Side,
        state: &CombatState,
        excess: usize,
    ) -> Result<Vec<SpellId>> {
        (**self).choose_discards(side, state, excess)
    }
}

/// Skips every turn. Useful as a training dummy.
#[derive(Clone, Copy, Debug, Default)]
pub struct SkipTurnProvider;

impl ActionProvider for SkipTurnProvider {
    fn provide_actions(
        &mut self,
        _side: Side,
        _state: &CombatState,
        _rng: &mut dyn RandomSource,
    ) -> Result<TurnPlan> {
        Ok(vec![CombatAction::SkipTurn])
    }
}
