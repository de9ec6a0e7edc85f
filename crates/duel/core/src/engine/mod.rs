//! Action execution pipeline.
//!
//! The [`CombatEngine`] is the authoritative reducer for [`CombatState`].
//! It validates who may act, routes each [`CombatAction`] to its resolver,
//! and reports how the duel moved. Rejected actions leave the state
//! untouched; a finished duel ignores everything.

mod actions;
mod errors;
mod turns;

pub use actions::{execute_mystic_punch, execute_spell_cast, select_spell, skip_turn};
pub use errors::ExecuteError;
pub use turns::{AdvanceOutcome, advance_turn};

use crate::deck::discard_spell;
use crate::env::DuelEnv;
use crate::spell::SpellId;
use crate::state::{CombatState, Side};

/// Everything a side can ask the engine to do.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum CombatAction {
    SelectSpell { spell_id: SpellId },
    CastSpell,
    MysticPunch { spell_tier: u32 },
    SkipTurn,
    /// Allowed out of turn; this is how the discard gate is resolved.
    Discard { spell_id: SpellId },
    /// Ends the turn without acting. Used to resume after a discard.
    AdvanceTurn,
}

impl CombatAction {
    pub fn select(spell_id: impl Into<SpellId>) -> Self {
        Self::SelectSpell {
            spell_id: spell_id.into(),
        }
    }

    pub fn discard(spell_id: impl Into<SpellId>) -> Self {
        Self::Discard {
            spell_id: spell_id.into(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SelectSpell { .. } => "select_spell",
            Self::CastSpell => "cast_spell",
            Self::MysticPunch { .. } => "mystic_punch",
            Self::SkipTurn => "skip_turn",
            Self::Discard { .. } => "discard",
            Self::AdvanceTurn => "advance_turn",
        }
    }

    /// Whether the action hands the turn on.
    pub fn ends_turn(&self) -> bool {
        !matches!(self, Self::SelectSpell { .. } | Self::Discard { .. })
    }
}

/// Result of a successfully executed action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The duel had already ended.
    Ignored,
    SpellSelected { found: bool },
    Discarded { found: bool },
    TurnEnded(AdvanceOutcome),
}

pub struct CombatEngine<'a> {
    state: &'a mut CombatState,
}

impl<'a> CombatEngine<'a> {
    pub fn new(state: &'a mut CombatState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &CombatState {
        self.state
    }

    /// Executes `action` on behalf of `side`.
    pub fn execute(
        &mut self,
        env: &mut DuelEnv<'_>,
        side: Side,
        action: &CombatAction,
    ) -> Result<ActionOutcome, ExecuteError> {
        if self.state.is_over() {
            return Ok(ActionOutcome::Ignored);
        }
        self.validate(side, action)?;
        tracing::debug!(%side, action = action.as_str(), turn = self.state.turn, "executing action");

        let state = &mut *self.state;
        let outcome = match action {
            CombatAction::SelectSpell { spell_id } => ActionOutcome::SpellSelected {
                found: select_spell(state, side, spell_id, env),
            },
            CombatAction::CastSpell => ActionOutcome::TurnEnded(execute_spell_cast(state, side, env)),
            CombatAction::MysticPunch { spell_tier } => {
                ActionOutcome::TurnEnded(execute_mystic_punch(state, side, *spell_tier, env))
            }
            CombatAction::SkipTurn => ActionOutcome::TurnEnded(skip_turn(state, side, env)),
            CombatAction::Discard { spell_id } => ActionOutcome::Discarded {
                found: discard_spell(state, spell_id, side, env),
            },
            CombatAction::AdvanceTurn => ActionOutcome::TurnEnded(advance_turn(state, env)),
        };
        Ok(outcome)
    }

    fn validate(&self, side: Side, action: &CombatAction) -> Result<(), ExecuteError> {
        match (self.state.pending_discard, action) {
            (Some(pending), CombatAction::Discard { .. } | CombatAction::AdvanceTurn) => {
                if side == pending {
                    Ok(())
                } else {
                    Err(ExecuteError::DiscardPending { side: pending })
                }
            }
            (Some(pending), _) => Err(ExecuteError::DiscardPending { side: pending }),
            (None, CombatAction::Discard { .. }) => Ok(()),
            (None, CombatAction::AdvanceTurn) => Err(ExecuteError::NoPendingDiscard { side }),
            (None, _) if side != self.state.active => Err(ExecuteError::ActorNotCurrent {
                actor: side,
                current: self.state.active,
            }),
            (None, _) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DuelConfig;
    use crate::env::{FixedClock, PcgRng};
    use crate::error::DuelError;
    use crate::log::LogAction;
    use crate::state::{CombatStatus, CombatWizard, Difficulty};
    use crate::wizard::Wizard;

    fn state(difficulty: Difficulty) -> CombatState {
        CombatState::new(
            CombatWizard::new(Wizard::new("p", "Player"), Vec::new()),
            CombatWizard::new(Wizard::new("e", "Enemy"), Vec::new()),
            difficulty,
        )
    }

    #[test]
    fn normal_punch_at_tier_one_deals_six() {
        let config = DuelConfig::default();
        let mut rng = PcgRng::seed_from_u64(0);
        let clock = FixedClock(0);
        let mut env = DuelEnv::new(&config, &mut rng, &clock);
        let mut state = state(Difficulty::Normal);

        let outcome = CombatEngine::new(&mut state)
            .execute(&mut env, Side::Player, &CombatAction::MysticPunch { spell_tier: 1 })
            .unwrap();

        assert_eq!(outcome, ActionOutcome::TurnEnded(AdvanceOutcome::Advanced));
        assert_eq!(state.enemy.current_health(), 94);
        assert_eq!(state.active, Side::Enemy);
    }

    #[test]
    fn negative_punch_power_never_heals() {
        let config = DuelConfig::default();
        let mut rng = PcgRng::seed_from_u64(0);
        let clock = FixedClock(0);
        let mut env = DuelEnv::new(&config, &mut rng, &clock);
        let mut state = state(Difficulty::Hard);
        state.player.wizard.combat_stats.mystic_punch_power = -50;

        CombatEngine::new(&mut state)
            .execute(&mut env, Side::Player, &CombatAction::MysticPunch { spell_tier: 1 })
            .unwrap();
        assert_eq!(state.enemy.current_health(), 100);
    }

    #[test]
    fn out_of_turn_actions_are_rejected_without_changes() {
        let config = DuelConfig::default();
        let mut rng = PcgRng::seed_from_u64(0);
        let clock = FixedClock(0);
        let mut env = DuelEnv::new(&config, &mut rng, &clock);
        let mut state = state(Difficulty::Normal);
        let before = state.clone();

        let err = CombatEngine::new(&mut state)
            .execute(&mut env, Side::Enemy, &CombatAction::SkipTurn)
            .unwrap_err();
        assert_eq!(
            err,
            ExecuteError::ActorNotCurrent {
                actor: Side::Enemy,
                current: Side::Player
            }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn finished_duel_ignores_actions() {
        let config = DuelConfig::default();
        let mut rng = PcgRng::seed_from_u64(0);
        let clock = FixedClock(0);
        let mut env = DuelEnv::new(&config, &mut rng, &clock);
        let mut state = state(Difficulty::Normal);
        state.status = CombatStatus::PlayerWon;
        let before = state.clone();

        let outcome = CombatEngine::new(&mut state)
            .execute(&mut env, Side::Player, &CombatAction::SkipTurn)
            .unwrap();
        assert_eq!(outcome, ActionOutcome::Ignored);
        assert_eq!(state, before);
    }

    #[test]
    fn advance_turn_needs_a_pending_discard() {
        let config = DuelConfig::default();
        let mut rng = PcgRng::seed_from_u64(0);
        let clock = FixedClock(0);
        let mut env = DuelEnv::new(&config, &mut rng, &clock);
        let mut state = state(Difficulty::Normal);
        let before = state.clone();

        let err = CombatEngine::new(&mut state)
            .execute(&mut env, Side::Player, &CombatAction::AdvanceTurn)
            .unwrap_err();

        assert_eq!(err, ExecuteError::NoPendingDiscard { side: Side::Player });
        assert_eq!(err.error_code(), "EXECUTE_NO_PENDING_DISCARD");
        assert_eq!(state, before);
    }

    #[test]
    fn punch_log_saturates_for_huge_health_pools() {
        let config = DuelConfig::default();
        let mut rng = PcgRng::seed_from_u64(0);
        let clock = FixedClock(0);
        let mut env = DuelEnv::new(&config, &mut rng, &clock);
        let mut state = CombatState::new(
            CombatWizard::new(Wizard::new("p", "Player"), Vec::new()),
            CombatWizard::new(
                Wizard::new("e", "Titan").with_vitals(u32::MAX, 10, 1),
                Vec::new(),
            ),
            Difficulty::Normal,
        );
        // Tier plus the normal player bonus of 5 lands exactly on 2^31.
        let spell_tier = (1u32 << 31) - 5;

        CombatEngine::new(&mut state)
            .execute(&mut env, Side::Player, &CombatAction::MysticPunch { spell_tier })
            .unwrap();

        let entry = state
            .log
            .iter()
            .find(|entry| entry.action == LogAction::MysticPunch)
            .unwrap();
        assert_eq!(entry.damage, Some(i32::MIN));
        assert_eq!(state.enemy.current_health(), u32::MAX - (1u32 << 31));
    }

    #[test]
    fn cast_without_selection_fails_but_ends_turn() {
        let config = DuelConfig::default();
        let mut rng = PcgRng::seed_from_u64(0);
        let clock = FixedClock(0);
        let mut env = DuelEnv::new(&config, &mut rng, &clock);
        let mut state = state(Difficulty::Normal);

        let outcome = CombatEngine::new(&mut state)
            .execute(&mut env, Side::Player, &CombatAction::CastSpell)
            .unwrap();
        assert_eq!(outcome, ActionOutcome::TurnEnded(AdvanceOutcome::Advanced));
        assert_eq!(state.log.count(LogAction::CastFailed), 1);
        assert_eq!(state.turn, 2);
    }
}
