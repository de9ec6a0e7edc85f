//! Turn and round state machine.
//!
//! [`advance_turn`] is the only function that moves the duel forward. It
//! consumes extra turns, hands the turn to the enemy, and runs the round
//! boundary (discard phase, effect ticks, mana regeneration, draws,
//! reshuffles) after the enemy acts.

use crate::deck::{DiscardOutcome, draw_cards, process_discard_phase, shuffle_discard_into_draw};
use crate::effects::process_active_effects;
use crate::env::DuelEnv;
use crate::log::{CombatLogEntry, LogAction, gain};
use crate::state::{CombatState, Side};

/// How a call to [`advance_turn`] left the duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The duel is over; nothing changed, or a round-boundary step ended it.
    Terminal,
    /// A pending extra turn was consumed and `Side` acts again.
    ExtraTurn(Side),
    /// The player's turn ended and the enemy acts next.
    Advanced,
    /// The player holds `excess` cards over the limit. Nothing advanced;
    /// discard and call again.
    AwaitingDiscard { excess: usize },
    /// A new round began with the player to act.
    RoundAdvanced { round: u32 },
}

const SIDES: [Side; 2] = [Side::Player, Side::Enemy];

/// Ends the active side's turn.
pub fn advance_turn(state: &mut CombatState, env: &mut DuelEnv<'_>) -> AdvanceOutcome {
    if state.is_over() {
        return AdvanceOutcome::Terminal;
    }

    if let Some(grant) = state.pending_override.take() {
        state.active = grant.side;
        let details = format!("{} takes an extra turn", state.wizard(grant.side).name());
        state.record(env, CombatLogEntry::new(grant.side, LogAction::ExtraTurn, details));
        state.turn += 1;
        tracing::debug!(side = %grant.side, turn = state.turn, "extra turn");
        return AdvanceOutcome::ExtraTurn(grant.side);
    }

    if state.active == Side::Player {
        state.active = Side::Enemy;
        state.turn += 1;
        return AdvanceOutcome::Advanced;
    }

    process_discard_phase(state, Side::Enemy, env);
    if let DiscardOutcome::NeedsPlayerDiscard { excess } =
        process_discard_phase(state, Side::Player, env)
    {
        state.pending_discard = Some(Side::Player);
        return AdvanceOutcome::AwaitingDiscard { excess };
    }
    state.pending_discard = None;

    state.active = Side::Player;
    state.round += 1;
    let details = format!("Round {} begins", state.round);
    state.record(env, CombatLogEntry::system(LogAction::RoundStart, details));
    tracing::info!(round = state.round, "round started");

    for side in SIDES {
        process_active_effects(state, side, env);
        if state.resolve_defeat(side, env) {
            return AdvanceOutcome::Terminal;
        }
    }

    for side in SIDES {
        regenerate_mana(state, side, env);
    }

    let per_round = env.config().cards_per_draw;
    for side in SIDES {
        draw_cards(state, side, per_round, env);
        if state.resolve_defeat(side, env) {
            return AdvanceOutcome::Terminal;
        }
    }

    for side in SIDES {
        shuffle_discard_into_draw(state, side, env);
    }

    state.turn += 1;
    AdvanceOutcome::RoundAdvanced { round: state.round }
}

fn regenerate_mana(state: &mut CombatState, side: Side, env: &DuelEnv<'_>) {
    let wizard = state.wizard_mut(side);
    let regen = wizard.wizard.mana_regen;
    if regen == 0 {
        return;
    }
    let gained = wizard.restore_mana(regen);
    let details = format!("{} regenerates {} mana", wizard.name(), gained);
    state.record(
        env,
        CombatLogEntry::new(side, LogAction::ManaRegen, details)
            .with_mana(gain(gained))
            .with_target(side),
    );
}
