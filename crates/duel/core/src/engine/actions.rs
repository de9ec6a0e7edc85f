//! Turn-consuming actions: spell casts, Mystic Punch, and skipping.
//!
//! Each action resolves fully, runs the defeat check (target first, then
//! the acting side), and then ends the turn through [`advance_turn`].

use super::turns::{AdvanceOutcome, advance_turn};
use crate::deck::discard_spell;
use crate::effects::apply_spell_effect;
use crate::env::DuelEnv;
use crate::log::{CombatLogEntry, LogAction, loss};
use crate::spell::SpellId;
use crate::state::{CombatState, Side};

/// Marks a card in hand as the one to cast. Does not end the turn.
pub fn select_spell(
    state: &mut CombatState,
    side: Side,
    spell_id: &SpellId,
    env: &DuelEnv<'_>,
) -> bool {
    let wizard = state.wizard_mut(side);
    let Some(spell) = wizard.hand_spell(spell_id).cloned() else {
        return false;
    };
    let details = format!("{} readies {}", wizard.name(), spell.name);
    let entry = CombatLogEntry::new(side, LogAction::SelectSpell, details).with_spell(&spell.name);
    wizard.selected_spell = Some(spell);
    state.record(env, entry);
    true
}

/// Casts the side's selected spell.
///
/// Casting with nothing selected, or without enough mana, fails with a log
/// entry and still costs the turn.
pub fn execute_spell_cast(
    state: &mut CombatState,
    side: Side,
    env: &mut DuelEnv<'_>,
) -> AdvanceOutcome {
    let wizard = state.wizard(side);
    let failure = match &wizard.selected_spell {
        None => Some(format!("{} has no spell selected", wizard.name())),
        Some(spell) if !wizard.can_afford(spell) => Some(format!(
            "{} lacks the mana for {} ({} needed, {} available)",
            wizard.name(),
            spell.name,
            spell.mana_cost,
            wizard.current_mana()
        )),
        Some(_) => None,
    };
    if let Some(details) = failure {
        let mut entry = CombatLogEntry::new(side, LogAction::CastFailed, details);
        if let Some(spell) = &wizard.selected_spell {
            entry = entry.with_spell(&spell.name);
        }
        tracing::debug!(%side, "cast failed");
        state.record(env, entry);
        return advance_turn(state, env);
    }

    let Some(spell) = state.wizard(side).selected_spell.clone() else {
        return advance_turn(state, env);
    };
    state.wizard_mut(side).spend_mana(spell.mana_cost);
    let details = format!("{} casts {}", state.wizard(side).name(), spell.name);
    state.record(
        env,
        CombatLogEntry::new(side, LogAction::Cast, details)
            .with_mana(loss(spell.mana_cost))
            .with_spell(&spell.name),
    );
    tracing::debug!(%side, spell = %spell.id, "spell cast");

    for effect in &spell.effects {
        apply_spell_effect(state, effect, side, &spell.name, env);
    }
    discard_spell(state, &spell.id, side, env);

    state.resolve_defeat(side.opponent(), env);
    advance_turn(state, env)
}

/// Melee fallback that costs no mana.
///
/// Damage is `spell_tier` plus the difficulty bonus for the side plus the
/// wizard's punch power, never negative. A selected spell is discarded as
/// the cost of the punch.
pub fn execute_mystic_punch(
    state: &mut CombatState,
    side: Side,
    spell_tier: u32,
    env: &mut DuelEnv<'_>,
) -> AdvanceOutcome {
    let target = side.opponent();
    let modifier = env.config().punch_modifier(state.difficulty, side);
    let power = state.wizard(side).wizard.combat_stats.mystic_punch_power;
    let raw = i64::from(spell_tier) + i64::from(modifier) + i64::from(power);
    let amount = raw.clamp(0, i64::from(u32::MAX)) as u32;

    let lost = state.wizard_mut(target).damage(amount);
    let details = format!(
        "{} throws a Mystic Punch at {} for {} damage",
        state.wizard(side).name(),
        state.wizard(target).name(),
        lost
    );
    state.record(
        env,
        CombatLogEntry::new(side, LogAction::MysticPunch, details)
            .with_damage(loss(lost))
            .with_target(target),
    );
    tracing::debug!(%side, amount, "mystic punch");

    if let Some(selected) = state.wizard(side).selected_spell.as_ref().map(|s| s.id.clone()) {
        discard_spell(state, &selected, side, env);
    }

    state.resolve_defeat(target, env);
    advance_turn(state, env)
}

pub fn skip_turn(state: &mut CombatState, side: Side, env: &mut DuelEnv<'_>) -> AdvanceOutcome {
    let details = format!("{} skips the turn", state.wizard(side).name());
    state.record(env, CombatLogEntry::new(side, LogAction::SkipTurn, details));
    advance_turn(state, env)
}
