//! Spell effect resolution and lasting-effect ticking.

use crate::env::DuelEnv;
use crate::log::{CombatLogEntry, LogAction, gain, loss};
use crate::spell::{EffectKind, EffectTarget, SpellEffect};
use crate::state::{ActiveEffect, CombatState, PendingOverride, PeriodicAction, Side};

/// Applies one effect of a spell cast by `caster`.
///
/// Instant kinds (damage, healing, mana) take effect immediately. Any effect
/// with a duration is also attached to its target as an [`ActiveEffect`],
/// except Time Warp, which grants the caster the next turn instead.
pub fn apply_spell_effect(
    state: &mut CombatState,
    effect: &SpellEffect,
    caster: Side,
    spell_name: &str,
    env: &mut DuelEnv<'_>,
) {
    if state.is_over() {
        return;
    }
    let target = match effect.target {
        EffectTarget::SelfTarget => caster,
        EffectTarget::Enemy => caster.opponent(),
    };
    let amount = effect.value.max(0) as u32;

    match effect.kind {
        EffectKind::Damage => {
            let lost = state.wizard_mut(target).damage(amount);
            let details = format!("{} takes {} damage", state.wizard(target).name(), lost);
            state.record(
                env,
                CombatLogEntry::new(caster, LogAction::Damage, details)
                    .with_damage(loss(lost))
                    .with_spell(spell_name)
                    .with_target(target),
            );
        }
        EffectKind::Healing => {
            let gained = state.wizard_mut(target).heal(amount);
            let details = format!("{} recovers {} health", state.wizard(target).name(), gained);
            state.record(
                env,
                CombatLogEntry::new(caster, LogAction::Healing, details)
                    .with_healing(gain(gained))
                    .with_spell(spell_name)
                    .with_target(target),
            );
        }
        EffectKind::ManaRestore => {
            let gained = state.wizard_mut(target).restore_mana(amount);
            let details = format!("{} restores {} mana", state.wizard(target).name(), gained);
            state.record(
                env,
                CombatLogEntry::new(caster, LogAction::ManaRestore, details)
                    .with_mana(gain(gained))
                    .with_spell(spell_name)
                    .with_target(target),
            );
        }
        EffectKind::StatModifier | EffectKind::StatusEffect | EffectKind::Summon => {
            if effect.is_time_warp() {
                state.pending_override = Some(PendingOverride { side: caster });
                let details = format!("{} bends time and will act again", state.wizard(caster).name());
                state.record(
                    env,
                    CombatLogEntry::new(caster, LogAction::EffectApplied, details)
                        .with_spell(spell_name)
                        .with_target(caster),
                );
                return;
            }
        }
    }

    if effect.rounds() > 0 {
        attach(state, effect, caster, target, spell_name, env);
    } else if !matches!(
        effect.kind,
        EffectKind::Damage | EffectKind::Healing | EffectKind::ManaRestore
    ) {
        tracing::debug!(kind = %effect.kind, spell = spell_name, "effect without duration has no lasting impact");
    }
}

fn attach(
    state: &mut CombatState,
    effect: &SpellEffect,
    caster: Side,
    target: Side,
    spell_name: &str,
    env: &mut DuelEnv<'_>,
) {
    let name = display_name(effect, caster, target);
    let rounds = effect.rounds();
    let active = ActiveEffect {
        name: name.to_owned(),
        kind: effect.kind,
        value: effect.value,
        element: effect.element,
        remaining_duration: rounds,
        source: caster,
        periodic: periodic_action(effect, caster, target),
    };
    state.wizard_mut(target).active_effects.push(active);

    let details = format!(
        "{} is affected by {} for {} round{}",
        state.wizard(target).name(),
        name,
        rounds,
        if rounds == 1 { "" } else { "s" }
    );
    state.record(
        env,
        CombatLogEntry::new(caster, LogAction::EffectApplied, details)
            .with_spell(spell_name)
            .with_target(target),
    );
}

fn display_name(effect: &SpellEffect, caster: Side, target: Side) -> &'static str {
    match effect.kind {
        EffectKind::StatModifier if effect.value < 0 => "Damage Reduction",
        EffectKind::StatModifier => "Power Boost",
        EffectKind::StatusEffect if effect.value > 0 && target == caster => "Healing Over Time",
        EffectKind::StatusEffect if effect.value > 0 => "Damage Over Time",
        EffectKind::StatusEffect => "Status Effect",
        EffectKind::Damage => "Damage Over Time",
        EffectKind::Healing => "Healing Over Time",
        EffectKind::ManaRestore => "Mana Over Time",
        EffectKind::Summon => "Summoned Minion",
    }
}

fn periodic_action(effect: &SpellEffect, caster: Side, target: Side) -> Option<PeriodicAction> {
    let amount = effect.value.max(0) as u32;
    match effect.kind {
        EffectKind::Damage => Some(PeriodicAction::Damage(amount)),
        EffectKind::Healing => Some(PeriodicAction::Heal(amount)),
        EffectKind::ManaRestore => Some(PeriodicAction::RestoreMana(amount)),
        EffectKind::StatusEffect if effect.value > 0 && target == caster => {
            Some(PeriodicAction::Heal(amount))
        }
        EffectKind::StatusEffect if effect.value > 0 => Some(PeriodicAction::Damage(amount)),
        EffectKind::StatusEffect | EffectKind::StatModifier => None,
        EffectKind::Summon => Some(PeriodicAction::StrikeOpponent(amount)),
    }
}

/// Ticks every lasting effect on `side` once, in order.
///
/// Effects that run out are removed and logged after all ticks; the rest
/// keep their order. Ticking stops early if a wizard is defeated, leaving
/// the untouched effects as they were. The caller runs the defeat check.
pub fn process_active_effects(state: &mut CombatState, side: Side, env: &mut DuelEnv<'_>) {
    if state.is_over() || state.wizard(side).active_effects.is_empty() {
        return;
    }

    let mut effects = core::mem::take(&mut state.wizard_mut(side).active_effects);
    let mut ticked = 0;
    for effect in effects.iter_mut() {
        if let Some(action) = effect.periodic {
            tick(state, side, effect, action, env);
        }
        effect.remaining_duration = effect.remaining_duration.saturating_sub(1);
        ticked += 1;
        if state.player.is_defeated() || state.enemy.is_defeated() {
            break;
        }
    }

    let mut expired = Vec::new();
    let mut kept = Vec::with_capacity(effects.len());
    for (index, effect) in effects.into_iter().enumerate() {
        if index < ticked && effect.remaining_duration == 0 {
            expired.push(effect);
        } else {
            kept.push(effect);
        }
    }
    state.wizard_mut(side).active_effects = kept;

    for effect in expired {
        let details = format!("{} on {} wears off", effect.name, state.wizard(side).name());
        tracing::debug!(%side, effect = %effect.name, "effect expired");
        state.record(
            env,
            CombatLogEntry::system(LogAction::EffectExpired, details).with_target(side),
        );
    }
}

fn tick(
    state: &mut CombatState,
    holder: Side,
    effect: &ActiveEffect,
    action: PeriodicAction,
    env: &mut DuelEnv<'_>,
) {
    let actor = effect.source;
    let entry = match action {
        PeriodicAction::Damage(amount) => {
            let lost = state.wizard_mut(holder).damage(amount);
            let details = format!(
                "{} suffers {} damage from {}",
                state.wizard(holder).name(),
                lost,
                effect.name
            );
            CombatLogEntry::new(actor, LogAction::EffectTick, details)
                .with_damage(loss(lost))
                .with_target(holder)
        }
        PeriodicAction::Heal(amount) => {
            let gained = state.wizard_mut(holder).heal(amount);
            let details = format!(
                "{} recovers {} health from {}",
                state.wizard(holder).name(),
                gained,
                effect.name
            );
            CombatLogEntry::new(actor, LogAction::EffectTick, details)
                .with_healing(gain(gained))
                .with_target(holder)
        }
        PeriodicAction::RestoreMana(amount) => {
            let gained = state.wizard_mut(holder).restore_mana(amount);
            let details = format!(
                "{} regains {} mana from {}",
                state.wizard(holder).name(),
                gained,
                effect.name
            );
            CombatLogEntry::new(actor, LogAction::EffectTick, details)
                .with_mana(gain(gained))
                .with_target(holder)
        }
        PeriodicAction::StrikeOpponent(amount) => {
            let victim = holder.opponent();
            let lost = state.wizard_mut(victim).damage(amount);
            let details = format!(
                "{}'s minion strikes {} for {} damage",
                state.wizard(holder).name(),
                state.wizard(victim).name(),
                lost
            );
            CombatLogEntry::new(actor, LogAction::EffectTick, details)
                .with_damage(loss(lost))
                .with_target(victim)
        }
    };
    tracing::debug!(%holder, effect = %effect.name, "effect ticked");
    state.record(env, entry);
}
