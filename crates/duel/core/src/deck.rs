//! Deck and hand lifecycle.
//!
//! Cards move between three piles per wizard (draw pile, hand, discard pile)
//! and are never created or destroyed after the duel starts, so
//! [`CombatWizard::deck_size`] is constant for the whole duel.

use crate::env::DuelEnv;
use crate::log::{CombatLogEntry, LogAction, loss};
use crate::spell::SpellId;
use crate::state::{CombatState, CombatWizard, Difficulty, InitializationError, Side};
use crate::wizard::Wizard;

/// Result of enforcing the hand-size cap for one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiscardOutcome {
    /// The hand is within the cap.
    Resolved,
    /// The player holds `excess` cards too many and must choose what to drop.
    NeedsPlayerDiscard { excess: usize },
}

/// Builds a fresh duel: shuffled decks and an opening hand for each side.
pub fn initialize_combat(
    player: Wizard,
    enemy: Wizard,
    difficulty: Difficulty,
    env: &mut DuelEnv<'_>,
) -> Result<CombatState, InitializationError> {
    for (side, wizard) in [(Side::Player, &player), (Side::Enemy, &enemy)] {
        if wizard.max_health == 0 {
            return Err(InitializationError::NoHealth {
                side,
                name: wizard.name.clone(),
            });
        }
    }

    let fallback = env.config().fallback_deck_size;
    let mut player_deck = player.combat_deck(fallback);
    let mut enemy_deck = enemy.combat_deck(fallback);
    env.shuffle(&mut player_deck);
    env.shuffle(&mut enemy_deck);

    let mut state = CombatState::new(
        CombatWizard::new(player, player_deck),
        CombatWizard::new(enemy, enemy_deck),
        difficulty,
    );

    let opening = env.config().initial_hand_size;
    draw_cards(&mut state, Side::Player, opening, env);
    draw_cards(&mut state, Side::Enemy, opening, env);

    let details = format!(
        "{} faces {} on {} difficulty",
        state.player.name(),
        state.enemy.name(),
        difficulty
    );
    tracing::info!(
        player = state.player.name(),
        enemy = state.enemy.name(),
        %difficulty,
        "combat started"
    );
    state.record(env, CombatLogEntry::system(LogAction::CombatStart, details));
    state.resolve_defeat(Side::Player, env);

    Ok(state)
}

/// Draws `count` cards plus the wizard's bonus draw from the top of the
/// draw pile.
///
/// Every draw attempted against an empty pile costs health instead and is
/// logged as a failed draw. Callers are responsible for the defeat check.
pub fn draw_cards(state: &mut CombatState, side: Side, count: u32, env: &mut DuelEnv<'_>) {
    if state.is_over() {
        return;
    }
    let attempts = count + state.wizard(side).wizard.combat_stats.extra_card_draw;
    let penalty = env.config().failed_draw_damage;
    let mut drawn = 0u32;

    for _ in 0..attempts {
        let wizard = state.wizard_mut(side);
        if wizard.draw_pile.is_empty() {
            let lost = wizard.damage(penalty);
            let details = format!("{} has no cards left to draw", wizard.name());
            state.record(
                env,
                CombatLogEntry::new(side, LogAction::FailedDraw, details)
                    .with_damage(loss(lost))
                    .with_target(side),
            );
            continue;
        }
        let card = wizard.draw_pile.remove(0);
        wizard.hand.push(card);
        drawn += 1;
    }

    tracing::debug!(%side, attempts, drawn, "drew cards");
    if count > 0 {
        let details = format!(
            "{} draws {} card{}",
            state.wizard(side).name(),
            drawn,
            if drawn == 1 { "" } else { "s" }
        );
        state.record(env, CombatLogEntry::new(side, LogAction::DrawCards, details));
    }
}

/// Shuffles the discard pile and places it on top of the draw pile.
pub fn shuffle_discard_into_draw(state: &mut CombatState, side: Side, env: &mut DuelEnv<'_>) {
    if state.is_over() || state.wizard(side).discard_pile.is_empty() {
        return;
    }

    let wizard = state.wizard_mut(side);
    let mut recycled = core::mem::take(&mut wizard.discard_pile);
    env.shuffle(&mut recycled);
    let count = recycled.len();
    recycled.append(&mut wizard.draw_pile);
    wizard.draw_pile = recycled;

    let details = format!(
        "{} shuffles {} card{} back into the deck",
        wizard.name(),
        count,
        if count == 1 { "" } else { "s" }
    );
    tracing::debug!(%side, count, "shuffled discard pile into draw pile");
    state.record(env, CombatLogEntry::new(side, LogAction::ShuffleDiscard, details));
}

/// Moves one copy of `spell_id` from hand to the discard pile.
///
/// Returns false without touching the state when the card is not in hand.
pub fn discard_spell(
    state: &mut CombatState,
    spell_id: &SpellId,
    side: Side,
    env: &mut DuelEnv<'_>,
) -> bool {
    if state.is_over() {
        return false;
    }
    let wizard = state.wizard_mut(side);
    let Some(index) = wizard.hand.iter().position(|spell| &spell.id == spell_id) else {
        return false;
    };

    let card = move_to_discard(wizard, index);
    let details = format!("{} discards {}", wizard.name(), card);
    state.record(
        env,
        CombatLogEntry::new(side, LogAction::Discard, details).with_spell(card),
    );
    true
}

/// Enforces the hand-size cap at the end of a round.
///
/// The enemy drops its first cards automatically. The player is asked to
/// choose instead, which pauses the round until they discard.
pub fn process_discard_phase(
    state: &mut CombatState,
    side: Side,
    env: &mut DuelEnv<'_>,
) -> DiscardOutcome {
    if state.is_over() {
        return DiscardOutcome::Resolved;
    }
    let cap = env.config().max_hand_size;
    let excess = state.wizard(side).hand.len().saturating_sub(cap);
    if excess == 0 {
        return DiscardOutcome::Resolved;
    }

    match side {
        Side::Enemy => {
            while state.wizard(side).hand.len() > cap {
                let wizard = state.wizard_mut(side);
                let card = move_to_discard(wizard, 0);
                let details = format!("{} discards {} (hand limit)", wizard.name(), card);
                state.record(
                    env,
                    CombatLogEntry::new(side, LogAction::AutoDiscard, details).with_spell(card),
                );
            }
            DiscardOutcome::Resolved
        }
        Side::Player => {
            let details = format!(
                "{} must discard {} card{} (hand limit {})",
                state.wizard(side).name(),
                excess,
                if excess == 1 { "" } else { "s" },
                cap
            );
            tracing::debug!(excess, "player must discard before the round ends");
            state.record(
                env,
                CombatLogEntry::new(side, LogAction::DiscardRequired, details),
            );
            DiscardOutcome::NeedsPlayerDiscard { excess }
        }
    }
}

/// Returns the moved card's name.
fn move_to_discard(wizard: &mut CombatWizard, index: usize) -> String {
    let card = wizard.hand.remove(index);
    if wizard
        .selected_spell
        .as_ref()
        .is_some_and(|selected| selected.id == card.id)
    {
        wizard.selected_spell = None;
    }
    let name = card.name.clone();
    wizard.discard_pile.push(card);
    name
}
