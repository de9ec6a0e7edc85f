//! Plain-text rendering of duel state for the terminal.

use std::fmt::Write as _;

use duel_core::{CombatLogEntry, CombatState, CombatWizard, LogActor, Side, Spell, Wizard};
use duel_runtime::{AiStrategyFactory, DuelSummary};

pub const HELP: &str = "\
commands:
  cast N  (c N)   cast card N
  punch [N] (p)   Mystic Punch, powered by card N's tier if given
  skip    (s)     pass the turn
  help    (h, ?)  show this text";

pub fn turn_header(state: &CombatState, side: Side) -> String {
    let me = state.wizard(side);
    let foe = state.wizard(side.opponent());
    let mut text = format!(
        "\n== Round {} / Turn {} ==\n{}  {}\n{}  {}\n",
        state.round,
        state.turn,
        me.name(),
        vitals(me),
        foe.name(),
        vitals(foe),
    );
    text.push_str(&hand_listing(me));
    text
}

fn vitals(wizard: &CombatWizard) -> String {
    let mut text = format!(
        "HP {}/{}  MP {}/{}",
        wizard.current_health(),
        wizard.max_health(),
        wizard.current_mana(),
        wizard.max_mana()
    );
    for effect in &wizard.active_effects {
        let _ = write!(text, "  [{} {}]", effect.name, effect.remaining_duration);
    }
    text
}

pub fn hand_listing(wizard: &CombatWizard) -> String {
    let mut text = String::from("hand:");
    for (number, spell) in wizard.hand.iter().enumerate() {
        let marker = if wizard.can_afford(spell) { ' ' } else { '!' };
        let _ = write!(text, "\n {marker}{}. {}", number + 1, spell_line(spell));
    }
    text
}

pub fn spell_line(spell: &Spell) -> String {
    format!(
        "{} ({} {}, tier {}, {} MP)",
        spell.name, spell.element, spell.spell_type, spell.tier, spell.mana_cost
    )
}

pub fn entry_line(entry: &CombatLogEntry) -> String {
    let actor = match entry.actor {
        LogActor::System => "--",
        LogActor::Player => "P ",
        LogActor::Enemy => "E ",
    };
    format!("[{:>3}] {actor} {}", entry.turn, entry.details)
}

pub fn summary_line(summary: &DuelSummary, player: &str, enemy: &str) -> String {
    let outcome = match summary.winner {
        Some(Side::Player) => format!("{player} wins"),
        Some(Side::Enemy) => format!("{enemy} wins"),
        None if summary.turn_limit_reached => "turn limit reached".to_string(),
        None => "duel unfinished".to_string(),
    };
    format!(
        "{outcome} after {} turns ({} rounds). {player}: {} HP, {enemy}: {} HP",
        summary.turns, summary.rounds, summary.player_health, summary.enemy_health
    )
}

pub fn wizard_row(wizard: &Wizard, fallback_deck_size: usize) -> String {
    let archetype = AiStrategyFactory::archetype_for_name(&wizard.name)
        .map_or_else(|| "-".to_string(), |archetype| archetype.to_string());
    format!(
        "{:<14} {:<16} lvl {:>2}  HP {:>3}  MP {:>3} (+{})  deck {:>2}  archetype {}",
        wizard.id,
        wizard.name,
        wizard.level,
        wizard.max_health,
        wizard.max_mana,
        wizard.mana_regen,
        wizard.combat_deck(fallback_deck_size).len(),
        archetype
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::{Difficulty, Element, LogAction, SpellType};

    #[test]
    fn hand_marks_unaffordable_cards() {
        let mut wizard = CombatWizard::new(Wizard::new("p", "Player"), Vec::new());
        wizard.hand = vec![
            Spell::new("spark", "Spark", SpellType::Attack, Element::Air).with_cost(1),
            Spell::new("nova", "Nova", SpellType::Attack, Element::Light).with_cost(500),
        ];

        let listing = hand_listing(&wizard);

        assert!(listing.contains("  1. Spark (air attack, tier 1, 1 MP)"), "{listing}");
        assert!(listing.contains(" !2. Nova"), "{listing}");
    }

    #[test]
    fn header_shows_both_sides() {
        let state = CombatState::new(
            CombatWizard::new(Wizard::new("p", "Mira"), Vec::new()),
            CombatWizard::new(Wizard::new("e", "Lich"), Vec::new()),
            Difficulty::Normal,
        );

        let header = turn_header(&state, Side::Player);

        assert!(header.contains("Round 1 / Turn 1"));
        assert!(header.contains("Mira  HP 100/100  MP 100/100"));
        assert!(header.contains("Lich  HP 100/100"));
    }

    #[test]
    fn entries_show_turn_and_actor() {
        let mut entry = CombatLogEntry::new(Side::Enemy, LogAction::MysticPunch, "Lich punches");
        entry.turn = 7;

        assert_eq!(entry_line(&entry), "[  7] E  Lich punches");
    }
}
