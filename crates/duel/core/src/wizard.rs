//! Wizards as handed to the combat core.
//!
//! A [`Wizard`] is external input: its stats are already merged with
//! equipment by whatever owns the player profile.

use crate::spell::Spell;

/// Equipment-merged combat bonuses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatStats {
    pub mystic_punch_power: i32,
    pub extra_card_draw: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wizard {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub max_health: u32,
    pub max_mana: u32,
    pub mana_regen: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub combat_stats: CombatStats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub known_spells: Vec<Spell>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipped_spells: Vec<Spell>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub active_deck: Option<Vec<Spell>>,
}

impl Wizard {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            level: 1,
            max_health: 100,
            max_mana: 100,
            mana_regen: 10,
            combat_stats: CombatStats::default(),
            known_spells: Vec::new(),
            equipped_spells: Vec::new(),
            active_deck: None,
        }
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn with_vitals(mut self, max_health: u32, max_mana: u32, mana_regen: u32) -> Self {
        self.max_health = max_health;
        self.max_mana = max_mana;
        self.mana_regen = mana_regen;
        self
    }

    pub fn with_stats(mut self, combat_stats: CombatStats) -> Self {
        self.combat_stats = combat_stats;
        self
    }

    pub fn with_known_spells(mut self, spells: Vec<Spell>) -> Self {
        self.known_spells = spells;
        self
    }

    pub fn with_equipped_spells(mut self, spells: Vec<Spell>) -> Self {
        self.equipped_spells = spells;
        self
    }

    pub fn with_active_deck(mut self, deck: Vec<Spell>) -> Self {
        self.active_deck = Some(deck);
        self
    }

    /// Cards this wizard brings into a duel.
    ///
    /// Preference order: a non-empty active deck, then non-empty equipped
    /// spells, then the first `fallback_size` known spells.
    pub fn combat_deck(&self, fallback_size: usize) -> Vec<Spell> {
        if let Some(deck) = self.active_deck.as_ref().filter(|deck| !deck.is_empty()) {
            return deck.clone();
        }
        if !self.equipped_spells.is_empty() {
            return self.equipped_spells.clone();
        }
        self.known_spells.iter().take(fallback_size).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spell::{Element, SpellType};

    fn spells(prefix: &str, count: usize) -> Vec<Spell> {
        (0..count)
            .map(|i| {
                Spell::new(
                    format!("{prefix}_{i}"),
                    format!("{prefix} {i}"),
                    SpellType::Attack,
                    Element::Arcane,
                )
            })
            .collect()
    }

    #[test]
    fn combat_deck_prefers_active_then_equipped_then_known() {
        let wizard = Wizard::new("w", "Wizard").with_known_spells(spells("known", 8));
        let deck = wizard.combat_deck(5);
        assert_eq!(deck.len(), 5);
        assert_eq!(deck[0].id.as_str(), "known_0");

        let wizard = wizard.with_equipped_spells(spells("equipped", 2));
        assert_eq!(wizard.combat_deck(5)[0].id.as_str(), "equipped_0");

        let wizard = wizard.with_active_deck(Vec::new());
        assert_eq!(wizard.combat_deck(5)[0].id.as_str(), "equipped_0");

        let wizard = wizard.with_active_deck(spells("active", 3));
        let deck = wizard.combat_deck(5);
        assert_eq!(deck.len(), 3);
        assert_eq!(deck[0].id.as_str(), "active_0");
    }
}
