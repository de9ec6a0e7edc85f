//! Spell catalog and wizard definitions with validated spell references.

use std::collections::HashMap;

use duel_core::{CombatStats, Spell, SpellId, Wizard};
use thiserror::Error;

/// Malformed content: the data files disagree with each other.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("spell id `{id}` is defined more than once")]
    DuplicateSpell { id: SpellId },

    #[error("wizard id `{id}` is defined more than once")]
    DuplicateWizard { id: String },

    #[error("wizard `{wizard}` references unknown spell `{spell}`")]
    UnknownSpell { wizard: String, spell: SpellId },
}

/// All spells known to the game, indexed by id.
#[derive(Clone, Debug, Default)]
pub struct SpellCatalog {
    spells: Vec<Spell>,
    index: HashMap<SpellId, usize>,
}

impl SpellCatalog {
    /// Builds a catalog, rejecting duplicate ids. Definition order is kept.
    pub fn from_spells(spells: Vec<Spell>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(spells.len());
        for (position, spell) in spells.iter().enumerate() {
            if index.insert(spell.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateSpell {
                    id: spell.id.clone(),
                });
            }
        }
        Ok(Self { spells, index })
    }

    pub fn get(&self, id: &SpellId) -> Option<&Spell> {
        self.index.get(id).and_then(|&position| self.spells.get(position))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Spell> {
        self.spells.iter()
    }

    pub fn len(&self) -> usize {
        self.spells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }

    /// Looks up every id in order on behalf of `wizard`.
    pub fn resolve(&self, wizard: &str, ids: &[SpellId]) -> Result<Vec<Spell>, CatalogError> {
        ids.iter()
            .map(|id| {
                self.get(id)
                    .cloned()
                    .ok_or_else(|| CatalogError::UnknownSpell {
                        wizard: wizard.to_string(),
                        spell: id.clone(),
                    })
            })
            .collect()
    }
}

/// A wizard as written in a roster file, with spells named by id.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WizardSpec {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub max_health: u32,
    pub max_mana: u32,
    pub mana_regen: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub combat_stats: CombatStats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub known_spells: Vec<SpellId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipped_spells: Vec<SpellId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub active_deck: Option<Vec<SpellId>>,
}

impl WizardSpec {
    /// Replaces spell ids with catalog entries.
    pub fn resolve(&self, catalog: &SpellCatalog) -> Result<Wizard, CatalogError> {
        let active_deck = match &self.active_deck {
            Some(ids) => Some(catalog.resolve(&self.id, ids)?),
            None => None,
        };
        Ok(Wizard {
            id: self.id.clone(),
            name: self.name.clone(),
            level: self.level,
            max_health: self.max_health,
            max_mana: self.max_mana,
            mana_regen: self.mana_regen,
            combat_stats: self.combat_stats,
            known_spells: catalog.resolve(&self.id, &self.known_spells)?,
            equipped_spells: catalog.resolve(&self.id, &self.equipped_spells)?,
            active_deck,
        })
    }
}
