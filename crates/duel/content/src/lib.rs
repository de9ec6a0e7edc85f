//! Data-driven duel content: spell catalogs, wizard rosters, and rules.
//!
//! This crate turns static data files into the values the combat core
//! consumes:
//! - Spell catalog (RON), validated for duplicate ids
//! - Wizard roster (RON), whose decks reference catalog spells by id
//! - Duel rules (TOML), an override of [`duel_core::DuelConfig`]
//!
//! Content is read once before a duel starts and never appears in combat
//! state. Reference errors are hard failures reported as [`CatalogError`].

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{CatalogError, SpellCatalog, WizardSpec};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, SpellLoader, WizardLoader};
