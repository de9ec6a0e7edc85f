//! Spell catalog loader.

use std::path::Path;

use duel_core::Spell;
use serde::{Deserialize, Serialize};

use crate::catalog::SpellCatalog;
use crate::loaders::{LoadResult, read_file};

/// Spell catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellCatalogFile {
    pub spells: Vec<Spell>,
}

/// Loader for the spell catalog from RON files.
pub struct SpellLoader;

impl SpellLoader {
    /// Load and validate the spell catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<SpellCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<SpellCatalog> {
        let file: SpellCatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse spell catalog RON: {}", e))?;

        let catalog = SpellCatalog::from_spells(file.spells)?;
        tracing::debug!(spells = catalog.len(), "loaded spell catalog");
        Ok(catalog)
    }
}
