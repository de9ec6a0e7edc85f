//! Wizard roster loader.
//!
//! Roster entries name their spells by id. Every id must exist in the spell
//! catalog; an unknown id fails the whole load.

use std::collections::HashSet;
use std::path::Path;

use duel_core::Wizard;
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogError, SpellCatalog, WizardSpec};
use crate::loaders::{LoadResult, read_file};

/// Wizard roster structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardRosterFile {
    pub wizards: Vec<WizardSpec>,
}

/// Loader for the wizard roster from RON files.
pub struct WizardLoader;

impl WizardLoader {
    /// Load the roster and resolve every spell reference against `catalog`.
    pub fn load(path: &Path, catalog: &SpellCatalog) -> LoadResult<Vec<Wizard>> {
        let content = read_file(path)?;
        Self::parse(&content, catalog)
    }

    pub fn parse(content: &str, catalog: &SpellCatalog) -> LoadResult<Vec<Wizard>> {
        let file: WizardRosterFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse wizard roster RON: {}", e))?;

        let mut seen = HashSet::new();
        let mut wizards = Vec::with_capacity(file.wizards.len());
        for spec in &file.wizards {
            if !seen.insert(spec.id.as_str()) {
                return Err(CatalogError::DuplicateWizard {
                    id: spec.id.clone(),
                }
                .into());
            }
            wizards.push(spec.resolve(catalog)?);
        }

        tracing::debug!(wizards = wizards.len(), "loaded wizard roster");
        Ok(wizards)
    }
}
