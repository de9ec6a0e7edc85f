//! Content factory for loading everything a duel needs from one directory.

use std::path::{Path, PathBuf};

use duel_core::{DuelConfig, Wizard};

use crate::catalog::SpellCatalog;
use crate::loaders::{ConfigLoader, LoadResult, SpellLoader, WizardLoader};

/// Content factory that loads duel content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── duel.toml
/// ├── spells.ron
/// └── wizards.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "duel.toml";
    pub const SPELLS_FILE: &'static str = "spells.ron";
    pub const WIZARDS_FILE: &'static str = "wizards.ron";

    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The data shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load duel rules from `duel.toml`. A missing file means default rules.
    pub fn load_config(&self) -> LoadResult<DuelConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no duel config, using defaults");
            return Ok(DuelConfig::default());
        }
        ConfigLoader::load(&path)
    }

    pub fn load_spells(&self) -> LoadResult<SpellCatalog> {
        let path = self.data_dir.join(Self::SPELLS_FILE);
        SpellLoader::load(&path)
    }

    /// Load the wizard roster from `wizards.ron`, resolved against `catalog`.
    pub fn load_wizards(&self, catalog: &SpellCatalog) -> LoadResult<Vec<Wizard>> {
        let path = self.data_dir.join(Self::WIZARDS_FILE);
        WizardLoader::load(&path, catalog)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
