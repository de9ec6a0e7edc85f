//! Duel rules loader.

use std::path::Path;

use duel_core::DuelConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for duel rules from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a [`DuelConfig`] from a TOML file.
    ///
    /// Missing keys keep their standard values, so an empty file yields the
    /// default rules.
    pub fn load(path: &Path) -> LoadResult<DuelConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<DuelConfig> {
        let config: DuelConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse duel config TOML: {}", e))?;

        if config.max_hand_size == 0 {
            anyhow::bail!("max_hand_size must be at least 1");
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::{Difficulty, Side};

    #[test]
    fn empty_file_keeps_standard_rules() {
        assert_eq!(ConfigLoader::parse("").unwrap(), DuelConfig::default());
    }

    #[test]
    fn partial_overrides_merge_with_defaults() {
        let config = ConfigLoader::parse(
            r#"
            max_hand_size = 4

            [punch.hard]
            player = 1
            enemy = 20
            "#,
        )
        .unwrap();

        assert_eq!(config.max_hand_size, 4);
        assert_eq!(config.cards_per_draw, DuelConfig::CARDS_PER_DRAW);
        assert_eq!(config.punch_modifier(Difficulty::Hard, Side::Enemy), 20);
        assert_eq!(config.punch_modifier(Difficulty::Easy, Side::Player), 20);
    }

    #[test]
    fn zero_hand_size_is_rejected() {
        assert!(ConfigLoader::parse("max_hand_size = 0").is_err());
    }
}
