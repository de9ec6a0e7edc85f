//! CLI configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// Settings that may come from the environment (or a `.env` file).
///
/// Command-line flags take precedence over every field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub data_dir: Option<PathBuf>,
    pub seed: Option<u64>,
    pub max_turns: Option<u32>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUEL_DATA_DIR` - Directory with `spells.ron`, `wizards.ron`, `duel.toml`
    ///   (default: the bundled content)
    /// - `DUEL_SEED` - Seed for the duel RNG (default: random)
    /// - `DUEL_MAX_TURNS` - Turn limit for unattended duels (default: 200)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            data_dir: lookup("DUEL_DATA_DIR")
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
            seed: read_var(&lookup, "DUEL_SEED"),
            max_turns: read_var::<u32>(&lookup, "DUEL_MAX_TURNS").map(|turns| turns.max(1)),
        }
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
