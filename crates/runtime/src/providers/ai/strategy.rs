use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Name-derived opponent personalities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Archetype {
    Necromancer,
    TimeWeaver,
    BattleMage,
    Illusionist,
    Alchemist,
}

impl Archetype {
    /// Lowercase name fragments that mark a wizard as this archetype.
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Archetype::Necromancer => &["dark", "death", "necro", "lich"],
            Archetype::TimeWeaver => &["time", "chrono"],
            Archetype::BattleMage => &["battle", "war"],
            Archetype::Illusionist => &["illusion", "mirage", "trick"],
            Archetype::Alchemist => &["alchem", "potion"],
        }
    }
}

/// Closed set of spell-selection policies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AiStrategy {
    Defensive,
    Aggressive,
    Balanced,
    Elemental,
    Archetype(Archetype),
}

impl AiStrategy {
    /// Whether the strategy writes its choices into [`super::AiMemory`].
    pub const fn remembers_elements(self) -> bool {
        matches!(self, AiStrategy::Elemental)
    }
}

impl core::fmt::Display for AiStrategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AiStrategy::Defensive => f.write_str("defensive"),
            AiStrategy::Aggressive => f.write_str("aggressive"),
            AiStrategy::Balanced => f.write_str("balanced"),
            AiStrategy::Elemental => f.write_str("elemental"),
            AiStrategy::Archetype(archetype) => core::fmt::Display::fmt(archetype, f),
        }
    }
}

impl core::str::FromStr for AiStrategy {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "defensive" => Ok(AiStrategy::Defensive),
            "aggressive" => Ok(AiStrategy::Aggressive),
            "balanced" => Ok(AiStrategy::Balanced),
            "elemental" => Ok(AiStrategy::Elemental),
            other => other.parse().map(AiStrategy::Archetype),
        }
    }
}
