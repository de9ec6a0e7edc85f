//! Strategy selection from difficulty, level, and name.

use duel_core::{Difficulty, RandomSource};
use strum::IntoEnumIterator;

use super::strategy::{AiStrategy, Archetype};

pub struct AiStrategyFactory;

impl AiStrategyFactory {
    /// Picks the policy for an opponent.
    ///
    /// A name keyword selects an archetype regardless of difficulty.
    /// Otherwise easy opponents play defensively, hard ones scale with level,
    /// and normal ones roll a level-weighted strategy.
    pub fn create_strategy(
        difficulty: Difficulty,
        level: u32,
        name: &str,
        rng: &mut dyn RandomSource,
    ) -> AiStrategy {
        if let Some(archetype) = Self::archetype_for_name(name) {
            return AiStrategy::Archetype(archetype);
        }
        match difficulty {
            Difficulty::Easy => AiStrategy::Defensive,
            Difficulty::Hard if level >= 8 => AiStrategy::Elemental,
            Difficulty::Hard if level >= 5 => AiStrategy::Aggressive,
            Difficulty::Hard => AiStrategy::Balanced,
            Difficulty::Normal => Self::weighted_for_level(level, rng),
        }
    }

    /// First archetype whose keyword appears in `name`, case-insensitively.
    pub fn archetype_for_name(name: &str) -> Option<Archetype> {
        let name = name.to_lowercase();
        Archetype::iter().find(|archetype| {
            archetype
                .keywords()
                .iter()
                .any(|keyword| name.contains(keyword))
        })
    }

    fn weighted_for_level(level: u32, rng: &mut dyn RandomSource) -> AiStrategy {
        use AiStrategy::{Aggressive, Balanced, Defensive, Elemental};

        let table: &[(u32, AiStrategy)] = if level < 3 {
            &[(60, Defensive), (30, Balanced), (10, Aggressive)]
        } else if level < 6 {
            &[(30, Defensive), (40, Balanced), (20, Aggressive), (10, Elemental)]
        } else {
            &[(10, Defensive), (30, Balanced), (30, Aggressive), (30, Elemental)]
        };

        let total: u32 = table.iter().map(|(weight, _)| weight).sum();
        let mut roll = rng.below(total);
        for &(weight, strategy) in table {
            if roll < weight {
                return strategy;
            }
            roll -= weight;
        }
        Balanced
    }
}
