//! Duel configuration constants and tunable parameters.

use crate::state::{Difficulty, Side};

/// Mystic Punch bonus for each side at one difficulty level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideModifier {
    pub player: i32,
    pub enemy: i32,
}

impl SideModifier {
    pub const fn new(player: i32, enemy: i32) -> Self {
        Self { player, enemy }
    }

    pub const fn for_side(&self, side: Side) -> i32 {
        match side {
            Side::Player => self.player,
            Side::Enemy => self.enemy,
        }
    }
}

/// Flat Mystic Punch damage bonus by difficulty and caster side.
///
/// The enemy hits harder as difficulty rises while the player's bonus
/// shrinks, so melee spam stops paying off on harder settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PunchModifiers {
    pub easy: SideModifier,
    pub normal: SideModifier,
    pub hard: SideModifier,
}

impl PunchModifiers {
    pub const DEFAULT: Self = Self {
        easy: SideModifier::new(20, 5),
        normal: SideModifier::new(5, 10),
        hard: SideModifier::new(2, 15),
    };

    pub const fn modifier(&self, difficulty: Difficulty, side: Side) -> i32 {
        match difficulty {
            Difficulty::Easy => self.easy.for_side(side),
            Difficulty::Normal => self.normal.for_side(side),
            Difficulty::Hard => self.hard.for_side(side),
        }
    }
}

impl Default for PunchModifiers {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Duel rules that callers may tune; defaults reproduce the standard game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DuelConfig {
    /// Cards a hand may hold when a round ends.
    pub max_hand_size: usize,
    /// Cards each side draws at the start of a round.
    pub cards_per_draw: u32,
    /// Cards each side draws when the duel begins.
    pub initial_hand_size: u32,
    /// Known spells used as a deck when a wizard has neither an active deck
    /// nor equipped spells.
    pub fallback_deck_size: usize,
    /// Health lost for every draw attempted against an empty draw pile.
    pub failed_draw_damage: u32,
    pub punch: PunchModifiers,
}

impl DuelConfig {
    pub const MAX_HAND_SIZE: usize = 2;
    pub const CARDS_PER_DRAW: u32 = 1;
    pub const INITIAL_HAND_SIZE: u32 = 3;
    pub const FALLBACK_DECK_SIZE: usize = 5;
    pub const FAILED_DRAW_DAMAGE: u32 = 1;

    pub fn new() -> Self {
        Self {
            max_hand_size: Self::MAX_HAND_SIZE,
            cards_per_draw: Self::CARDS_PER_DRAW,
            initial_hand_size: Self::INITIAL_HAND_SIZE,
            fallback_deck_size: Self::FALLBACK_DECK_SIZE,
            failed_draw_damage: Self::FAILED_DRAW_DAMAGE,
            punch: PunchModifiers::DEFAULT,
        }
    }

    pub fn with_max_hand_size(mut self, max_hand_size: usize) -> Self {
        self.max_hand_size = max_hand_size;
        self
    }

    pub fn punch_modifier(&self, difficulty: Difficulty, side: Side) -> i32 {
        self.punch.modifier(difficulty, side)
    }
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self::new()
    }
}
