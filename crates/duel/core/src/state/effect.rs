use crate::spell::{EffectKind, Element};
use crate::state::Side;

/// What a lasting effect does each time it ticks.
///
/// Derived once when the effect is materialized so ticking never has to
/// re-interpret display names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PeriodicAction {
    /// Damages the wizard holding the effect.
    Damage(u32),
    /// Heals the wizard holding the effect.
    Heal(u32),
    /// Restores mana to the wizard holding the effect.
    RestoreMana(u32),
    /// Damages the holder's opponent (summoned minions).
    StrikeOpponent(u32),
}

/// A materialized, duration-bearing effect attached to one wizard.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveEffect {
    pub name: String,
    pub kind: EffectKind,
    pub value: i32,
    pub element: Element,
    pub remaining_duration: u32,
    /// Side that cast the spell which created this effect.
    pub source: Side,
    /// `None` for passive markers such as stat modifiers.
    pub periodic: Option<PeriodicAction>,
}

impl ActiveEffect {
    /// Whether the effect was cast by the wizard holding it.
    pub fn is_buff_for(&self, holder: Side) -> bool {
        self.source == holder
    }

    pub fn is_debuff_for(&self, holder: Side) -> bool {
        self.source != holder
    }

    pub fn is_summon(&self) -> bool {
        self.kind == EffectKind::Summon
    }
}
