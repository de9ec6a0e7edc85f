//! Spell catalog entries and their effects.
//!
//! Spells are immutable once loaded. The engine copies them between hand,
//! draw pile, and discard pile but never edits one in place.

use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Unique spell identifier within a catalog.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SpellId(pub String);

impl SpellId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for SpellId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SpellId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for SpellId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum SpellType {
    Attack,
    Healing,
    Buff,
    Debuff,
    Utility,
    Summon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Element {
    Fire,
    Water,
    Earth,
    Air,
    Light,
    Shadow,
    Arcane,
    Nature,
    Time,
}

impl Element {
    /// The element that counters this one.
    ///
    /// Fire, Nature, Earth, Air, and Water form a cycle; Light/Shadow and
    /// Arcane/Time counter each other.
    pub const fn countered_by(self) -> Element {
        match self {
            Element::Fire => Element::Water,
            Element::Nature => Element::Fire,
            Element::Earth => Element::Nature,
            Element::Air => Element::Earth,
            Element::Water => Element::Air,
            Element::Light => Element::Shadow,
            Element::Shadow => Element::Light,
            Element::Arcane => Element::Time,
            Element::Time => Element::Arcane,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum EffectKind {
    Damage,
    Healing,
    ManaRestore,
    StatModifier,
    StatusEffect,
    Summon,
}

/// Which side an effect lands on, relative to the caster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectTarget {
    #[strum(serialize = "self")]
    #[cfg_attr(feature = "serde", serde(rename = "self"))]
    SelfTarget,
    #[strum(serialize = "enemy")]
    #[cfg_attr(feature = "serde", serde(rename = "enemy"))]
    Enemy,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellEffect {
    pub kind: EffectKind,
    pub value: i32,
    pub target: EffectTarget,
    pub element: Element,
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: Option<u32>,
}

impl SpellEffect {
    pub fn new(kind: EffectKind, value: i32, target: EffectTarget, element: Element) -> Self {
        Self {
            kind,
            value,
            target,
            element,
            duration: None,
        }
    }

    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Duration in rounds, treating a missing duration as instantaneous.
    pub fn rounds(&self) -> u32 {
        self.duration.unwrap_or(0)
    }

    /// The one-round, value-1 status effect that grants the caster another turn.
    pub fn is_time_warp(&self) -> bool {
        self.kind == EffectKind::StatusEffect && self.value == 1 && self.duration == Some(1)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spell {
    pub id: SpellId,
    pub name: String,
    pub spell_type: SpellType,
    pub element: Element,
    pub tier: u32,
    pub mana_cost: u32,
    pub effects: Vec<SpellEffect>,
}

impl Spell {
    pub fn new(
        id: impl Into<SpellId>,
        name: impl Into<String>,
        spell_type: SpellType,
        element: Element,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            spell_type,
            element,
            tier: 1,
            mana_cost: 0,
            effects: Vec::new(),
        }
    }

    pub fn with_tier(mut self, tier: u32) -> Self {
        self.tier = tier;
        self
    }

    pub fn with_cost(mut self, mana_cost: u32) -> Self {
        self.mana_cost = mana_cost;
        self
    }

    pub fn with_effect(mut self, effect: SpellEffect) -> Self {
        self.effects.push(effect);
        self
    }

    fn effects_of(&self, kind: EffectKind) -> impl Iterator<Item = &SpellEffect> {
        self.effects.iter().filter(move |effect| effect.kind == kind)
    }

    /// Total damage dealt to the enemy on cast, ignoring over-time ticks.
    pub fn damage_value(&self) -> i32 {
        self.effects_of(EffectKind::Damage)
            .filter(|effect| effect.target == EffectTarget::Enemy)
            .map(|effect| effect.value.max(0))
            .sum()
    }

    /// Total healing applied to the caster on cast.
    pub fn healing_value(&self) -> i32 {
        self.effects_of(EffectKind::Healing)
            .filter(|effect| effect.target == EffectTarget::SelfTarget)
            .map(|effect| effect.value.max(0))
            .sum()
    }

    pub fn is_damage(&self) -> bool {
        self.damage_value() > 0
    }

    pub fn is_healing(&self) -> bool {
        self.healing_value() > 0
    }

    /// Strengthens the caster: a self-targeted stat modifier, or any spell
    /// typed as a buff.
    pub fn is_buff(&self) -> bool {
        self.spell_type == SpellType::Buff
            || self.effects.iter().any(|effect| {
                effect.target == EffectTarget::SelfTarget
                    && matches!(effect.kind, EffectKind::StatModifier | EffectKind::StatusEffect)
                    && !effect.is_time_warp()
            })
    }

    /// Weakens the enemy with a lasting stat or status effect.
    pub fn is_debuff(&self) -> bool {
        self.spell_type == SpellType::Debuff
            || self.effects.iter().any(|effect| {
                effect.target == EffectTarget::Enemy
                    && matches!(effect.kind, EffectKind::StatModifier | EffectKind::StatusEffect)
            })
    }

    pub fn is_summon(&self) -> bool {
        self.spell_type == SpellType::Summon || self.effects_of(EffectKind::Summon).next().is_some()
    }

    pub fn is_mana_restore(&self) -> bool {
        self.effects_of(EffectKind::ManaRestore)
            .any(|effect| effect.target == EffectTarget::SelfTarget && effect.value > 0)
    }

    pub fn is_time_warp(&self) -> bool {
        self.effects.iter().any(SpellEffect::is_time_warp)
    }
}
