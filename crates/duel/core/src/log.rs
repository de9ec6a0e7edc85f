//! Append-only combat log.
//!
//! The log is the in-game audit trail. Entries are appended in the exact
//! order events happen, and a single action may append any number of them.

use strum::{AsRefStr, Display, EnumString};

use crate::state::Side;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum LogActor {
    Player,
    Enemy,
    System,
}

impl From<Side> for LogActor {
    fn from(side: Side) -> Self {
        match side {
            Side::Player => LogActor::Player,
            Side::Enemy => LogActor::Enemy,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum LogAction {
    CombatStart,
    DrawCards,
    FailedDraw,
    ShuffleDiscard,
    Discard,
    DiscardRequired,
    AutoDiscard,
    SelectSpell,
    Cast,
    CastFailed,
    MysticPunch,
    SkipTurn,
    Damage,
    Healing,
    ManaRestore,
    EffectApplied,
    EffectTick,
    EffectExpired,
    ExtraTurn,
    ManaRegen,
    RoundStart,
    CombatEnd,
}

/// Log value for an amount gained, saturating at `i32::MAX`.
pub fn gain(amount: u32) -> i32 {
    i32::try_from(amount).unwrap_or(i32::MAX)
}

/// Log value for an amount lost, saturating at `i32::MIN`.
pub fn loss(amount: u32) -> i32 {
    i32::try_from(amount).map_or(i32::MIN, |amount| -amount)
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatLogEntry {
    pub turn: u32,
    pub round: u32,
    pub actor: LogActor,
    pub action: LogAction,
    pub details: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub damage: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub healing: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub mana: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub spell_name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub target: Option<Side>,
    pub timestamp: u64,
}

impl CombatLogEntry {
    /// Creates an unstamped entry. `turn`, `round`, and `timestamp` are filled
    /// in when the entry is recorded on a [`crate::CombatState`].
    pub fn new(actor: impl Into<LogActor>, action: LogAction, details: impl Into<String>) -> Self {
        Self {
            turn: 0,
            round: 0,
            actor: actor.into(),
            action,
            details: details.into(),
            damage: None,
            healing: None,
            mana: None,
            spell_name: None,
            target: None,
            timestamp: 0,
        }
    }

    pub fn system(action: LogAction, details: impl Into<String>) -> Self {
        Self::new(LogActor::System, action, details)
    }

    pub fn with_damage(mut self, damage: i32) -> Self {
        self.damage = Some(damage);
        self
    }

    pub fn with_healing(mut self, healing: i32) -> Self {
        self.healing = Some(healing);
        self
    }

    pub fn with_mana(mut self, mana: i32) -> Self {
        self.mana = Some(mana);
        self
    }

    pub fn with_spell(mut self, spell_name: impl Into<String>) -> Self {
        self.spell_name = Some(spell_name.into());
        self
    }

    pub fn with_target(mut self, target: Side) -> Self {
        self.target = Some(target);
        self
    }
}

impl core::fmt::Display for CombatLogEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[r{} t{}] {} {}: {}",
            self.round, self.turn, self.actor, self.action, self.details
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CombatLog {
    entries: Vec<CombatLogEntry>,
}

impl CombatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: CombatLogEntry) {
        self.entries.push(entry);
    }

    pub fn iter(&self) -> impl Iterator<Item = &CombatLogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&CombatLogEntry> {
        self.entries.last()
    }

    /// Entries appended at or after `index`, for incremental rendering.
    pub fn since(&self, index: usize) -> &[CombatLogEntry] {
        self.entries.get(index..).unwrap_or(&[])
    }

    pub fn count(&self, action: LogAction) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.action == action)
            .count()
    }

    pub fn as_slice(&self) -> &[CombatLogEntry] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a CombatLog {
    type Item = &'a CombatLogEntry;
    type IntoIter = core::slice::Iter<'a, CombatLogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn since_clamps_past_end() {
        let mut log = CombatLog::new();
        log.push(CombatLogEntry::system(LogAction::CombatStart, "start"));
        log.push(CombatLogEntry::new(Side::Player, LogAction::SkipTurn, "skip"));

        assert_eq!(log.since(1).len(), 1);
        assert_eq!(log.since(1)[0].actor, LogActor::Player);
        assert!(log.since(5).is_empty());
        assert_eq!(log.count(LogAction::SkipTurn), 1);
    }

    #[test]
    fn actions_render_snake_case() {
        assert_eq!(LogAction::FailedDraw.as_ref(), "failed_draw");
        assert_eq!(LogAction::CombatEnd.to_string(), "combat_end");
        assert_eq!("extra_turn".parse::<LogAction>().ok(), Some(LogAction::ExtraTurn));
    }
}
