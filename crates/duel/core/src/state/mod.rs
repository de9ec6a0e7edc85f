//! Combat state shared by every transition.
//!
//! [`CombatState`] is the single value the engine mutates. It owns both
//! combatants, the turn and round counters, the log, and the two explicit
//! pause markers: a pending extra turn and a pending discard gate.
mod effect;
mod error;
mod wizard;

pub use effect::{ActiveEffect, PeriodicAction};
pub use error::InitializationError;
pub use wizard::CombatWizard;

use strum::{AsRefStr, Display, EnumString};

use crate::env::DuelEnv;
use crate::log::{CombatLog, CombatLogEntry, LogAction};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub const fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum CombatStatus {
    Active,
    PlayerWon,
    EnemyWon,
}

impl CombatStatus {
    /// Status reached when `loser` drops to zero health.
    pub const fn defeat_of(loser: Side) -> Self {
        match loser {
            Side::Player => CombatStatus::EnemyWon,
            Side::Enemy => CombatStatus::PlayerWon,
        }
    }

    pub const fn is_terminal(self) -> bool {
        !matches!(self, CombatStatus::Active)
    }
}

/// An extra turn granted by Time Warp, consumed by the next turn advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingOverride {
    pub side: Side,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatState {
    pub player: CombatWizard,
    pub enemy: CombatWizard,
    pub turn: u32,
    pub round: u32,
    pub active: Side,
    pub log: CombatLog,
    pub status: CombatStatus,
    pub difficulty: Difficulty,
    pub pending_override: Option<PendingOverride>,
    /// Side that must discard before the round can advance.
    pub pending_discard: Option<Side>,
}

impl CombatState {
    /// Round 1, turn 1, player to act, empty log.
    pub fn new(player: CombatWizard, enemy: CombatWizard, difficulty: Difficulty) -> Self {
        Self {
            player,
            enemy,
            turn: 1,
            round: 1,
            active: Side::Player,
            log: CombatLog::new(),
            status: CombatStatus::Active,
            difficulty,
            pending_override: None,
            pending_discard: None,
        }
    }

    pub fn is_player_turn(&self) -> bool {
        self.active == Side::Player
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn winner(&self) -> Option<Side> {
        match self.status {
            CombatStatus::Active => None,
            CombatStatus::PlayerWon => Some(Side::Player),
            CombatStatus::EnemyWon => Some(Side::Enemy),
        }
    }

    pub fn wizard(&self, side: Side) -> &CombatWizard {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    pub fn wizard_mut(&mut self, side: Side) -> &mut CombatWizard {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }

    /// Stamps `entry` with the current turn, round, and clock, then appends it.
    pub fn record(&mut self, env: &DuelEnv<'_>, mut entry: CombatLogEntry) {
        entry.turn = self.turn;
        entry.round = self.round;
        entry.timestamp = env.now_millis();
        self.log.push(entry);
    }

    /// Ends the duel if either side is at zero health, checking `first`
    /// before its opponent. Returns true when the duel is (or already was)
    /// over.
    pub fn resolve_defeat(&mut self, first: Side, env: &DuelEnv<'_>) -> bool {
        if self.is_over() {
            return true;
        }
        let Some(loser) = [first, first.opponent()]
            .into_iter()
            .find(|side| self.wizard(*side).is_defeated())
        else {
            return false;
        };

        self.status = CombatStatus::defeat_of(loser);
        let winner = loser.opponent();
        let details = format!(
            "{} is defeated. {} wins the duel",
            self.wizard(loser).name(),
            self.wizard(winner).name()
        );
        tracing::info!(
            winner = %winner,
            turn = self.turn,
            round = self.round,
            "combat ended"
        );
        self.record(
            env,
            CombatLogEntry::system(LogAction::CombatEnd, details).with_target(loser),
        );
        true
    }
}
