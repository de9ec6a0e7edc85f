//! Deterministic combat rules for wizard duels.
//!
//! `duel-core` defines the canonical rules of a duel (deck cycling, turn and
//! round phases, spell resolution, effect ticking) and exposes them as
//! synchronous transitions over a single [`CombatState`] value. All state
//! mutation flows through [`engine::CombatEngine`] (or the free transition
//! functions it is built on), and randomness and time are injected through
//! [`env::DuelEnv`] so callers can replay a duel exactly from a seed.
pub mod config;
pub mod deck;
pub mod effects;
pub mod engine;
pub mod env;
pub mod error;
pub mod log;
pub mod spell;
pub mod state;
pub mod wizard;

pub use config::{DuelConfig, PunchModifiers, SideModifier};
pub use deck::{
    DiscardOutcome, discard_spell, draw_cards, initialize_combat, process_discard_phase,
    shuffle_discard_into_draw,
};
pub use effects::{apply_spell_effect, process_active_effects};
pub use engine::{
    ActionOutcome, AdvanceOutcome, CombatAction, CombatEngine, ExecuteError, advance_turn,
};
pub use env::{Clock, DuelEnv, FixedClock, PcgRng, RandomSource, ScriptedRng, shuffle};
pub use error::{ErrorSeverity, DuelError};
pub use log::{CombatLog, CombatLogEntry, LogAction, LogActor};
pub use spell::{EffectKind, EffectTarget, Element, Spell, SpellEffect, SpellId, SpellType};
pub use state::{
    ActiveEffect, CombatState, CombatStatus, CombatWizard, Difficulty, InitializationError,
    PendingOverride, PeriodicAction, Side,
};
pub use wizard::{CombatStats, Wizard};
