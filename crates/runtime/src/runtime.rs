//! Synchronous duel orchestrator.
//!
//! [`DuelRuntime`] owns the combat state, the injected random source and
//! clock, and one [`ActionProvider`] per side. Each [`DuelRuntime::step`]
//! plays exactly one turn (or resolves a pending discard) through the
//! combat engine; [`DuelRuntime::run`] steps until the duel ends or the
//! turn limit is reached.

use duel_core::{
    ActionOutcome, AdvanceOutcome, Clock, CombatAction, CombatEngine, CombatLogEntry, CombatState,
    CombatStatus, Difficulty, DuelConfig, DuelEnv, DuelError, FixedClock, PcgRng, RandomSource,
    Side, Wizard, initialize_combat,
};

use crate::api::{ActionProvider, Result, RuntimeError, TurnPlan};
use crate::providers::AiProvider;

/// Runtime configuration shared by the orchestrator and the engine.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub duel: DuelConfig,
    /// `run` stops once the turn counter passes this value.
    pub max_turns: u32,
}

impl RuntimeConfig {
    pub const DEFAULT_MAX_TURNS: u32 = 200;
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            duel: DuelConfig::default(),
            max_turns: Self::DEFAULT_MAX_TURNS,
        }
    }
}

/// What a single [`DuelRuntime::step`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The duel is over; nothing was played.
    Finished(CombatStatus),
    /// A turn (or a discard resolution) was played.
    Advanced(AdvanceOutcome),
}

/// Final standings of a duel.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DuelSummary {
    pub status: CombatStatus,
    pub winner: Option<Side>,
    pub turns: u32,
    pub rounds: u32,
    pub player_health: u32,
    pub enemy_health: u32,
    pub log_entries: usize,
    pub turn_limit_reached: bool,
}

pub struct DuelRuntime {
    config: RuntimeConfig,
    state: CombatState,
    rng: Box<dyn RandomSource>,
    clock: Box<dyn Clock>,
    player: Box<dyn ActionProvider>,
    enemy: Box<dyn ActionProvider>,
}

impl DuelRuntime {
    pub fn builder() -> DuelRuntimeBuilder {
        DuelRuntimeBuilder::new()
    }

    pub fn state(&self) -> &CombatState {
        &self.state
    }

    pub fn into_state(self) -> CombatState {
        self.state
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Log entries appended since `index`, for incremental rendering.
    pub fn log_since(&self, index: usize) -> &[CombatLogEntry] {
        self.state.log.since(index)
    }

    /// Plays one turn, or resolves the pending discard gate.
    pub fn step(&mut self) -> Result<StepOutcome> {
        if self.state.is_over() {
            return Ok(StepOutcome::Finished(self.state.status));
        }
        if let Some(side) = self.state.pending_discard {
            return self.resolve_discard(side);
        }

        let side = self.state.active;
        let provider = match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        };
        let plan: TurnPlan = provider.provide_actions(side, &self.state, &mut *self.rng)?;

        let mut env = DuelEnv::new(&self.config.duel, &mut *self.rng, &*self.clock);
        let mut engine = CombatEngine::new(&mut self.state);
        for action in &plan {
            let outcome = engine.execute(&mut env, side, action).map_err(|source| {
                tracing::warn!(
                    %side,
                    action = action.as_str(),
                    code = source.error_code(),
                    error = %source,
                    "action rejected"
                );
                RuntimeError::ActionRejected { side, source }
            })?;
            match outcome {
                ActionOutcome::TurnEnded(advance) => return Ok(StepOutcome::Advanced(advance)),
                ActionOutcome::Ignored => {
                    return Ok(StepOutcome::Finished(engine.state().status));
                }
                ActionOutcome::SpellSelected { found: false } => {
                    tracing::warn!(%side, "selected spell is not in hand");
                }
                ActionOutcome::SpellSelected { .. } | ActionOutcome::Discarded { .. } => {}
            }
        }

        tracing::warn!(%side, actions = plan.len(), "turn plan did not end the turn");
        Err(RuntimeError::IncompletePlan { side })
    }

    fn resolve_discard(&mut self, side: Side) -> Result<StepOutcome> {
        let cap = self.config.duel.max_hand_size;
        let excess = self.state.wizard(side).hand.len().saturating_sub(cap);
        let provider = match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        };
        let discards = provider.choose_discards(side, &self.state, excess)?;

        let mut env = DuelEnv::new(&self.config.duel, &mut *self.rng, &*self.clock);
        let mut engine = CombatEngine::new(&mut self.state);
        for spell_id in discards {
            let action = CombatAction::Discard { spell_id };
            engine
                .execute(&mut env, side, &action)
                .map_err(|source| RuntimeError::ActionRejected { side, source })?;
        }

        let remaining = engine.state().wizard(side).hand.len().saturating_sub(cap);
        if remaining > 0 {
            return Err(RuntimeError::DiscardUnresolved {
                side,
                excess: remaining,
            });
        }

        match engine
            .execute(&mut env, side, &CombatAction::AdvanceTurn)
            .map_err(|source| RuntimeError::ActionRejected { side, source })?
        {
            ActionOutcome::TurnEnded(advance) => Ok(StepOutcome::Advanced(advance)),
            _ => Ok(StepOutcome::Finished(engine.state().status)),
        }
    }

    /// Whether the duel is over or has passed the turn limit.
    pub fn is_finished(&self) -> bool {
        self.state.is_over() || self.turn_limit_reached()
    }

    fn turn_limit_reached(&self) -> bool {
        !self.state.is_over() && self.state.turn > self.config.max_turns
    }

    /// Steps until the duel ends or the turn limit is passed.
    pub fn run(&mut self) -> Result<DuelSummary> {
        while !self.is_finished() {
            self.step()?;
        }
        if self.turn_limit_reached() {
            tracing::warn!(max_turns = self.config.max_turns, "turn limit reached");
        }
        Ok(self.summary())
    }

    pub fn summary(&self) -> DuelSummary {
        DuelSummary {
            status: self.state.status,
            winner: self.state.winner(),
            turns: self.state.turn,
            rounds: self.state.round,
            player_health: self.state.player.current_health(),
            enemy_health: self.state.enemy.current_health(),
            log_entries: self.state.log.len(),
            turn_limit_reached: self.turn_limit_reached(),
        }
    }
}

/// Builder for [`DuelRuntime`].
///
/// The player provider is required. Without an explicit enemy provider the
/// enemy is played by an [`AiProvider`] with the strategy the factory
/// assigns. The random source defaults to `PcgRng` seeded with 0 and the
/// clock to a fixed instant, so an unconfigured runtime is deterministic.
pub struct DuelRuntimeBuilder {
    config: RuntimeConfig,
    difficulty: Difficulty,
    rng: Option<Box<dyn RandomSource>>,
    clock: Option<Box<dyn Clock>>,
    player_provider: Option<Box<dyn ActionProvider>>,
    enemy_provider: Option<Box<dyn ActionProvider>>,
}

impl DuelRuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            difficulty: Difficulty::default(),
            rng: None,
            clock: None,
            player_provider: None,
            enemy_provider: None,
        }
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn seed(self, seed: u64) -> Self {
        self.rng(PcgRng::seed_from_u64(seed))
    }

    pub fn rng(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    pub fn player_provider(mut self, provider: impl ActionProvider + 'static) -> Self {
        self.player_provider = Some(Box::new(provider));
        self
    }

    pub fn enemy_provider(mut self, provider: impl ActionProvider + 'static) -> Self {
        self.enemy_provider = Some(Box::new(provider));
        self
    }

    /// Shuffles decks, deals opening hands, and returns a runtime ready to
    /// step.
    pub fn build(self, player: Wizard, enemy: Wizard) -> Result<DuelRuntime> {
        let player_provider = self
            .player_provider
            .ok_or(RuntimeError::ProviderNotSet { side: Side::Player })?;
        let mut rng = self
            .rng
            .unwrap_or_else(|| Box::new(PcgRng::seed_from_u64(0)));
        let clock = self.clock.unwrap_or_else(|| Box::new(FixedClock(0)));

        let state = {
            let mut env = DuelEnv::new(&self.config.duel, &mut *rng, &*clock);
            initialize_combat(player, enemy, self.difficulty, &mut env)?
        };

        let enemy_provider = match self.enemy_provider {
            Some(provider) => provider,
            None => Box::new(AiProvider::for_opponent(
                &state.enemy.wizard,
                self.difficulty,
                &mut *rng,
            )),
        };

        Ok(DuelRuntime {
            config: self.config,
            state,
            rng,
            clock,
            player: player_provider,
            enemy: enemy_provider,
        })
    }
}
