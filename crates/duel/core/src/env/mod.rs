//! Injected capabilities the rules engine depends on.
//!
//! The engine never reaches for ambient randomness or wall-clock time. Every
//! transition that shuffles, rolls, or timestamps a log entry receives a
//! [`DuelEnv`] that bundles the rules configuration with a [`RandomSource`]
//! and a [`Clock`]. Seeding the source and fixing the clock makes a duel
//! fully reproducible.
mod clock;
mod rng;

pub use clock::{Clock, FixedClock};
pub use rng::{PcgRng, RandomSource, ScriptedRng, shuffle};

use crate::config::DuelConfig;

/// Bundles the rules configuration with the random source and clock.
pub struct DuelEnv<'a> {
    config: &'a DuelConfig,
    rng: &'a mut dyn RandomSource,
    clock: &'a dyn Clock,
}

impl<'a> DuelEnv<'a> {
    pub fn new(config: &'a DuelConfig, rng: &'a mut dyn RandomSource, clock: &'a dyn Clock) -> Self {
        Self { config, rng, clock }
    }

    pub fn config(&self) -> &DuelConfig {
        self.config
    }

    pub fn rng(&mut self) -> &mut dyn RandomSource {
        &mut *self.rng
    }

    /// Milliseconds reported by the injected clock, used to stamp log entries.
    pub fn now_millis(&self) -> u64 {
        self.clock.now_millis()
    }

    /// Shuffles `items` in place with the injected random source.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        shuffle(&mut *self.rng, items);
    }
}

impl core::fmt::Debug for DuelEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DuelEnv")
            .field("config", self.config)
            .field("now_millis", &self.clock.now_millis())
            .finish_non_exhaustive()
    }
}
