//! Random sources for deterministic shuffles and AI rolls.
//!
//! All implementations must be deterministic: the same seed yields the same
//! sequence, which is what makes a recorded duel replayable.

/// Stateful source of uniformly distributed 32-bit values.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Value in `[0, bound)`. Returns 0 when `bound` is 0.
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.next_u32() % bound
    }

    /// Succeeds with probability `percent / 100`, saturating at 100.
    fn chance(&mut self, percent: u32) -> bool {
        self.below(100) < percent.min(100)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// Fisher–Yates shuffle driven by `rng`.
pub fn shuffle<T>(rng: &mut (impl RandomSource + ?Sized), items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i as u32 + 1) as usize;
        items.swap(i, j);
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// Small, fast, and fully deterministic. Each call to
/// [`RandomSource::next_u32`] advances the internal state by one LCG step
/// and permutes the previous state into the output.
///
/// See <https://www.pcg-random.org/>.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    pub fn seed_from_u64(seed: u64) -> Self {
        let mut rng = Self { state: 0 };
        rng.step();
        rng.state = rng.state.wrapping_add(seed);
        rng.step();
        rng
    }

    /// `state' = state * multiplier + increment (mod 2^64)`
    #[inline]
    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
    }

    /// XSH-RR: xorshift high bits, then rotate by the top five bits.
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RandomSource for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.step();
        Self::output(old)
    }
}

/// Replays a fixed list of values in a loop.
///
/// Useful for forcing a particular AI roll or shuffle order. An empty script
/// always yields 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptedRng {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }
}

impl RandomSource for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic_per_seed() {
        let mut a = PcgRng::seed_from_u64(42);
        let mut b = PcgRng::seed_from_u64(42);
        let mut c = PcgRng::seed_from_u64(43);

        let seq_a: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let seq_b: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        let seq_c: Vec<u32> = (0..8).map(|_| c.next_u32()).collect();

        assert_eq!(seq_a, seq_b);
        assert_ne!(seq_a, seq_c);
    }

    #[test]
    fn below_zero_bound_is_zero() {
        let mut rng = PcgRng::seed_from_u64(7);
        assert_eq!(rng.below(0), 0);
        for _ in 0..100 {
            assert!(rng.below(6) < 6);
        }
    }

    #[test]
    fn shuffle_with_zero_rolls_rotates_left() {
        // Every roll picks index 0, so each pass swaps the tail with the head.
        let mut rng = ScriptedRng::new([0]);
        let mut items = vec![1, 2, 3, 4];
        shuffle(&mut rng, &mut items);
        assert_eq!(items, vec![2, 3, 4, 1]);
    }

    #[test]
    fn shuffle_keeps_every_element() {
        let mut rng = PcgRng::seed_from_u64(99);
        let mut items: Vec<u32> = (0..20).collect();
        shuffle(&mut rng, &mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn scripted_rng_cycles() {
        let mut rng = ScriptedRng::new([5, 9]);
        assert_eq!(rng.next_u32(), 5);
        assert_eq!(rng.next_u32(), 9);
        assert_eq!(rng.next_u32(), 5);
        assert_eq!(ScriptedRng::default().next_u32(), 0);
    }
}
