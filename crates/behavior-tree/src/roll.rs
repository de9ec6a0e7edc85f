//! Randomness hook for stochastic nodes.

/// Source of uniform rolls used by [`crate::Chance`] and
/// [`crate::WeightedSelector`].
///
/// Contexts implement this by forwarding to whatever seedable generator they
/// carry, which keeps tree evaluation reproducible under a fixed seed.
pub trait Roll {
    /// Returns a value uniformly distributed in `0..bound`.
    ///
    /// Implementations must return 0 when `bound` is 0.
    fn roll(&mut self, bound: u32) -> u32;
}
