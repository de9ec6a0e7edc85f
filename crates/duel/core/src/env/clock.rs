/// Source of timestamps for combat log entries.
pub trait Clock {
    /// Milliseconds since an arbitrary epoch chosen by the implementation.
    fn now_millis(&self) -> u64;
}

/// Clock that always reports the same instant. Used for replays and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}
