//! Scheduling port that drives a session frame by frame.
//!
//! A browser host ticks once per animation frame; tests and benchmarks use
//! [`FixedTicks`] to run synchronously without waiting on a clock.

/// Something that decides when the next frame happens.
pub trait TickSource {
    /// Block or poll until the next frame is due. `false` ends the run.
    fn next_tick(&mut self) -> bool;
}

/// Yields a fixed number of ticks immediately, then stops.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FixedTicks {
    remaining: usize,
}

impl FixedTicks {
    pub fn new(count: usize) -> Self {
        FixedTicks { remaining: count }
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl TickSource for FixedTicks {
    fn next_tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}
