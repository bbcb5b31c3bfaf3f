//! Fixed-timestep scheduling of game ticks
//!
//! Each frame, the wall-clock time since the previous frame is added to an
//! accumulator, which is then drained one tick interval at a time.  The
//! interval is re-read before every tick, so a tick that speeds the game up
//! takes effect for the remainder of the frame.
use std::time::Duration;

/// Something that advances in discrete ticks
pub(crate) trait Simulation {
    /// Time that must elapse before the next tick
    fn tick_interval(&self) -> Duration;

    /// Advance one tick.  Returns `true` if the round ended on this tick.
    fn step(&mut self) -> bool;
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Accumulator {
    pending: Duration,
    /// Cap the backlog at this many tick intervals; `None` means no cap
    max_catch_up_ticks: Option<u32>,
}

impl Accumulator {
    pub(crate) fn new(max_catch_up_ticks: Option<u32>) -> Accumulator {
        Accumulator {
            pending: Duration::ZERO,
            max_catch_up_ticks,
        }
    }

    /// Time accumulated but not yet spent on ticks
    pub(crate) fn pending(&self) -> Duration {
        self.pending
    }

    /// Discard any accumulated time
    pub(crate) fn reset(&mut self) {
        self.pending = Duration::ZERO;
    }

    /// Add `elapsed` to the accumulator and run as many ticks of `sim` as it
    /// covers, stopping early if a tick ends the round.  Returns the number
    /// of ticks run.
    pub(crate) fn advance<S: Simulation>(&mut self, elapsed: Duration, sim: &mut S) -> u32 {
        self.pending = self.pending.saturating_add(elapsed);
        if let Some(max) = self.max_catch_up_ticks {
            let cap = sim.tick_interval().saturating_mul(max);
            if self.pending > cap {
                log::debug!(
                    "Frame backlog of {:?} exceeds {max} ticks; discarding {:?}",
                    self.pending,
                    self.pending.saturating_sub(cap),
                );
                self.pending = cap;
            }
        }
        let mut ticks = 0;
        loop {
            let interval = sim.tick_interval();
            if interval.is_zero() || self.pending < interval {
                break;
            }
            self.pending -= interval;
            ticks += 1;
            if sim.step() {
                break;
            }
        }
        ticks
    }
}
