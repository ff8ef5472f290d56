//! Gravity timing from a free-running hardware counter.
//!
//! The engine never reads calendar time. Its only clock is a counter the
//! platform exposes (a 16-bit timer register on the funkit handheld)
//! compared against a fixed modulus. The resulting cadence is a coarse
//! software timer, deliberately so: it determines the perceived game
//! speed and must be reproduced exactly.

/// Free-running counter capability.
///
/// The counter counts up monotonically between [`reset`](Self::reset)
/// calls; wrapping is fine as long as the wrap period is much longer than
/// one gravity period.
pub trait TickCounter {
    /// Current counter value.
    fn count(&self) -> u32;

    /// Reset the counter to zero.
    fn reset(&mut self);
}

/// Single-shot half-period gravity schedule.
///
/// A tick is due once per `period`: when the counter's phase within the
/// period passes the half-period mark while the timer is armed. The timer
/// re-arms whenever the phase is back in the lower half. Starting
/// disarmed means the first tick fires one full period after the counter
/// last passed zero.
#[derive(Clone, Debug)]
pub struct GravityTimer {
    period: u32,
    armed: bool,
}

impl GravityTimer {
    /// A timer firing once per `period` counter ticks. `period` must be
    /// at least 2.
    pub const fn new(period: u32) -> Self {
        Self {
            period,
            armed: false,
        }
    }

    /// Whether a gravity tick is due at counter value `count`.
    ///
    /// Returns `true` at most once per half-period; the caller performs
    /// the drop.
    pub fn due(&mut self, count: u32) -> bool {
        let phase = count % self.period;
        if phase > self.period / 2 && self.armed {
            self.armed = false;
            return true;
        }
        if phase < self.period / 2 {
            self.armed = true;
        }
        false
    }
}
