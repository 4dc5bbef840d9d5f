//! Fixed-interval tick gate.
//!
//! The render loop runs at display rate; game state advances only when the
//! gate fires. The last-fire timestamp lives on the instance and the clock
//! is passed in by the caller.

#[derive(Debug, Clone)]
pub struct TickGate {
    interval_secs: f64,
    last_tick: f64,
}

impl TickGate {
    pub fn new(interval_secs: f64) -> Self {
        Self {
            interval_secs,
            last_tick: 0.0,
        }
    }

    /// Decide whether a game tick may advance at time `now` (seconds on a
    /// monotonic clock). Returns true at most once per elapsed interval.
    pub fn should_tick(&mut self, now: f64) -> bool {
        if now - self.last_tick >= self.interval_secs {
            self.last_tick = now;
            return true;
        }
        false
    }
}
