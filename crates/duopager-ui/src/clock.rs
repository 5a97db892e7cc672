//! Wall-clock to elapsed-milliseconds bridging.
//!
//! The coordinator is advanced by `tick(elapsed_ms)` and never reads a
//! clock itself. Hosts with a frame callback already know their frame
//! delta; hosts without one can lean on this helper, which measures the
//! time between successive calls. Uses `web-time` so the same code runs
//! on native and WASM targets.

use web_time::Instant;

/// Measures elapsed wall time between successive `elapsed_ms` calls.
#[derive(Debug, Default)]
pub struct TickClock {
    last: Option<Instant>,
}

impl TickClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets the previous sample; the next `elapsed_ms` returns 0.
    /// Call after a pause (window hidden, animation idle) so the first
    /// frame back does not swallow the whole gap at once.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Milliseconds since the previous call (0 on the first call after
    /// construction or `reset`).
    pub fn elapsed_ms(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = self
            .last
            .map(|last| now.duration_since(last).as_secs_f32() * 1_000.0)
            .unwrap_or(0.0);
        self.last = Some(now);
        elapsed
    }
}
