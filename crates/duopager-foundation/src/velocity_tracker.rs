//! Windowed velocity estimation from pointer samples.
//!
//! Uses the impulse strategy: velocity is recovered from the kinetic
//! energy the gesture imparted over a short window of recent samples,
//! rather than from the last delta alone. A brief hesitation before
//! release therefore pulls the estimate down instead of reporting the
//! peak speed from earlier in the gesture, while single-sample jitter
//! stays damped.

/// Ring buffer capacity per axis.
const HISTORY_SIZE: usize = 20;

/// Samples older than this (relative to the newest) are outside the
/// estimation window.
const HORIZON_MS: i64 = 100;

/// A gap longer than this between consecutive samples means the pointer
/// stopped; the window is cut at the gap.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy)]
struct Sample {
    time_ms: i64,
    position: f32,
}

/// Single-axis velocity tracker over a fixed ring buffer of samples.
#[derive(Clone, Default)]
pub struct AxisVelocityTracker {
    samples: [Option<Sample>; HISTORY_SIZE],
    index: usize,
}

impl AxisVelocityTracker {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            index: 0,
        }
    }

    /// Records a position sample. Callers are responsible for feeding
    /// strictly increasing timestamps; see [`VelocityEstimator`].
    pub fn add_sample(&mut self, time_ms: i64, position: f32) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(Sample { time_ms, position });
    }

    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.index = 0;
    }

    /// Velocity in units/second over the recent sample window.
    ///
    /// Zero if fewer than two samples fall inside the window.
    pub fn velocity(&self) -> f32 {
        // Walk backwards from the newest sample, collecting everything
        // inside the horizon until a stop-length gap appears.
        let mut positions = [0.0f32; HISTORY_SIZE];
        let mut times = [0.0f32; HISTORY_SIZE];
        let mut count = 0;

        let newest = match self.samples[self.index] {
            Some(sample) => sample,
            None => return 0.0,
        };

        let mut cursor = self.index;
        let mut previous = newest;

        while count < HISTORY_SIZE {
            let Some(sample) = self.samples[cursor] else {
                break;
            };
            let age = newest.time_ms - sample.time_ms;
            let gap = (previous.time_ms - sample.time_ms).abs();
            previous = sample;

            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }

            positions[count] = sample.position;
            times[count] = -(age as f32);
            count += 1;

            cursor = if cursor == 0 {
                HISTORY_SIZE - 1
            } else {
                cursor - 1
            };
        }

        impulse_velocity(&positions[..count], &times[..count]) * 1000.0
    }
}

/// Impulse-strategy velocity in units/ms.
///
/// `positions`/`times` are ordered newest-first; times are non-positive
/// offsets from the newest sample.
fn impulse_velocity(positions: &[f32], times: &[f32]) -> f32 {
    let count = positions.len();
    if count < 2 {
        return 0.0;
    }
    if count == 2 {
        if times[0] == times[1] {
            return 0.0;
        }
        return (positions[0] - positions[1]) / (times[0] - times[1]);
    }

    let mut work = 0.0f32;
    for i in (1..count).rev() {
        if times[i] == times[i - 1] {
            continue;
        }
        let v_prev = kinetic_energy_to_velocity(work);
        let v_curr = (positions[i - 1] - positions[i]) / (times[i - 1] - times[i]);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == count - 1 {
            work *= 0.5;
        }
    }
    kinetic_energy_to_velocity(work)
}

/// E = ½mv² with m = 1, preserving sign.
#[inline]
fn kinetic_energy_to_velocity(work: f32) -> f32 {
    work.signum() * (2.0 * work.abs()).sqrt()
}

/// Two-axis velocity estimator fed by the drag tracker.
///
/// Rejects samples whose timestamp does not strictly increase; the
/// underlying window math assumes ordered input, and out-of-order events
/// do occur when a host replays batched history.
#[derive(Clone, Default)]
pub struct VelocityEstimator {
    x: AxisVelocityTracker,
    y: AxisVelocityTracker,
    last_time_ms: Option<i64>,
}

impl VelocityEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a sample; silently dropped unless `time_ms` is strictly
    /// greater than the previous sample's timestamp.
    pub fn add_sample(&mut self, time_ms: i64, x: f32, y: f32) {
        if let Some(last) = self.last_time_ms {
            if time_ms <= last {
                log::trace!("dropping non-monotonic velocity sample at {time_ms}ms (last {last}ms)");
                return;
            }
        }
        self.last_time_ms = Some(time_ms);
        self.x.add_sample(time_ms, x);
        self.y.add_sample(time_ms, y);
    }

    pub fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
        self.last_time_ms = None;
    }

    /// `(vx, vy)` in px/sec, each clamped to `±max_magnitude`.
    ///
    /// Zero on either axis if fewer than two samples exist there; zero
    /// overall if `max_magnitude` is not a positive finite number.
    pub fn estimate(&self, max_magnitude: f32) -> (f32, f32) {
        if !max_magnitude.is_finite() || max_magnitude <= 0.0 {
            return (0.0, 0.0);
        }
        (
            clamp_magnitude(self.x.velocity(), max_magnitude),
            clamp_magnitude(self.y.velocity(), max_magnitude),
        )
    }
}

fn clamp_magnitude(velocity: f32, max: f32) -> f32 {
    if velocity.is_nan() {
        return 0.0;
    }
    velocity.clamp(-max, max)
}
