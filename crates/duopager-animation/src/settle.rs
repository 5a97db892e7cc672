//! The settle animation: carrying a released drag to its resting offset.
//!
//! Duration is physics-derived rather than fixed: an energetic fling
//! settles fast, a stationary release settles in a calm, bounded time.
//! Progress is computed from absolute accumulated time so irregular tick
//! intervals (dropped frames) cannot distort the trajectory.

use crate::easing::{distance_influence_for_snap_duration, lerp, Easing};

/// Duration clamp for any settle, in milliseconds.
pub const MIN_SETTLE_DURATION_MS: f32 = 150.0;
pub const MAX_SETTLE_DURATION_MS: f32 = 600.0;

/// Tunables for settle animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleSpec {
    pub min_duration_ms: f32,
    pub max_duration_ms: f32,
    pub easing: Easing,
}

impl Default for SettleSpec {
    fn default() -> Self {
        Self {
            min_duration_ms: MIN_SETTLE_DURATION_MS,
            max_duration_ms: MAX_SETTLE_DURATION_MS,
            easing: Easing::LinearOutSlowIn,
        }
    }
}

/// One settle in flight.
#[derive(Debug, Clone, Copy)]
struct SettleAnimation {
    start_offset: f32,
    target_offset: f32,
    duration_ms: f32,
    elapsed_ms: f32,
    last_offset: f32,
}

/// Result of advancing the animator by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettleTick {
    /// No animation in flight.
    Idle,
    /// Still interpolating; `offset` is the new slot offset.
    Running { offset: f32 },
    /// Reached the target this tick; reported exactly once.
    Finished { offset: f32 },
}

/// Drives at most one settle animation at a time.
///
/// Starting a new settle replaces any active one; cancelling leaves the
/// last interpolated offset readable so a successor animation or a
/// resumed drag continues from exactly where the surface is.
#[derive(Debug, Clone)]
pub struct SettleAnimator {
    spec: SettleSpec,
    active: Option<SettleAnimation>,
}

impl Default for SettleAnimator {
    fn default() -> Self {
        Self::new(SettleSpec::default())
    }
}

impl SettleAnimator {
    pub fn new(spec: SettleSpec) -> Self {
        Self { spec, active: None }
    }

    /// Begins a settle from `from_offset` to `to_offset` on a surface
    /// `surface_width` wide, released at `velocity` px/sec. Replaces any
    /// animation already in flight.
    pub fn start(&mut self, surface_width: f32, from_offset: f32, to_offset: f32, velocity: f32) {
        let duration_ms = settle_duration_ms(
            surface_width,
            from_offset,
            to_offset,
            velocity,
            self.spec.min_duration_ms,
            self.spec.max_duration_ms,
        );
        self.active = Some(SettleAnimation {
            start_offset: from_offset,
            target_offset: to_offset,
            duration_ms,
            elapsed_ms: 0.0,
            last_offset: from_offset,
        });
    }

    /// Stops interpolation immediately and returns the last interpolated
    /// offset. No-op (returns `None`) when nothing is in flight, which
    /// includes an animation that already finished.
    pub fn cancel(&mut self) -> Option<f32> {
        self.active.take().map(|animation| animation.last_offset)
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Target of the animation in flight, if any.
    pub fn target_offset(&self) -> Option<f32> {
        self.active.map(|animation| animation.target_offset)
    }

    /// Duration of the animation in flight, if any.
    pub fn duration_ms(&self) -> Option<f32> {
        self.active.map(|animation| animation.duration_ms)
    }

    /// Advances by `elapsed_ms` of real time (negative input is treated
    /// as zero). Returns the interpolated offset, or `Finished` exactly
    /// once when the target is reached.
    pub fn tick(&mut self, elapsed_ms: f32) -> SettleTick {
        let Some(animation) = self.active.as_mut() else {
            return SettleTick::Idle;
        };

        animation.elapsed_ms += elapsed_ms.max(0.0);
        let fraction = (animation.elapsed_ms / animation.duration_ms).clamp(0.0, 1.0);
        let eased = self.spec.easing.transform(fraction);
        let offset = lerp(animation.start_offset, animation.target_offset, eased);
        animation.last_offset = offset;

        if animation.elapsed_ms >= animation.duration_ms {
            let offset = animation.target_offset;
            self.active = None;
            SettleTick::Finished { offset }
        } else {
            SettleTick::Running { offset }
        }
    }
}

/// Settle duration in milliseconds.
///
/// The distance ratio weights half the surface width through the snap
/// influence curve; a real release velocity divides into that influenced
/// distance, a dead release falls back to a short ratio-scaled time.
/// Always clamped to `[min_ms, max_ms]`.
pub fn settle_duration_ms(
    surface_width: f32,
    from_offset: f32,
    to_offset: f32,
    velocity: f32,
    min_ms: f32,
    max_ms: f32,
) -> f32 {
    let distance = (to_offset - from_offset).abs();
    let ratio = if surface_width > 0.0 {
        (distance / surface_width).clamp(0.0, 1.0)
    } else {
        1.0
    };
    let raw = if velocity.abs() > 0.0 {
        let half = surface_width / 2.0;
        let influenced = half + half * distance_influence_for_snap_duration(ratio);
        4.0 * 1_000.0 * (influenced / velocity.abs())
    } else {
        (ratio + 1.0) * 100.0
    };
    raw.clamp(min_ms, max_ms)
}
