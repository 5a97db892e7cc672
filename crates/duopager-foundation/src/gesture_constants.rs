//! Shared gesture constants for consistent touch handling.
//!
//! Values are in logical pixels (and px/sec for velocities). For very
//! high-density touch screens, consider scaling by the device's DPI
//! factor before constructing the tracker.

/// Touch slop in logical pixels.
///
/// A pointer must travel at least this far from its press position,
/// predominantly horizontally, before a page drag arms. Below it the
/// gesture stays eligible for a tap. 8.0 matches common platform
/// conventions (Android's ViewConfiguration touch slop is ~8dp).
pub const TOUCH_SLOP: f32 = 8.0;

/// Maximum fling velocity in logical pixels per second.
///
/// Velocity estimates are clamped here before any commit decision, so a
/// single noisy sample cannot produce an absurd flick.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Horizontal velocity (px/sec) above which a release counts as a flick.
///
/// A flick decides the transition by its own sign regardless of how far
/// the drag travelled.
pub const COMMIT_VELOCITY_THRESHOLD: f32 = 3_500.0;

/// A non-flick release commits once the drag has covered more than
/// `surface_width / COMMIT_DISTANCE_DIVISOR`.
pub const COMMIT_DISTANCE_DIVISOR: f32 = 3.0;
