//! Coordinator tunables.

use duopager_animation::SettleSpec;
use duopager_foundation::{COMMIT_VELOCITY_THRESHOLD, MAX_FLING_VELOCITY, TOUCH_SLOP};

/// Tunables for the transition coordinator.
///
/// Defaults come from the shared gesture constants; hosts on unusual
/// densities can scale the pixel-valued fields before construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagerConfig {
    pub touch_slop: f32,
    pub max_fling_velocity: f32,
    pub commit_velocity_threshold: f32,
    pub settle: SettleSpec,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            touch_slop: TOUCH_SLOP,
            max_fling_velocity: MAX_FLING_VELOCITY,
            commit_velocity_threshold: COMMIT_VELOCITY_THRESHOLD,
            settle: SettleSpec::default(),
        }
    }
}
