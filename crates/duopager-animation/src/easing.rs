//! Easing curves and interpolation helpers.

use std::f32::consts::PI;

/// Linear interpolation between `start` and `stop`.
pub fn lerp(start: f32, stop: f32, fraction: f32) -> f32 {
    start + (stop - start) * fraction
}

/// Easing functions for settle animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Cubic ease-out.
    EaseOut,
    /// Fast out, slow in (material standard curve).
    FastOutSlowIn,
    /// Linear out, slow in (material deceleration curve).
    LinearOutSlowIn,
}

impl Easing {
    /// Applies the curve to a linear fraction in [0, 1].
    pub fn transform(self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction,
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Easing::LinearOutSlowIn => cubic_bezier(0.0, 0.0, 0.2, 1.0, fraction),
        }
    }
}

/// Cubic bezier easing evaluated at an x fraction.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f32, b: f32, c: f32, t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(a: f32, b: f32, c: f32, t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Newton-Raphson for the parametric t matching the x fraction,
    // falling back to bisection when the derivative degenerates.
    let mut t = fraction;
    let mut converged = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            converged = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !converged {
        let mut t0 = 0.0;
        let mut t1 = 1.0;
        t = fraction;
        for _ in 0..16 {
            let x = sample_curve(ax, bx, cx, t);
            let delta = x - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                t1 = t;
            } else {
                t0 = t;
            }
            t = 0.5 * (t0 + t1);
        }
    }

    sample_curve(ay, by, cy, t)
}

/// Weights a settle distance ratio into the duration formula.
///
/// Centered sine from the classic pager implementation: short settles
/// get proportionally less influenced distance than long ones. Input is
/// a distance ratio in [0, 1]; output is in roughly ±0.23 around zero
/// and strictly increasing.
pub fn distance_influence_for_snap_duration(ratio: f32) -> f32 {
    ((ratio - 0.5) * 0.3 * PI / 2.0).sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_pins_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseOut,
            Easing::FastOutSlowIn,
            Easing::LinearOutSlowIn,
        ] {
            assert_eq!(easing.transform(0.0), 0.0);
            assert_eq!(easing.transform(1.0), 1.0);
        }
    }

    #[test]
    fn curves_stay_in_unit_range_and_increase() {
        for easing in [Easing::EaseOut, Easing::FastOutSlowIn, Easing::LinearOutSlowIn] {
            let mut prev = 0.0;
            for i in 0..=100 {
                let value = easing.transform(i as f32 / 100.0);
                assert!((0.0..=1.0).contains(&value), "{easing:?} left unit range");
                assert!(value >= prev - 1e-4, "{easing:?} not monotonic at {i}");
                prev = value;
            }
        }
    }

    #[test]
    fn linear_is_identity() {
        assert_eq!(Easing::Linear.transform(0.37), 0.37);
    }

    #[test]
    fn lerp_hits_endpoints() {
        assert_eq!(lerp(-350.0, -1000.0, 0.0), -350.0);
        assert_eq!(lerp(-350.0, -1000.0, 1.0), -1000.0);
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
    }

    #[test]
    fn snap_influence_is_monotonic_and_bounded() {
        let mut prev = f32::MIN;
        for i in 0..=100 {
            let value = distance_influence_for_snap_duration(i as f32 / 100.0);
            assert!(value > prev);
            assert!(value.abs() < 0.25);
            prev = value;
        }
    }
}
