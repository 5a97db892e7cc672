//! Animation primitives for duopager
//!
//! Pure math, advanced by elapsed time: easing curves, interpolation
//! helpers, and the settle animator that carries a released drag to its
//! resting offset. Nothing here touches a clock or a scheduler; the
//! caller owns the tick source.

mod easing;
mod settle;

pub use easing::*;
pub use settle::*;
