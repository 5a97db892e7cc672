//! Pure data and port contracts for duopager
//!
//! This crate contains the geometry and pointer-event primitives consumed
//! by the gesture and animation crates, plus the outbound port traits the
//! coordinator uses to talk to its host (page resolver, tab indicator,
//! render surface). It holds no behavior of its own.

mod geometry;
mod pointer;
mod ports;

pub use geometry::*;
pub use pointer::*;
pub use ports::*;
