//! Two-slot page transition coordinator
//!
//! Wires the gesture and animation crates into the single surface a host
//! needs: forward pointer events, drive `tick`, and implement the three
//! ports (page resolver, tab indicator, render). The coordinator owns
//! the pair of page slots and keeps drag position, visual translation,
//! and tab-indicator progress consistent through arbitrary interruption.

mod clock;
mod config;
mod coordinator;
mod slots;

pub use clock::*;
pub use config::*;
pub use coordinator::*;
pub use slots::*;

pub use duopager_animation::{Easing, SettleSpec, MAX_SETTLE_DURATION_MS, MIN_SETTLE_DURATION_MS};
pub use duopager_core::{
    Direction, PageId, PageResolver, Point, PointerEvent, PointerEventKind, PointerId, RenderPort,
    SlotIndex, TabIndicator,
};
