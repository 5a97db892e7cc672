//! Outbound port contracts.
//!
//! The coordinator talks to its host exclusively through these traits,
//! held as `Rc<dyn _>`. All calls are synchronous on the UI thread.
//!
//! Port implementations must not call back into the coordinator from
//! within these methods. Re-entrant calls are a precondition violation
//! and trip a debug assertion in the coordinator rather than being
//! silently tolerated.

/// Opaque page identity assigned by the host.
pub type PageId = u64;

/// Horizontal travel direction of a page transition.
///
/// `Forward` is the direction revealed by dragging content to the left
/// (negative x offsets), `Backward` the opposite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Direction implied by a total drag offset. Negative offsets move
    /// the primary page out to the left, revealing the forward neighbor.
    pub fn from_offset(offset: f32) -> Self {
        if offset < 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    pub fn is_forward(self) -> bool {
        matches!(self, Direction::Forward)
    }

    /// Sign of offsets travelling in this direction.
    pub fn offset_sign(self) -> f32 {
        match self {
            Direction::Forward => -1.0,
            Direction::Backward => 1.0,
        }
    }
}

/// One of the two physical page containers owned by the host.
///
/// The logical primary/secondary roles move between the two physical
/// slots on commit; the host keeps two stable views and only re-binds
/// content when told to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotIndex {
    First,
    Second,
}

impl SlotIndex {
    pub fn other(self) -> Self {
        match self {
            SlotIndex::First => SlotIndex::Second,
            SlotIndex::Second => SlotIndex::First,
        }
    }
}

/// Supplies page adjacency. Consulted exactly once per gesture, at the
/// moment a drag arms past the touch slop.
pub trait PageResolver {
    /// The page adjacent to `current` in `direction`, or `None` at the
    /// end of the page sequence (the gesture then degenerates to a no-op).
    fn resolve_next_page(&self, current: PageId, direction: Direction) -> Option<PageId>;
}

/// Synchronization contract with an external tab indicator.
pub trait TabIndicator {
    /// Cross-fade progress in [0, 1] for the transition in flight.
    fn on_page_scrolled(&self, progress: f32);

    /// A transition committed; `page` is now the primary page.
    fn on_page_selected(&self, page: PageId, forward: bool);

    /// A programmatic selection targeted the already-current page.
    fn on_same_page_selected(&self);
}

/// Receives slot placement from the coordinator.
pub trait RenderPort {
    fn set_slot_offset(&self, slot: SlotIndex, offset_px: f32);

    fn set_slot_visible(&self, slot: SlotIndex, visible: bool);

    /// The logical swap after a committed transition. Content bindings
    /// move between the two containers; offsets have already been reset
    /// through `set_slot_offset` by the time this is called.
    fn swap_slots(&self);
}
