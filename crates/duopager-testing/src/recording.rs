//! Recording port implementations.
//!
//! Each port records every call it receives; tests share the recorder
//! via `Rc` and assert on the log afterwards.

use std::cell::RefCell;
use std::rc::Rc;

use duopager_core::{Direction, PageId, PageResolver, RenderPort, SlotIndex, TabIndicator};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderCall {
    Offset(SlotIndex, f32),
    Visible(SlotIndex, bool),
    Swap,
}

#[derive(Default)]
pub struct RecordingRenderer {
    calls: RefCell<Vec<RenderCall>>,
}

impl RecordingRenderer {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.borrow().clone()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn swap_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, RenderCall::Swap))
            .count()
    }

    /// Offsets pushed for `slot`, in order.
    pub fn offsets(&self, slot: SlotIndex) -> Vec<f32> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                RenderCall::Offset(s, offset) if *s == slot => Some(*offset),
                _ => None,
            })
            .collect()
    }

    pub fn last_offset(&self, slot: SlotIndex) -> Option<f32> {
        self.offsets(slot).last().copied()
    }

    pub fn last_visibility(&self, slot: SlotIndex) -> Option<bool> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                RenderCall::Visible(s, visible) if *s == slot => Some(*visible),
                _ => None,
            })
            .last()
    }
}

impl RenderPort for RecordingRenderer {
    fn set_slot_offset(&self, slot: SlotIndex, offset_px: f32) {
        self.calls.borrow_mut().push(RenderCall::Offset(slot, offset_px));
    }

    fn set_slot_visible(&self, slot: SlotIndex, visible: bool) {
        self.calls.borrow_mut().push(RenderCall::Visible(slot, visible));
    }

    fn swap_slots(&self) {
        self.calls.borrow_mut().push(RenderCall::Swap);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IndicatorCall {
    Scrolled(f32),
    Selected(PageId, bool),
    SamePage,
}

#[derive(Default)]
pub struct RecordingIndicator {
    calls: RefCell<Vec<IndicatorCall>>,
}

impl RecordingIndicator {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<IndicatorCall> {
        self.calls.borrow().clone()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Progress values received, in order.
    pub fn progress_values(&self) -> Vec<f32> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                IndicatorCall::Scrolled(progress) => Some(*progress),
                _ => None,
            })
            .collect()
    }

    pub fn selections(&self) -> Vec<(PageId, bool)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                IndicatorCall::Selected(page, forward) => Some((*page, *forward)),
                _ => None,
            })
            .collect()
    }

    pub fn same_page_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, IndicatorCall::SamePage))
            .count()
    }
}

impl TabIndicator for RecordingIndicator {
    fn on_page_scrolled(&self, progress: f32) {
        self.calls.borrow_mut().push(IndicatorCall::Scrolled(progress));
    }

    fn on_page_selected(&self, page: PageId, forward: bool) {
        self.calls
            .borrow_mut()
            .push(IndicatorCall::Selected(page, forward));
    }

    fn on_same_page_selected(&self) {
        self.calls.borrow_mut().push(IndicatorCall::SamePage);
    }
}

/// Resolver over a fixed page order: forward walks toward the end of the
/// list, backward toward the start, ends resolve to `None`.
pub struct StaticResolver {
    pages: Vec<PageId>,
}

impl StaticResolver {
    pub fn new(pages: Vec<PageId>) -> Rc<Self> {
        Rc::new(Self { pages })
    }
}

impl PageResolver for StaticResolver {
    fn resolve_next_page(&self, current: PageId, direction: Direction) -> Option<PageId> {
        let position = self.pages.iter().position(|&page| page == current)?;
        match direction {
            Direction::Forward => self.pages.get(position + 1).copied(),
            Direction::Backward => position.checked_sub(1).and_then(|p| self.pages.get(p)).copied(),
        }
    }
}
