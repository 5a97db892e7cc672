//! The two page slots and their render-port mirroring.
//!
//! Exactly two slots exist for the life of the controller, mutated in
//! place. One is logically primary (offset 0 = fully shown), the other
//! secondary (parked at ± surface width). The logical roles move between
//! the two physical containers on commit; the host only ever repositions
//! its two views and re-binds content when `swap_slots` tells it to.
//!
//! Every mutation here is pushed to the [`RenderPort`] in the same call,
//! so the port's view of the surface is never stale.

use std::rc::Rc;

use duopager_core::{Direction, PageId, RenderPort, SlotIndex};

#[derive(Debug, Clone, Copy)]
struct PageSlot {
    page: PageId,
    offset: f32,
    visible: bool,
}

pub struct PageSlotPair {
    slots: [PageSlot; 2],
    primary: SlotIndex,
    render: Rc<dyn RenderPort>,
}

fn index(slot: SlotIndex) -> usize {
    match slot {
        SlotIndex::First => 0,
        SlotIndex::Second => 1,
    }
}

impl PageSlotPair {
    /// Both slots start bound to `initial_page`; the secondary content is
    /// never shown until a transition stages a real incoming page.
    pub fn new(initial_page: PageId, render: Rc<dyn RenderPort>) -> Self {
        let slot = PageSlot {
            page: initial_page,
            offset: 0.0,
            visible: false,
        };
        Self {
            slots: [slot; 2],
            primary: SlotIndex::First,
            render,
        }
    }

    pub fn primary_page(&self) -> PageId {
        self.slots[index(self.primary)].page
    }

    pub fn secondary_page(&self) -> PageId {
        self.slots[index(self.primary.other())].page
    }

    pub fn primary_offset(&self) -> f32 {
        self.slots[index(self.primary)].offset
    }

    /// Pushes the resting state to the render port: primary shown at 0,
    /// secondary parked past the forward edge, hidden.
    pub fn sync_rest_state(&mut self, surface_width: f32) {
        let primary = self.primary;
        let secondary = primary.other();
        self.set_offset(primary, 0.0);
        self.set_offset(secondary, surface_width);
        self.set_visible(primary, true);
        self.set_visible(secondary, false);
    }

    /// Binds the incoming page to the secondary slot and reveals it on
    /// the side the transition enters from.
    pub fn stage_incoming(&mut self, page: PageId, direction: Direction, surface_width: f32) {
        let secondary = self.primary.other();
        self.slots[index(secondary)].page = page;
        self.set_offset(secondary, incoming_offset(0.0, direction, surface_width));
        self.set_visible(secondary, true);
    }

    /// Moves both slots to track a drag/settle offset of the primary.
    pub fn apply_offset(&mut self, offset: f32, direction: Direction, surface_width: f32) {
        let primary = self.primary;
        let secondary = primary.other();
        self.set_offset(primary, offset);
        self.set_offset(secondary, incoming_offset(offset, direction, surface_width));
    }

    /// Completes a committed transition: the secondary slot (now at
    /// offset 0) becomes primary, the outgoing page is hidden and parked
    /// where it landed.
    pub fn finish_commit(&mut self, direction: Direction, surface_width: f32) {
        let outgoing = self.primary;
        let incoming = outgoing.other();
        self.set_offset(incoming, 0.0);
        self.set_offset(outgoing, direction.offset_sign() * surface_width);
        self.set_visible(outgoing, false);
        self.primary = incoming;
        self.render.swap_slots();
    }

    /// Completes a cancelled transition: primary back at 0, secondary
    /// parked and hidden. Roles do not move.
    pub fn finish_cancel(&mut self, direction: Direction, surface_width: f32) {
        let primary = self.primary;
        let secondary = primary.other();
        self.set_offset(primary, 0.0);
        self.set_offset(secondary, incoming_offset(0.0, direction, surface_width));
        self.set_visible(secondary, false);
    }

    fn set_offset(&mut self, slot: SlotIndex, offset: f32) {
        self.slots[index(slot)].offset = offset;
        self.render.set_slot_offset(slot, offset);
    }

    fn set_visible(&mut self, slot: SlotIndex, visible: bool) {
        self.slots[index(slot)].visible = visible;
        self.render.set_slot_visible(slot, visible);
    }
}

/// Offset of the incoming slot given the primary's offset: one surface
/// width away on the side the transition enters from, sliding in lock
/// step with the primary.
fn incoming_offset(primary_offset: f32, direction: Direction, surface_width: f32) -> f32 {
    primary_offset - direction.offset_sign() * surface_width
}
