//! The transition coordinator.
//!
//! Single entry point for the host surface: pointer events in,
//! `tick(elapsed_ms)` to advance an active settle, and the three ports
//! out. Everything runs on one UI-bound thread; the ports are invoked
//! synchronously and must not call back into the coordinator (guarded by
//! a debug assertion).

use std::cell::Cell;
use std::rc::Rc;

use duopager_animation::{SettleAnimator, SettleTick};
use duopager_core::{
    Direction, PageId, PageResolver, PointerEvent, PointerEventKind, RenderPort, TabIndicator,
};
use duopager_foundation::{should_commit, DragTracker, DragUpdate};

use crate::config::PagerConfig;
use crate::slots::PageSlotPair;

/// The transition staged by the current drag or settle: which page is
/// coming in, and from which side. Lives from arm to swap/snap-back.
#[derive(Clone, Copy, Debug)]
struct PendingTransition {
    incoming: PageId,
    direction: Direction,
}

/// Orchestrates the drag tracker, settle animator, and page slots.
pub struct TransitionCoordinator {
    config: PagerConfig,
    surface_width: f32,
    tracker: DragTracker,
    animator: SettleAnimator,
    slots: PageSlotPair,
    resolver: Rc<dyn PageResolver>,
    indicator: Rc<dyn TabIndicator>,
    pending: Option<PendingTransition>,
    entered: ReentrancyFlag,
}

impl TransitionCoordinator {
    pub fn new(
        initial_page: PageId,
        surface_width: f32,
        resolver: Rc<dyn PageResolver>,
        indicator: Rc<dyn TabIndicator>,
        render: Rc<dyn RenderPort>,
        config: PagerConfig,
    ) -> Self {
        let mut slots = PageSlotPair::new(initial_page, render);
        slots.sync_rest_state(surface_width);
        Self {
            tracker: DragTracker::with_tuning(
                surface_width,
                config.touch_slop,
                config.max_fling_velocity,
            ),
            animator: SettleAnimator::new(config.settle),
            slots,
            resolver,
            indicator,
            pending: None,
            config,
            surface_width,
            entered: ReentrancyFlag::default(),
        }
    }

    /// The page currently shown (or being left, while a transition is in
    /// flight).
    pub fn current_page(&self) -> PageId {
        self.slots.primary_page()
    }

    /// True while a drag owns the surface or a settle is animating.
    pub fn is_transition_in_progress(&self) -> bool {
        self.tracker.is_dragging() || self.animator.is_running()
    }

    /// The host reports layout size changes here.
    pub fn set_surface_width(&mut self, surface_width: f32) {
        let _guard = self.enter();
        self.surface_width = surface_width;
        self.tracker.set_extent(surface_width);
        if self.pending.is_none() && !self.tracker.is_active() {
            self.slots.sync_rest_state(surface_width);
        }
    }

    /// Feeds one pointer event. Returns `true` when the coordinator owns
    /// the gesture (an armed-and-confirmed drag or a settle is in
    /// progress) and the host should not also interpret it as a scroll.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        let _guard = self.enter();
        match event.kind {
            PointerEventKind::Down => self.on_down(event),
            PointerEventKind::Move => self.on_move(event),
            PointerEventKind::Up => self.on_up_or_cancel(event, true),
            PointerEventKind::Cancel => self.on_up_or_cancel(event, false),
        }
    }

    /// Advances an active settle by `elapsed_ms` of real time. Safe to
    /// call every frame; a tick with no animation in flight is free.
    pub fn tick(&mut self, elapsed_ms: f32) {
        let _guard = self.enter();
        match self.animator.tick(elapsed_ms) {
            SettleTick::Idle => {}
            SettleTick::Running { offset } => {
                if let Some(pending) = self.pending {
                    self.slots
                        .apply_offset(offset, pending.direction, self.surface_width);
                    self.emit_progress();
                }
            }
            SettleTick::Finished { offset } => self.finish_transition(offset),
        }
    }

    /// Selects a page directly (tab strip click). Targeting the current
    /// page only notifies `on_same_page_selected`. The travel direction
    /// is recovered by probing the resolver; a page the resolver does
    /// not report as adjacent is applied instantly even when `animated`.
    pub fn programmatic_select(&mut self, page: PageId, animated: bool) {
        let _guard = self.enter();
        let current = self.slots.primary_page();
        if page == current {
            self.indicator.on_same_page_selected();
            return;
        }

        self.abort_in_flight();

        let direction = [Direction::Forward, Direction::Backward]
            .into_iter()
            .find(|&d| self.resolver.resolve_next_page(current, d) == Some(page));

        match direction {
            Some(direction) if animated => {
                log::trace!("programmatic settle to page {page} ({direction:?})");
                self.pending = Some(PendingTransition {
                    incoming: page,
                    direction,
                });
                self.slots
                    .stage_incoming(page, direction, self.surface_width);
                self.animator.start(
                    self.surface_width,
                    0.0,
                    direction.offset_sign() * self.surface_width,
                    0.0,
                );
            }
            direction => {
                let direction = direction.unwrap_or(Direction::Forward);
                log::trace!("instant select of page {page} ({direction:?})");
                self.slots
                    .stage_incoming(page, direction, self.surface_width);
                self.slots.finish_commit(direction, self.surface_width);
                self.indicator.on_page_selected(page, direction.is_forward());
            }
        }
    }

    fn on_down(&mut self, event: &PointerEvent) -> bool {
        if self.animator.is_running() {
            // Catching the page mid-settle: the drag continues the same
            // transition from the animation's last offset.
            if let (Some(pending), Some(offset)) = (self.pending, self.animator.cancel()) {
                log::trace!("settle interrupted at {offset}px; resuming drag");
                self.tracker.resume(event, offset, pending.direction);
                self.slots
                    .apply_offset(offset, pending.direction, self.surface_width);
                return true;
            }
        }
        self.tracker.on_pointer_down(event);
        self.is_transition_in_progress()
    }

    fn on_move(&mut self, event: &PointerEvent) -> bool {
        let resolver = self.resolver.clone();
        let current = self.slots.primary_page();
        let mut staged = None;
        let update = self.tracker.on_pointer_move(event, |direction| {
            match resolver.resolve_next_page(current, direction) {
                Some(page) => {
                    staged = Some(page);
                    true
                }
                None => false,
            }
        });

        match update {
            DragUpdate::Began { direction } => {
                let Some(incoming) = staged else {
                    return false;
                };
                self.pending = Some(PendingTransition { incoming, direction });
                self.slots
                    .stage_incoming(incoming, direction, self.surface_width);
                self.emit_progress();
                true
            }
            DragUpdate::Moved { offset } => {
                let Some(pending) = self.pending else {
                    return false;
                };
                self.slots
                    .apply_offset(offset, pending.direction, self.surface_width);
                self.emit_progress();
                true
            }
            _ => self.is_transition_in_progress(),
        }
    }

    fn on_up_or_cancel(&mut self, event: &PointerEvent, is_up: bool) -> bool {
        let update = if is_up {
            self.tracker.on_pointer_up(event)
        } else {
            self.tracker.on_pointer_cancel(event)
        };

        match update {
            DragUpdate::Released {
                direction,
                offset,
                velocity_x,
            } => {
                let commit = should_commit(
                    offset,
                    self.surface_width,
                    velocity_x,
                    direction,
                    self.config.commit_velocity_threshold,
                );
                let target = if commit {
                    direction.offset_sign() * self.surface_width
                } else {
                    0.0
                };
                log::trace!(
                    "released at {offset}px, {velocity_x}px/s: settling to {target}px"
                );
                self.animator
                    .start(self.surface_width, offset, target, velocity_x);
                true
            }
            // A plain tap is the host's to interpret.
            DragUpdate::Tap => false,
            _ => self.is_transition_in_progress(),
        }
    }

    fn finish_transition(&mut self, final_offset: f32) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        self.slots
            .apply_offset(final_offset, pending.direction, self.surface_width);
        self.emit_progress();
        if final_offset == 0.0 {
            self.slots
                .finish_cancel(pending.direction, self.surface_width);
        } else {
            self.slots
                .finish_commit(pending.direction, self.surface_width);
            self.indicator
                .on_page_selected(pending.incoming, pending.direction.is_forward());
        }
    }

    /// Synchronous, total cancellation of whatever is in flight; the
    /// slots are back in a renderable rest state when this returns.
    fn abort_in_flight(&mut self) {
        self.animator.cancel();
        self.tracker.reset();
        if let Some(pending) = self.pending.take() {
            self.slots
                .finish_cancel(pending.direction, self.surface_width);
        }
    }

    fn emit_progress(&self) {
        let progress = if self.surface_width > 0.0 {
            (self.slots.primary_offset().abs() / self.surface_width).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.indicator.on_page_scrolled(progress);
    }

    fn enter(&self) -> EntryGuard {
        self.entered.enter()
    }
}

/// Debug-build detector for port implementations that call back into
/// the coordinator mid-dispatch.
#[derive(Clone, Default)]
struct ReentrancyFlag(Rc<Cell<bool>>);

impl ReentrancyFlag {
    fn enter(&self) -> EntryGuard {
        debug_assert!(
            !self.0.get(),
            "re-entrant call into TransitionCoordinator (a port implementation \
             called back during dispatch)"
        );
        self.0.set(true);
        EntryGuard(self.0.clone())
    }
}

struct EntryGuard(Rc<Cell<bool>>);

impl Drop for EntryGuard {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
