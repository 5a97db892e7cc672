//! Horizontal drag state machine.
//!
//! Owns the raw pointer-event lifecycle for a page drag: `Idle → Armed →
//! Dragging`, ending in a release hand-off, a tap, or a reset. Arming
//! requires beating the touch slop with a predominantly horizontal move;
//! the caller gates the transition (that is where page adjacency gets
//! checked) and a refused gate reverts the session to idle so a dead-end
//! swipe produces no movement at all.
//!
//! The tracker is single-pointer: the session binds to the first pointer
//! id it sees and events for any other id are ignored.

use duopager_core::{Direction, PointerEvent, Point};

use crate::gesture_constants::{COMMIT_DISTANCE_DIVISOR, MAX_FLING_VELOCITY, TOUCH_SLOP};
use crate::velocity_tracker::VelocityEstimator;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DragPhase {
    /// Pointer is down, slop not yet beaten. Start position is held for
    /// slop and axis-lock checks.
    Armed,
    /// Slop beaten and the gate accepted; offsets track the pointer.
    Dragging,
}

struct DragSession {
    pointer_id: u64,
    start: Point,
    phase: DragPhase,
    /// Set at the Armed → Dragging transition; fixed for the session.
    direction: Direction,
    /// Offset already on the surface when the session began (non-zero
    /// only when resuming over an interrupted settle).
    base_offset: f32,
    offset: f32,
}

/// What a pointer event did to the drag state.
///
/// `Released` doubles as the hand-off: the session is gone by the time
/// the caller sees it, and `offset`/`velocity_x` are the inputs to the
/// commit decision and the settle animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragUpdate {
    None,
    /// Slop beaten, gate accepted; the incoming page should be staged.
    Began { direction: Direction },
    /// Pointer moved while dragging; `offset` is the clamped total.
    Moved { offset: f32 },
    /// Released from Armed without ever beating slop.
    Tap,
    /// Released (or cancelled) from Dragging.
    Released {
        direction: Direction,
        offset: f32,
        velocity_x: f32,
    },
}

/// Pointer-event state machine for a single horizontal page drag.
pub struct DragTracker {
    touch_slop: f32,
    max_fling_velocity: f32,
    /// Surface width; drag offsets clamp to the session direction's side
    /// of `[-extent, extent]`.
    extent: f32,
    session: Option<DragSession>,
    velocity: VelocityEstimator,
}

impl DragTracker {
    pub fn new(extent: f32) -> Self {
        Self::with_tuning(extent, TOUCH_SLOP, MAX_FLING_VELOCITY)
    }

    pub fn with_tuning(extent: f32, touch_slop: f32, max_fling_velocity: f32) -> Self {
        Self {
            touch_slop,
            max_fling_velocity,
            extent,
            session: None,
            velocity: VelocityEstimator::new(),
        }
    }

    /// Updates the clamp bound when the host surface is resized.
    pub fn set_extent(&mut self, extent: f32) {
        self.extent = extent;
    }

    /// True from pointer-down until release/cancel/reset.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// True once slop has been beaten and the gate accepted.
    pub fn is_dragging(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.phase == DragPhase::Dragging)
    }

    /// Drops any session without reporting anything.
    pub fn reset(&mut self) {
        self.session = None;
        self.velocity.reset();
    }

    pub fn on_pointer_down(&mut self, event: &PointerEvent) -> DragUpdate {
        if let Some(session) = &self.session {
            log::trace!(
                "ignoring pointer {} down; session already tracks pointer {}",
                event.id,
                session.pointer_id
            );
            return DragUpdate::None;
        }
        self.velocity.reset();
        self.velocity
            .add_sample(event.time_ms, event.position.x, event.position.y);
        self.session = Some(DragSession {
            pointer_id: event.id,
            start: event.position,
            phase: DragPhase::Armed,
            direction: Direction::Forward,
            base_offset: 0.0,
            offset: 0.0,
        });
        DragUpdate::None
    }

    /// Begins a session already in `Dragging`, continuing from an
    /// interrupted settle: `base_offset` is the animation's last offset
    /// and `direction` the transition already in flight. Slop is skipped;
    /// the pointer owns the surface immediately.
    pub fn resume(&mut self, event: &PointerEvent, base_offset: f32, direction: Direction) {
        debug_assert!(self.session.is_none(), "resume requires an idle tracker");
        self.velocity.reset();
        self.velocity
            .add_sample(event.time_ms, event.position.x, event.position.y);
        self.session = Some(DragSession {
            pointer_id: event.id,
            start: event.position,
            phase: DragPhase::Dragging,
            direction,
            base_offset,
            offset: base_offset,
        });
    }

    /// Feeds a move event. `allow` is consulted exactly once per session,
    /// at the Armed → Dragging transition; returning `false` kills the
    /// session (dead-end swipe).
    pub fn on_pointer_move(
        &mut self,
        event: &PointerEvent,
        allow: impl FnOnce(Direction) -> bool,
    ) -> DragUpdate {
        let Some(session) = self.session.as_mut() else {
            return DragUpdate::None;
        };
        if session.pointer_id != event.id {
            log::warn!(
                "stale pointer {} move ignored; session tracks pointer {}",
                event.id,
                session.pointer_id
            );
            return DragUpdate::None;
        }

        self.velocity
            .add_sample(event.time_ms, event.position.x, event.position.y);

        match session.phase {
            DragPhase::Armed => {
                let dx = event.position.x - session.start.x;
                let dy = event.position.y - session.start.y;
                if dx.abs() <= self.touch_slop || dx.abs() <= dy.abs() {
                    return DragUpdate::None;
                }
                let direction = Direction::from_offset(dx);
                if !allow(direction) {
                    log::trace!("dead-end swipe {direction:?}; dropping session");
                    self.session = None;
                    return DragUpdate::None;
                }
                session.phase = DragPhase::Dragging;
                session.direction = direction;
                // Offsets restart from the crossing point so arming does
                // not jump the page by the slop distance.
                session.start = event.position;
                DragUpdate::Began { direction }
            }
            DragPhase::Dragging => {
                let dx = event.position.x - session.start.x;
                session.offset =
                    clamp_to_side(session.base_offset + dx, session.direction, self.extent);
                DragUpdate::Moved {
                    offset: session.offset,
                }
            }
        }
    }

    pub fn on_pointer_up(&mut self, event: &PointerEvent) -> DragUpdate {
        self.finish(event, true)
    }

    /// Cancel follows the same hand-off as release: a drag in flight
    /// still settles from its current offset and velocity. Only the tap
    /// report differs (a cancelled press is not a tap).
    pub fn on_pointer_cancel(&mut self, event: &PointerEvent) -> DragUpdate {
        self.finish(event, false)
    }

    fn finish(&mut self, event: &PointerEvent, report_tap: bool) -> DragUpdate {
        match self.session.as_ref() {
            None => return DragUpdate::None,
            Some(session) if session.pointer_id != event.id => {
                log::warn!(
                    "stale pointer {} up/cancel ignored; session tracks pointer {}",
                    event.id,
                    session.pointer_id
                );
                return DragUpdate::None;
            }
            Some(_) => {}
        }

        let Some(session) = self.session.take() else {
            return DragUpdate::None;
        };
        match session.phase {
            DragPhase::Armed => {
                if report_tap {
                    DragUpdate::Tap
                } else {
                    DragUpdate::None
                }
            }
            DragPhase::Dragging => {
                let (velocity_x, _) = self.velocity.estimate(self.max_fling_velocity);
                DragUpdate::Released {
                    direction: session.direction,
                    offset: session.offset,
                    velocity_x,
                }
            }
        }
    }
}

/// A session only ever reveals the incoming page on one side, so offsets
/// clamp to that side of the surface.
fn clamp_to_side(offset: f32, direction: Direction, extent: f32) -> f32 {
    match direction {
        Direction::Forward => offset.clamp(-extent, 0.0),
        Direction::Backward => offset.clamp(0.0, extent),
    }
}

/// Commit rule for a released drag.
///
/// A flick (|velocity| above `velocity_threshold`) decides by its own
/// sign: with the drag direction it commits even short of the distance
/// threshold, against it it snaps back even past it. Without a flick,
/// the transition commits once the drag covered more than a third of the
/// surface.
pub fn should_commit(
    offset: f32,
    surface_width: f32,
    velocity_x: f32,
    direction: Direction,
    velocity_threshold: f32,
) -> bool {
    if surface_width <= 0.0 {
        return false;
    }
    if velocity_x.abs() > velocity_threshold {
        return velocity_x * direction.offset_sign() > 0.0;
    }
    offset.abs() > surface_width / COMMIT_DISTANCE_DIVISOR
}
