//! Scripted pointer gestures against a live coordinator.
//!
//! The robot owns the pointer id, position, and a deterministic clock,
//! and turns gesture-level intent (press, drag at a speed, fling, hold,
//! release, settle out) into the raw event/tick stream the coordinator
//! consumes.

use duopager_core::{PointerEvent, PointerId, Point};
use duopager_ui::TransitionCoordinator;

/// Default spacing between synthesized move samples, matching a 60 Hz
/// input stream.
pub const FRAME_MS: i64 = 16;

pub struct PointerRobot {
    pointer_id: PointerId,
    time_ms: i64,
    position: Point,
    down: bool,
}

impl Default for PointerRobot {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerRobot {
    pub fn new() -> Self {
        Self {
            pointer_id: 1,
            time_ms: 0,
            position: Point::ZERO,
            down: false,
        }
    }

    pub fn time_ms(&self) -> i64 {
        self.time_ms
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Presses at `(x, y)`; returns the coordinator's consumed flag.
    pub fn press(&mut self, coordinator: &mut TransitionCoordinator, x: f32, y: f32) -> bool {
        self.position = Point::new(x, y);
        self.down = true;
        coordinator.on_pointer_event(&PointerEvent::down(
            self.pointer_id,
            x,
            y,
            self.time_ms,
        ))
    }

    /// Drags by `(dx, dy)` in `steps` evenly spaced and timed samples.
    /// The pointer speed follows from distance and time: `steps` samples
    /// `FRAME_MS` apart at `dx / steps` pixels each.
    pub fn drag_by(
        &mut self,
        coordinator: &mut TransitionCoordinator,
        dx: f32,
        dy: f32,
        steps: usize,
    ) {
        assert!(self.down, "drag_by requires a pressed pointer");
        let steps = steps.max(1);
        for step in 1..=steps {
            let fraction = step as f32 / steps as f32;
            let x = self.position.x + dx * fraction;
            let y = self.position.y + dy * fraction;
            self.time_ms += FRAME_MS;
            coordinator.on_pointer_event(&PointerEvent::moved(self.pointer_id, x, y, self.time_ms));
        }
        self.position = Point::new(self.position.x + dx, self.position.y + dy);
    }

    /// Holds the pointer still for `duration_ms`, delivering stationary
    /// move samples the way a real touch screen does.
    pub fn hold(&mut self, coordinator: &mut TransitionCoordinator, duration_ms: i64) {
        assert!(self.down, "hold requires a pressed pointer");
        let end = self.time_ms + duration_ms;
        while self.time_ms < end {
            self.time_ms = (self.time_ms + FRAME_MS).min(end);
            coordinator.on_pointer_event(&PointerEvent::moved(
                self.pointer_id,
                self.position.x,
                self.position.y,
                self.time_ms,
            ));
        }
    }

    /// Lifts the pointer; returns the coordinator's consumed flag.
    pub fn release(&mut self, coordinator: &mut TransitionCoordinator) -> bool {
        self.down = false;
        self.time_ms += FRAME_MS;
        coordinator.on_pointer_event(&PointerEvent::up(
            self.pointer_id,
            self.position.x,
            self.position.y,
            self.time_ms,
        ))
    }

    /// Cancels the gesture (system stole the pointer).
    pub fn cancel(&mut self, coordinator: &mut TransitionCoordinator) -> bool {
        self.down = false;
        self.time_ms += FRAME_MS;
        coordinator.on_pointer_event(&PointerEvent::cancel(
            self.pointer_id,
            self.position.x,
            self.position.y,
            self.time_ms,
        ))
    }

    /// Ticks the coordinator in `FRAME_MS` frames until no transition is
    /// in progress. Panics if it fails to come to rest — a stuck settle
    /// is a bug the test should see.
    pub fn settle(&mut self, coordinator: &mut TransitionCoordinator) {
        for _ in 0..1_000 {
            if !coordinator.is_transition_in_progress() {
                return;
            }
            self.tick(coordinator, FRAME_MS as f32);
        }
        panic!("settle did not complete within 1000 frames");
    }

    /// Advances the coordinator by a single tick of `elapsed_ms`,
    /// keeping the robot clock in step.
    pub fn tick(&mut self, coordinator: &mut TransitionCoordinator, elapsed_ms: f32) {
        self.time_ms += elapsed_ms as i64;
        coordinator.tick(elapsed_ms);
    }
}
