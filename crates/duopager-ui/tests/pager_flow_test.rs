//! End-to-end gesture flows through the transition coordinator.

use std::rc::Rc;

use duopager_testing::{PointerRobot, RecordingIndicator, RecordingRenderer, StaticResolver};
use duopager_ui::{
    PagerConfig, PointerEvent, SlotIndex, TransitionCoordinator,
};

const WIDTH: f32 = 1_000.0;

fn pager(
    initial: u64,
) -> (
    TransitionCoordinator,
    Rc<RecordingIndicator>,
    Rc<RecordingRenderer>,
) {
    let resolver = StaticResolver::new(vec![10, 11, 12]);
    let indicator = RecordingIndicator::new();
    let renderer = RecordingRenderer::new();
    let coordinator = TransitionCoordinator::new(
        initial,
        WIDTH,
        resolver,
        indicator.clone(),
        renderer.clone(),
        PagerConfig::default(),
    );
    indicator.clear();
    renderer.clear();
    (coordinator, indicator, renderer)
}

/// Arms a forward drag with a small move so later distances arrive
/// unshortened by the slop restart.
fn arm_forward(robot: &mut PointerRobot, coordinator: &mut TransitionCoordinator) {
    robot.press(coordinator, 500.0, 300.0);
    robot.drag_by(coordinator, -10.0, 0.0, 1);
}

#[test]
fn drag_past_threshold_commits_forward() {
    let (mut coordinator, indicator, renderer) = pager(10);
    let mut robot = PointerRobot::new();

    arm_forward(&mut robot, &mut coordinator);
    robot.drag_by(&mut coordinator, -350.0, 0.0, 10);
    robot.hold(&mut coordinator, 160);
    assert!(robot.release(&mut coordinator));
    robot.settle(&mut coordinator);

    assert_eq!(indicator.selections(), vec![(11, true)]);
    assert_eq!(renderer.swap_count(), 1);
    assert_eq!(coordinator.current_page(), 11);
    // New primary rests at 0, the outgoing page is parked off the
    // forward edge and hidden.
    assert_eq!(renderer.last_offset(SlotIndex::Second), Some(0.0));
    assert_eq!(renderer.last_offset(SlotIndex::First), Some(-WIDTH));
    assert_eq!(renderer.last_visibility(SlotIndex::First), Some(false));
}

#[test]
fn progress_is_monotonic_through_drag_and_commit_settle() {
    let (mut coordinator, indicator, _renderer) = pager(10);
    let mut robot = PointerRobot::new();

    arm_forward(&mut robot, &mut coordinator);
    robot.drag_by(&mut coordinator, -350.0, 0.0, 10);
    robot.hold(&mut coordinator, 160);
    robot.release(&mut coordinator);
    robot.settle(&mut coordinator);

    let values = indicator.progress_values();
    assert!(!values.is_empty());
    for pair in values.windows(2) {
        assert!(
            pair[1] >= pair[0] - 1e-4,
            "progress jumped backward: {} -> {}",
            pair[0],
            pair[1]
        );
    }
    assert_eq!(values.last().copied(), Some(1.0));
}

#[test]
fn short_drag_snaps_back() {
    let (mut coordinator, indicator, renderer) = pager(10);
    let mut robot = PointerRobot::new();

    arm_forward(&mut robot, &mut coordinator);
    robot.drag_by(&mut coordinator, -190.0, 0.0, 8);
    robot.hold(&mut coordinator, 160);
    robot.release(&mut coordinator);
    robot.settle(&mut coordinator);

    assert!(indicator.selections().is_empty());
    assert_eq!(renderer.swap_count(), 0);
    assert_eq!(coordinator.current_page(), 10);
    assert_eq!(renderer.last_offset(SlotIndex::First), Some(0.0));
    assert_eq!(indicator.progress_values().last().copied(), Some(0.0));
}

#[test]
fn fast_fling_commits_below_distance_threshold() {
    let (mut coordinator, indicator, _renderer) = pager(10);
    let mut robot = PointerRobot::new();

    arm_forward(&mut robot, &mut coordinator);
    // 100 px in one 16 ms frame is far past the flick threshold.
    robot.drag_by(&mut coordinator, -100.0, 0.0, 1);
    robot.release(&mut coordinator);
    robot.settle(&mut coordinator);

    assert_eq!(indicator.selections(), vec![(11, true)]);
    assert_eq!(coordinator.current_page(), 11);
}

#[test]
fn reverse_flick_overrides_position_commit() {
    let (mut coordinator, indicator, _renderer) = pager(10);
    let mut robot = PointerRobot::new();

    arm_forward(&mut robot, &mut coordinator);
    robot.drag_by(&mut coordinator, -450.0, 0.0, 10);
    // Well past a third of the surface, but the release is a hard flick
    // back toward the current page.
    robot.drag_by(&mut coordinator, 100.0, 0.0, 1);
    robot.release(&mut coordinator);
    robot.settle(&mut coordinator);

    assert!(indicator.selections().is_empty());
    assert_eq!(coordinator.current_page(), 10);
}

#[test]
fn dead_end_swipe_moves_nothing() {
    let (mut coordinator, indicator, renderer) = pager(12);
    let mut robot = PointerRobot::new();

    robot.press(&mut coordinator, 500.0, 300.0);
    robot.drag_by(&mut coordinator, -10.0, 0.0, 1);
    robot.drag_by(&mut coordinator, -300.0, 0.0, 10);
    let consumed = robot.release(&mut coordinator);

    assert!(!consumed);
    assert!(renderer.calls().is_empty(), "dead-end swipe must not move slots");
    assert!(indicator.calls().is_empty());
    assert_eq!(coordinator.current_page(), 12);
}

#[test]
fn vertical_moves_never_take_the_gesture() {
    let (mut coordinator, _indicator, renderer) = pager(10);

    assert!(!coordinator.on_pointer_event(&PointerEvent::down(1, 500.0, 300.0, 0)));
    assert!(!coordinator.on_pointer_event(&PointerEvent::moved(1, 502.0, 250.0, 16)));
    assert!(!coordinator.on_pointer_event(&PointerEvent::moved(1, 498.0, 120.0, 32)));
    assert!(!coordinator.on_pointer_event(&PointerEvent::up(1, 498.0, 120.0, 48)));
    assert!(renderer.calls().is_empty());
}

#[test]
fn tap_is_left_to_the_host() {
    let (mut coordinator, indicator, renderer) = pager(10);
    let mut robot = PointerRobot::new();

    robot.press(&mut coordinator, 500.0, 300.0);
    let consumed = robot.release(&mut coordinator);

    assert!(!consumed);
    assert!(renderer.calls().is_empty());
    assert!(indicator.calls().is_empty());
}

#[test]
fn pointer_cancel_settles_back_like_a_release() {
    let (mut coordinator, indicator, renderer) = pager(10);
    let mut robot = PointerRobot::new();

    arm_forward(&mut robot, &mut coordinator);
    robot.drag_by(&mut coordinator, -150.0, 0.0, 6);
    robot.hold(&mut coordinator, 160);
    assert!(robot.cancel(&mut coordinator));
    robot.settle(&mut coordinator);

    assert!(indicator.selections().is_empty());
    assert_eq!(renderer.swap_count(), 0);
    assert_eq!(renderer.last_offset(SlotIndex::First), Some(0.0));
}

#[test]
fn drag_during_settle_continues_without_a_jump() {
    let (mut coordinator, indicator, renderer) = pager(10);
    let mut robot = PointerRobot::new();

    arm_forward(&mut robot, &mut coordinator);
    robot.drag_by(&mut coordinator, -400.0, 0.0, 10);
    robot.hold(&mut coordinator, 160);
    robot.release(&mut coordinator);

    // Part-way through the settle, catch the page again.
    for _ in 0..3 {
        robot.tick(&mut coordinator, 16.0);
    }
    assert!(coordinator.is_transition_in_progress());
    let last_animated = renderer
        .last_offset(SlotIndex::First)
        .expect("settle emitted offsets");

    renderer.clear();
    assert!(robot.press(&mut coordinator, 460.0, 300.0));
    let resumed = renderer
        .last_offset(SlotIndex::First)
        .expect("interrupting press re-applies the offset");
    assert!(
        (resumed - last_animated).abs() <= 1.0,
        "offset jumped from {last_animated} to {resumed} on interruption"
    );

    // Releasing again finishes the transition exactly once.
    robot.release(&mut coordinator);
    robot.settle(&mut coordinator);
    assert_eq!(indicator.selections(), vec![(11, true)]);
    assert_eq!(renderer.swap_count(), 1);
    assert_eq!(coordinator.current_page(), 11);
}

#[test]
fn moves_during_settle_are_consumed() {
    let (mut coordinator, _indicator, _renderer) = pager(10);
    let mut robot = PointerRobot::new();

    arm_forward(&mut robot, &mut coordinator);
    robot.drag_by(&mut coordinator, -400.0, 0.0, 10);
    robot.hold(&mut coordinator, 160);
    robot.release(&mut coordinator);
    robot.tick(&mut coordinator, 16.0);

    let stray = PointerEvent::moved(9, 100.0, 100.0, robot.time_ms() + 8);
    assert!(coordinator.on_pointer_event(&stray));
}

#[test]
fn settle_respects_the_duration_ceiling() {
    let (mut coordinator, _indicator, _renderer) = pager(10);
    let mut robot = PointerRobot::new();

    arm_forward(&mut robot, &mut coordinator);
    robot.drag_by(&mut coordinator, -350.0, 0.0, 10);
    robot.hold(&mut coordinator, 160);
    robot.release(&mut coordinator);

    let mut frames = 0;
    while coordinator.is_transition_in_progress() {
        robot.tick(&mut coordinator, 16.0);
        frames += 1;
        assert!(
            frames * 16 <= 616,
            "settle exceeded the 600 ms duration ceiling"
        );
    }
}

#[test]
fn programmatic_select_of_current_page_only_pings_indicator() {
    let (mut coordinator, indicator, renderer) = pager(10);

    coordinator.programmatic_select(10, true);

    assert_eq!(indicator.same_page_count(), 1);
    assert!(indicator.selections().is_empty());
    assert!(renderer.calls().is_empty());
    assert!(!coordinator.is_transition_in_progress());
}

#[test]
fn programmatic_select_animates_to_an_adjacent_page() {
    let (mut coordinator, indicator, renderer) = pager(10);
    let mut robot = PointerRobot::new();

    coordinator.programmatic_select(11, true);
    assert!(coordinator.is_transition_in_progress());
    robot.settle(&mut coordinator);

    assert_eq!(indicator.selections(), vec![(11, true)]);
    assert_eq!(renderer.swap_count(), 1);
    assert_eq!(coordinator.current_page(), 11);
}

#[test]
fn programmatic_select_backward_animates_from_the_other_side() {
    let (mut coordinator, indicator, _renderer) = pager(11);
    let mut robot = PointerRobot::new();

    coordinator.programmatic_select(10, true);
    robot.settle(&mut coordinator);

    assert_eq!(indicator.selections(), vec![(10, false)]);
    assert_eq!(coordinator.current_page(), 10);
}

#[test]
fn programmatic_select_without_animation_swaps_instantly() {
    let (mut coordinator, indicator, renderer) = pager(10);

    coordinator.programmatic_select(11, false);

    assert!(!coordinator.is_transition_in_progress());
    assert_eq!(indicator.selections(), vec![(11, true)]);
    assert_eq!(renderer.swap_count(), 1);
    assert_eq!(coordinator.current_page(), 11);
}

#[test]
fn programmatic_select_of_non_adjacent_page_applies_instantly() {
    let (mut coordinator, indicator, renderer) = pager(10);

    // 12 is two steps away; the resolver only models adjacency, so the
    // animated request degrades to an instant apply.
    coordinator.programmatic_select(12, true);

    assert!(!coordinator.is_transition_in_progress());
    assert_eq!(indicator.selections(), vec![(12, true)]);
    assert_eq!(renderer.swap_count(), 1);
    assert_eq!(coordinator.current_page(), 12);
}

#[test]
fn back_and_forth_transitions_keep_slots_consistent() {
    let (mut coordinator, indicator, renderer) = pager(10);
    let mut robot = PointerRobot::new();

    arm_forward(&mut robot, &mut coordinator);
    robot.drag_by(&mut coordinator, -400.0, 0.0, 10);
    robot.hold(&mut coordinator, 160);
    robot.release(&mut coordinator);
    robot.settle(&mut coordinator);
    assert_eq!(coordinator.current_page(), 11);

    // Now drag back the other way.
    robot.press(&mut coordinator, 300.0, 300.0);
    robot.drag_by(&mut coordinator, 10.0, 0.0, 1);
    robot.drag_by(&mut coordinator, 400.0, 0.0, 10);
    robot.hold(&mut coordinator, 160);
    robot.release(&mut coordinator);
    robot.settle(&mut coordinator);

    assert_eq!(coordinator.current_page(), 10);
    assert_eq!(
        indicator.selections(),
        vec![(11, true), (10, false)]
    );
    assert_eq!(renderer.swap_count(), 2);
}
