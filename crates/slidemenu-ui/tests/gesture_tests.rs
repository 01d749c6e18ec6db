use slidemenu_testing::prelude::*;
use slidemenu_ui::{
    PanelSlot, SlidingSurface, SurfaceConfig, TouchState, TweenScroller, ViewConfiguration,
};

const WIDTH: f32 = 480.0;
const HEIGHT: f32 = 800.0;
const CLOSED: i32 = 408;

fn surface_with_slop(slop: f32) -> SlidingSurface<PanelSlot, TweenScroller> {
    let config = SurfaceConfig::default()
        .with_view_configuration(ViewConfiguration::default().with_touch_slop(slop));
    laid_out_surface(config, WIDTH, HEIGHT)
}

fn surface() -> SlidingSurface<PanelSlot, TweenScroller> {
    laid_out_surface(SurfaceConfig::default(), WIDTH, HEIGHT)
}

/// Runs `frames` animation frames without waiting for the animation to end.
fn run_frames(robot: &mut GestureRobot, surface: &mut SlidingSurface<PanelSlot>, frames: usize) {
    for _ in 0..frames {
        surface.tick(robot.frame_time_nanos());
        robot.advance(FRAME_MS);
    }
}

#[test]
fn horizontal_move_past_slop_is_intercepted() {
    let mut surface = surface_with_slop(10.0);
    let mut robot = GestureRobot::new();

    let down = robot.down(300.0, 400.0);
    assert!(!surface.on_intercept_touch_event(&down));

    robot.advance(10);
    let mv = robot.move_to(320.0, 405.0);
    assert!(surface.on_intercept_touch_event(&mv));
    assert_eq!(surface.touch_state(), TouchState::HorizontalScrolling);

    robot.advance(10);
    let vertical_later = robot.move_to(320.0, 480.0);
    assert!(surface.on_intercept_touch_event(&vertical_later));
    assert_eq!(surface.touch_state(), TouchState::HorizontalScrolling);
}

#[test]
fn vertical_move_is_never_intercepted() {
    let mut surface = surface_with_slop(10.0);
    let mut robot = GestureRobot::new();

    let down = robot.down(300.0, 400.0);
    let first = robot.move_to(305.0, 420.0);
    let sideways_later = robot.move_to(420.0, 420.0);
    let up = robot.up();

    let verdicts = robot.offer(&mut surface, &[down, first, sideways_later]);
    assert_eq!(verdicts, vec![false, false, false]);
    assert_eq!(surface.touch_state(), TouchState::VerticalScrolling);

    assert!(!surface.on_intercept_touch_event(&up));
    assert_eq!(surface.touch_state(), TouchState::Rest);
    assert_eq!(surface.scroll_x(), CLOSED);
}

#[test]
fn small_jitter_stays_at_rest() {
    let mut surface = surface_with_slop(10.0);
    let mut robot = GestureRobot::new();

    let down = robot.down(300.0, 400.0);
    // Exactly the slop does not count as crossing it.
    let jitter = robot.move_to(310.0, 408.0);
    assert_eq!(robot.offer(&mut surface, &[down, jitter]), vec![false, false]);
    assert_eq!(surface.touch_state(), TouchState::Rest);
}

#[test]
fn open_surface_intercepts_from_the_first_touch() {
    let mut surface = surface();
    let mut robot = GestureRobot::new();
    surface.open();

    let down = robot.down(100.0, 400.0);
    assert!(surface.on_intercept_touch_event(&down));
}

#[test]
fn drag_follows_the_finger_within_bounds() {
    let mut surface = surface();
    let mut robot = GestureRobot::new();

    let down = robot.down(450.0, 400.0);
    assert!(surface.on_touch_event(&down));

    robot.advance(16);
    surface.on_touch_event(&robot.move_to(500.0, 400.0));
    assert_eq!(surface.scroll_x(), CLOSED - 50);

    robot.advance(16);
    surface.on_touch_event(&robot.move_to(1_200.0, 400.0));
    assert_eq!(surface.scroll_x(), 0, "clamped at fully open");

    robot.advance(16);
    surface.on_touch_event(&robot.move_to(0.0, 400.0));
    assert_eq!(surface.scroll_x(), CLOSED, "clamped at fully closed");
}

#[test]
fn fling_toward_open_opens_regardless_of_distance() {
    let recorder = StateRecorder::new();
    let mut surface = surface();
    surface.set_on_state_changed_listener(recorder.listener());
    let mut robot = GestureRobot::new();

    // 60px is not enough to open by position alone.
    let fling = robot.fling(100.0, 400.0, 60.0);
    robot.feed(&mut surface, &fling);

    assert!(surface.is_open());
    assert_eq!(recorder.states(), vec![true]);
    assert_eq!(surface.scroll_x(), CLOSED - 60);

    robot.settle(&mut surface);
    assert_eq!(surface.scroll_x(), 0);
}

#[test]
fn fling_toward_closed_closes() {
    let mut surface = surface();
    let mut robot = GestureRobot::new();
    surface.open();

    let fling = robot.fling(450.0, 400.0, -60.0);
    robot.feed(&mut surface, &fling);

    assert!(!surface.is_open());
    robot.settle(&mut surface);
    assert_eq!(surface.scroll_x(), CLOSED);
}

#[test]
fn short_slow_drag_snaps_back_quickly() {
    let recorder = StateRecorder::new();
    let mut surface = surface();
    let mut robot = GestureRobot::new();
    surface.open();
    surface.set_on_state_changed_listener(recorder.listener());

    let drag = robot.slow_drag(450.0, 400.0, -40.0);
    robot.feed(&mut surface, &drag);

    assert_eq!(surface.scroll_x(), 40);
    assert!(surface.is_open());
    assert_eq!(recorder.states(), vec![true]);

    // 40px of 480 takes a twelfth of the full duration.
    let frames = robot.settle(&mut surface);
    assert!(frames <= 5, "took {frames} frames");
    assert_eq!(surface.scroll_x(), 0);
}

#[test]
fn slow_drag_past_an_eighth_closes() {
    let mut surface = surface();
    let mut robot = GestureRobot::new();
    surface.open();

    let drag = robot.slow_drag(450.0, 400.0, -100.0);
    robot.feed(&mut surface, &drag);

    assert!(!surface.is_open());
    robot.settle(&mut surface);
    assert_eq!(surface.scroll_x(), CLOSED);
}

#[test]
fn slow_drag_past_an_eighth_opens() {
    let mut surface = surface();
    let mut robot = GestureRobot::new();

    let drag = robot.slow_drag(100.0, 400.0, 100.0);
    robot.feed(&mut surface, &drag);

    assert_eq!(surface.scroll_x(), CLOSED - 100);
    assert!(surface.is_open());
    let offsets = robot.settle_recording(&mut surface);
    assert!(offsets.windows(2).all(|pair| pair[1] <= pair[0]));
    assert_eq!(offsets.last(), Some(&0));
}

#[test]
fn slow_drag_to_exactly_an_eighth_stays_put() {
    let mut surface = surface();
    let mut robot = GestureRobot::new();

    let drag = robot.slow_drag(100.0, 400.0, 60.0);
    robot.feed(&mut surface, &drag);

    assert!(!surface.is_open());
    robot.settle(&mut surface);
    assert_eq!(surface.scroll_x(), CLOSED);
}

#[test]
fn tap_on_open_surface_closes() {
    let recorder = StateRecorder::new();
    let mut surface = surface();
    let mut robot = GestureRobot::new();
    surface.open();
    surface.set_on_state_changed_listener(recorder.listener());

    let tap = robot.tap(450.0, 400.0);
    assert_eq!(robot.feed(&mut surface, &tap), vec![true, true]);

    assert!(!surface.is_open());
    assert_eq!(recorder.states(), vec![false]);
    robot.settle(&mut surface);
    assert_eq!(surface.scroll_x(), CLOSED);
}

#[test]
fn long_press_does_not_close() {
    let mut surface = surface();
    let mut robot = GestureRobot::new();
    surface.open();

    let down = robot.down(450.0, 400.0);
    robot.advance(800);
    let up = robot.up();
    robot.feed(&mut surface, &[down, up]);

    assert!(surface.is_open());
    assert!(!surface.is_animating());
    assert_eq!(surface.scroll_x(), 0);
}

#[test]
fn touch_outside_the_child_is_declined() {
    let mut surface = surface();
    let mut robot = GestureRobot::new();
    surface.open();

    // The menu strip left of the content.
    let down = robot.down(100.0, 400.0);
    assert!(!surface.on_touch_event(&down));
    assert_eq!(surface.touch_state(), TouchState::Rest);
}

#[test]
fn cancel_freezes_a_running_animation() {
    let mut surface = surface();
    let mut robot = GestureRobot::new();
    surface.animate_open();
    run_frames(&mut robot, &mut surface, 4);

    let frozen = surface.scroll_x();
    assert!(frozen > 0 && frozen < CLOSED, "mid-flight offset {frozen}");

    let down = robot.down(470.0, 400.0);
    let cancel = robot.cancel();
    surface.on_intercept_touch_event(&down);
    surface.on_touch_event(&cancel);

    assert!(!surface.is_animating());
    assert_eq!(surface.touch_state(), TouchState::Rest);
    run_frames(&mut robot, &mut surface, 4);
    assert_eq!(surface.scroll_x(), frozen);
}

#[test]
fn touch_down_catches_the_animation_and_drags() {
    let mut surface = surface();
    let mut robot = GestureRobot::new();
    surface.animate_open();
    run_frames(&mut robot, &mut surface, 3);

    let caught = surface.scroll_x();
    assert!(caught > 0 && caught < CLOSED);

    let down = robot.down(470.0, 400.0);
    assert!(surface.on_touch_event(&down));
    assert!(!surface.is_animating());
    assert_eq!(surface.touch_state(), TouchState::HorizontalScrolling);
    assert_eq!(surface.scroll_x(), caught);

    // Already dragging, so even a sub-slop move scrolls.
    robot.advance(16);
    surface.on_touch_event(&robot.move_to(467.0, 400.0));
    assert_eq!(surface.scroll_x(), caught + 3);
}

#[test]
fn sub_pixel_moves_accumulate() {
    let mut surface = surface();
    let mut robot = GestureRobot::new();

    surface.on_touch_event(&robot.down(200.0, 400.0));
    robot.advance(16);
    surface.on_touch_event(&robot.move_to(220.0, 400.0));
    assert_eq!(surface.scroll_x(), CLOSED - 20);

    for _ in 0..4 {
        robot.advance(16);
        surface.on_touch_event(&robot.move_by(0.5, 0.0));
    }
    assert_eq!(surface.scroll_x(), CLOSED - 22);
}
