//! End-to-end pull gestures driven through pointer events, the dispatcher and
//! a simulated scroll region.

use dragload_foundation::{damp, PullToRefreshConfig, ReleaseOutcome};
use dragload_testing::robot_assertions::{
    assert_approx_eq, assert_count, assert_dragging_update, assert_loading_update,
    assert_reset_update,
};
use dragload_testing::{PullRobot, RecordingSurface};
use dragload_ui_graphics::IndicatorStyle;

#[test]
fn pull_from_scrolled_list_latches_when_top_is_reached() {
    let mut robot = PullRobot::new();
    robot.scroll_to(30.0);
    robot.press(100.0);

    // Native scrolling brings the list back to its top first.
    assert!(!robot.move_to(110.0));
    assert!(!robot.move_to(120.0));
    assert!(!robot.move_to(130.0));
    assert_eq!(robot.scroll_offset(), 0.0);
    assert!(robot.updates().is_empty());

    // From here on the gesture belongs to the indicator.
    assert!(robot.move_to(140.0));
    robot.drag_to(200.0, 6);
    assert_eq!(robot.tracker().session().adjusted_displacement(), Some(60.0));
    assert_dragging_update(robot.last_update(), 40.0, 0.0, "at 60px pull");

    assert_eq!(robot.release(), ReleaseOutcome::Reloading);
    assert_eq!(robot.reload_count(), 1);
    assert!(robot.is_loading());
    assert_loading_update(robot.last_update(), "after release");
}

#[test]
fn list_that_never_reaches_top_never_reloads() {
    let mut robot = PullRobot::new();
    robot.scroll_to(1000.0);

    let outcome = robot.pull(0.0, 600.0, 30);

    assert_eq!(outcome, ReleaseOutcome::Ignored);
    assert!(robot.updates().is_empty());
    assert_eq!(robot.reload_count(), 0);
    assert_approx_eq(robot.scroll_offset(), 400.0, 1e-2, "native scroll");
}

#[test]
fn short_pull_snaps_back_without_reload() {
    let mut robot = PullRobot::new();
    robot.press(100.0);
    robot.move_to(105.0);
    robot.move_to(130.0);

    assert_eq!(robot.release(), ReleaseOutcome::SnappedBack);
    assert_eq!(robot.reload_count(), 0);
    assert_reset_update(robot.last_update(), "snap back");
    assert_eq!(robot.style(), IndicatorStyle::REST);
}

#[test]
fn indicator_follows_documented_sizes() {
    let mut robot = PullRobot::new();
    robot.press(0.0);
    robot.move_to(10.0);

    robot.move_to(20.0);
    assert_dragging_update(robot.last_update(), 10.0, -5.0, "adjusted 10");

    robot.move_to(60.0);
    assert_dragging_update(robot.last_update(), 40.0, -10.0, "adjusted 50");

    robot.move_to(110.0);
    assert_dragging_update(robot.last_update(), 40.0, damp(40.0), "adjusted 100");

    robot.move_to(210.0);
    assert_dragging_update(robot.last_update(), 40.0, damp(140.0), "adjusted 200");
}

#[test]
fn extension_keeps_growing_but_slower() {
    let mut robot = PullRobot::new();
    robot.press(0.0);
    robot.move_to(1.0);

    let mut previous = f32::MIN;
    let mut previous_step = f32::MAX;
    for y in (101..=401).step_by(60) {
        robot.move_to(y as f32);
        let extension = robot.last_update().expect("update").extra_extension;
        assert!(extension > previous);
        if previous > 0.0 {
            let step = extension - previous;
            assert!(
                step <= previous_step + 1e-3,
                "step {step} grew past {previous_step}"
            );
            previous_step = step;
        }
        previous = extension;
    }
}

#[test]
fn loading_freezes_indicator_until_reset() {
    let mut robot = PullRobot::new();
    assert_eq!(robot.pull(0.0, 80.0, 8), ReleaseOutcome::Reloading);
    let frozen = robot.updates().len();
    let style = robot.style();

    robot.press(0.0);
    robot.drag_to(150.0, 5);
    assert_count(robot.updates(), frozen, "updates while loading");
    assert_eq!(robot.style(), style);

    robot.finish_reload();
    assert!(!robot.is_loading());
    assert_reset_update(robot.last_update(), "finish reload");

    assert_eq!(robot.pull(0.0, 80.0, 8), ReleaseOutcome::Reloading);
    assert_eq!(robot.reload_count(), 2);
}

#[test]
fn long_pull_during_reload_fires_again() {
    let mut robot = PullRobot::new();
    assert_eq!(robot.pull(0.0, 80.0, 8), ReleaseOutcome::Reloading);
    let style = robot.style();

    // Latches at 30, released at 120.
    assert_eq!(robot.pull(0.0, 150.0, 5), ReleaseOutcome::Reloading);
    assert_eq!(robot.reload_count(), 2);
    assert!(robot.is_loading());
    assert_loading_update(robot.last_update(), "second release");
    assert_eq!(robot.style(), style);
}

#[test]
fn short_pull_during_reload_snaps_back() {
    let mut robot = PullRobot::new();
    assert_eq!(robot.pull(0.0, 80.0, 8), ReleaseOutcome::Reloading);

    // Latches at 10, released at 10.
    assert_eq!(robot.pull(0.0, 20.0, 2), ReleaseOutcome::SnappedBack);
    assert_eq!(robot.reload_count(), 1);
    assert!(!robot.is_loading());
    assert_reset_update(robot.last_update(), "short release");
    assert_eq!(robot.style(), IndicatorStyle::REST);
}

#[test]
fn external_reset_mid_drag_keeps_the_drag_alive() {
    let mut robot = PullRobot::new();
    robot.press(0.0);
    robot.drag_to(30.0, 3);

    robot.tracker_mut().reset();
    assert_reset_update(robot.last_update(), "external reset");
    robot.tracker_mut().surface_mut().clear_updates();

    assert!(robot.move_to(60.0));
    assert_count(robot.updates(), 1, "updates after reset");
    assert_dragging_update(robot.last_update(), 40.0, -10.0, "drag after reset");

    assert_eq!(robot.release(), ReleaseOutcome::Reloading);
    assert_eq!(robot.reload_count(), 1);
}

#[test]
fn reset_is_callable_any_time() {
    let mut robot = PullRobot::new();
    robot.finish_reload();
    assert_reset_update(robot.last_update(), "idle reset");

    robot.press(0.0);
    robot.drag_to(30.0, 3);
    robot.finish_reload();
    assert_eq!(robot.style(), IndicatorStyle::REST);
    assert!(!robot.is_loading());
}

#[test]
fn retreat_and_return_keeps_first_latch() {
    let mut robot = PullRobot::new();
    robot.press(100.0);
    robot.move_to(110.0);
    // Back above the start point; the list scrolls down.
    assert!(!robot.move_to(80.0));
    assert!(robot.scroll_offset() > 0.0);
    // Scroll back to the top, then pull further.
    robot.move_to(110.0);
    robot.move_to(150.0);

    let session = robot.tracker().session();
    assert_eq!(session.raw_displacement(), 50.0);
    assert_eq!(session.adjusted_displacement(), Some(40.0));
    assert_eq!(robot.release(), ReleaseOutcome::Reloading);
}

#[test]
fn new_press_discards_previous_session() {
    let mut robot = PullRobot::new();
    robot.press(0.0);
    robot.drag_to(35.0, 5);

    // A fresh press without a release in between.
    robot.press(500.0);
    let session = robot.tracker().session();
    assert_eq!(session.raw_displacement(), 0.0);
    assert_eq!(session.adjusted_displacement(), None);

    robot.move_to(505.0);
    robot.move_to(520.0);
    assert_eq!(robot.release(), ReleaseOutcome::SnappedBack);
}

#[test]
fn larger_threshold_changes_trigger_point() {
    let config = PullToRefreshConfig::default().with_max_pull_distance(100.0);
    let mut robot = PullRobot::with_config(config);

    assert_eq!(robot.pull(0.0, 90.0, 9), ReleaseOutcome::SnappedBack);
    assert_eq!(robot.pull(0.0, 120.0, 12), ReleaseOutcome::Reloading);
}

#[test]
fn detached_surface_stays_inert() {
    let mut robot = PullRobot::with_surface(
        RecordingSurface::detached(),
        PullToRefreshConfig::default(),
    );
    assert!(robot.tracker().is_inert());
    assert_eq!(robot.tracker().surface().prepare_calls(), 0);

    assert_eq!(robot.pull(0.0, 200.0, 10), ReleaseOutcome::Ignored);
    robot.finish_reload();
    assert!(robot.updates().is_empty());
    assert_eq!(robot.reload_count(), 0);
}

#[test]
fn attach_prepares_surface_once() {
    let robot = PullRobot::new();
    assert_eq!(robot.tracker().surface().prepare_calls(), 1);
    assert!(robot.updates().is_empty());
}
