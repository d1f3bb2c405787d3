//! Assertion utilities for robot testing
//!
//! Helpers for checking the instructions a loading indicator received.

use dragload_ui_graphics::IndicatorUpdate;

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that an update tracks a live drag with the given sizes.
pub fn assert_dragging_update(
    update: Option<IndicatorUpdate>,
    height: f32,
    extra_extension: f32,
    msg: &str,
) {
    let update = update.unwrap_or_else(|| panic!("{}: no update recorded", msg));
    assert!(
        !update.transition_enabled,
        "{}: drag updates must disable transitions, got {:?}",
        msg,
        update
    );
    let actual_height = update
        .height
        .unwrap_or_else(|| panic!("{}: drag update without height", msg));
    assert_approx_eq(actual_height, height, 1e-4, &format!("{} - height", msg));
    assert_approx_eq(
        update.extra_extension,
        extra_extension,
        1e-4,
        &format!("{} - extra extension", msg),
    );
}

/// Assert that an update puts the indicator back to rest.
pub fn assert_reset_update(update: Option<IndicatorUpdate>, msg: &str) {
    assert_eq!(
        update,
        Some(IndicatorUpdate::rest()),
        "{}: expected a reset instruction",
        msg
    );
}

/// Assert that an update is the hand-off into loading.
pub fn assert_loading_update(update: Option<IndicatorUpdate>, msg: &str) {
    assert_eq!(
        update,
        Some(IndicatorUpdate::loading()),
        "{}: expected the loading instruction",
        msg
    );
}

/// Assert that a collection has an expected count.
pub fn assert_count<T>(items: &[T], expected: usize, msg: &str) {
    assert_eq!(
        items.len(),
        expected,
        "{}: expected {} items, got {}",
        msg,
        expected,
        items.len()
    );
}
