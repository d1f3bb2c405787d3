//! Shared gesture constants for pull-to-refresh handling.
//!
//! Values are in logical pixels.

/// Pull distance at which the indicator stops growing linearly.
///
/// The indicator height is capped here and resistance takes over for the
/// extra extension. Releasing at or past this distance triggers a reload.
pub const DEFAULT_MAX_PULL_DISTANCE: f32 = 40.0;
