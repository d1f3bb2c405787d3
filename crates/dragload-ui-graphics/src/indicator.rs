//! Style instructions for the loading indicator.
//!
//! The indicator grows in two parts: a visible `height` capped at the pull
//! threshold and an `extra_extension` (a bottom border in the browser
//! rendition) that keeps stretching under resistance past the cap.

/// A single instruction sent to a render surface.
///
/// `height` is optional because releasing into a reload keeps whatever height
/// the indicator already has.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorUpdate {
    pub height: Option<f32>,
    pub extra_extension: f32,
    pub transition_enabled: bool,
}

impl IndicatorUpdate {
    /// Live tracking of a drag: both sizes set, no transition so the
    /// indicator follows the finger.
    pub const fn dragging(height: f32, extra_extension: f32) -> Self {
        Self {
            height: Some(height),
            extra_extension,
            transition_enabled: false,
        }
    }

    /// Release into a reload: the extension collapses, height stays.
    pub const fn loading() -> Self {
        Self {
            height: None,
            extra_extension: 0.0,
            transition_enabled: true,
        }
    }

    /// Back to the resting state.
    pub const fn rest() -> Self {
        Self {
            height: Some(0.0),
            extra_extension: 0.0,
            transition_enabled: true,
        }
    }
}

/// Accumulated style of an indicator after applying updates in order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorStyle {
    pub height: f32,
    pub extra_extension: f32,
    pub transition_enabled: bool,
}

impl IndicatorStyle {
    pub const REST: IndicatorStyle = IndicatorStyle {
        height: 0.0,
        extra_extension: 0.0,
        transition_enabled: true,
    };

    pub fn apply(&mut self, update: IndicatorUpdate) {
        if let Some(height) = update.height {
            self.height = height;
        }
        self.extra_extension = update.extra_extension;
        self.transition_enabled = update.transition_enabled;
    }

    /// Total visual extent of the indicator.
    pub fn extent(&self) -> f32 {
        self.height + self.extra_extension
    }
}

impl Default for IndicatorStyle {
    fn default() -> Self {
        Self::REST
    }
}
