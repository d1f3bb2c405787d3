//! Collaborators the gesture tracker drives and queries.

use dragload_ui_graphics::IndicatorUpdate;

/// The loading indicator element.
///
/// Besides accepting style updates the surface owns the loading flag, so a
/// reload in progress is visible to anyone holding the surface.
pub trait RenderSurface {
    fn apply(&mut self, update: IndicatorUpdate);

    fn is_loading(&self) -> bool;

    fn set_loading(&mut self, loading: bool);

    /// Whether the indicator element actually exists. A tracker attached to
    /// a detached surface stays inert.
    fn is_attached(&self) -> bool {
        true
    }

    /// Called once when a tracker attaches, before any gesture.
    fn prepare(&mut self) {}
}

/// Reports the scroll position of the region the gesture is tracked on.
pub trait ScrollBoundary {
    fn scroll_offset(&self) -> f32;

    /// The region counts as being at its top only when the offset is exactly
    /// zero.
    fn is_at_top(&self) -> bool {
        self.scroll_offset() == 0.0
    }
}

impl ScrollBoundary for f32 {
    fn scroll_offset(&self) -> f32 {
        *self
    }
}

impl<T: ScrollBoundary + ?Sized> ScrollBoundary for &T {
    fn scroll_offset(&self) -> f32 {
        (**self).scroll_offset()
    }

    fn is_at_top(&self) -> bool {
        (**self).is_at_top()
    }
}
