//! Pull-to-refresh gesture recogniser.
//!
//! The tracker follows one touch sequence at a time:
//!
//! - **Down** starts a fresh [`DragSession`].
//! - **Move** measures the displacement. The first move that finds the region
//!   at its top while the finger is below its start point latches the
//!   boundary. From then on the distance pulled past the latch drives the
//!   indicator: height grows linearly up to `max_pull_distance`, the overflow
//!   past it is passed through the resistance curve as extra extension.
//! - **Up** either fires the reload (pulled at least `max_pull_distance`) or
//!   snaps the indicator back.
//!
//! While a reload is in progress moves no longer touch the indicator; it stays
//! where the release left it until [`reset`] is called by whoever finished the
//! reload. Releases are still judged as usual: a long pull fires the reload
//! again, a short one snaps back and clears the loading flag.
//!
//! [`reset`]: PullToRefresh::reset

use super::session::{BoundaryState, DragSession};
use crate::config::{ConfigError, PullToRefreshConfig};
use crate::nodes::input::types::{PointerEvent, PointerEventKind};
use crate::surface::{RenderSurface, ScrollBoundary};
use dragload_animation::ResistanceCurve;
use dragload_ui_graphics::IndicatorUpdate;

/// What a touch-end decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Nothing to do: no active session, the boundary was never reached, or
    /// the final pull was not positive.
    Ignored,
    /// The reload callback fired and the indicator holds its height.
    Reloading,
    /// Pulled less than the threshold; the indicator went back to rest.
    SnappedBack,
}

pub struct PullToRefresh<S: RenderSurface> {
    surface: S,
    max_pull_distance: f32,
    resistance: ResistanceCurve,
    on_reload: Box<dyn FnMut()>,
    session: DragSession,
    inert: bool,
}

impl<S: RenderSurface> PullToRefresh<S> {
    /// Attaches a tracker to `surface`.
    ///
    /// A surface that reports itself as detached produces an inert tracker
    /// which ignores every event; check [`is_inert`](Self::is_inert) to detect
    /// that case.
    pub fn attach(mut surface: S, config: PullToRefreshConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let inert = !surface.is_attached();
        if inert {
            log::warn!("pull-to-refresh attached to a detached surface; gestures are ignored");
        } else {
            surface.prepare();
        }

        Ok(Self {
            surface,
            max_pull_distance: config.max_pull_distance,
            resistance: config.resistance,
            on_reload: Box::new(|| {}),
            session: DragSession::idle(),
            inert,
        })
    }

    /// Sets the callback fired once per qualifying release.
    ///
    /// The tracker does not wait for the reload. Call [`reset`](Self::reset)
    /// once it has finished.
    pub fn on_reload(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_reload = Box::new(callback);
        self
    }

    pub fn is_inert(&self) -> bool {
        self.inert
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn max_pull_distance(&self) -> f32 {
        self.max_pull_distance
    }

    pub fn is_loading(&self) -> bool {
        self.surface.is_loading()
    }

    pub fn on_touch_start(&mut self, pointer_y: f32, scroll_offset: f32) {
        if self.inert {
            return;
        }
        self.session = DragSession::begin(pointer_y, scroll_offset);
    }

    /// Tracks a move. Returns true when the platform's native scroll for this
    /// event must be suppressed, which happens on every move made while the
    /// region is at its top and the finger is below its start point.
    pub fn on_touch_move(&mut self, pointer_y: f32, scroll_offset: f32, at_top: bool) -> bool {
        if self.inert || !self.session.active {
            return false;
        }

        self.session.track(pointer_y);
        let raw = self.session.raw_displacement;

        let suppress_native_scroll = at_top && raw > 0.0;
        if suppress_native_scroll && self.session.latch_boundary() {
            log::debug!("top boundary reached at displacement {raw} (scroll offset {scroll_offset})");
        }

        let Some(adjusted) = self.session.adjusted_displacement() else {
            return suppress_native_scroll;
        };

        if !self.surface.is_loading() {
            let height = adjusted.max(0.0).min(self.max_pull_distance);
            let overflow = (adjusted - self.max_pull_distance).max(0.0) - height / 2.0;
            let extension = if overflow > 0.0 {
                self.resistance.damp(overflow)
            } else {
                // Negative values pull the bottom edge in slightly before the cap.
                overflow
            };
            log::trace!("pull {adjusted}: height {height}, extension {extension}");
            self.surface.apply(IndicatorUpdate::dragging(height, extension));
        }
        self.session.release_candidate = Some(adjusted);

        suppress_native_scroll
    }

    pub fn on_touch_end(&mut self) -> ReleaseOutcome {
        if self.inert || !self.session.active {
            return ReleaseOutcome::Ignored;
        }
        self.session.active = false;

        let distance = match (self.session.boundary, self.session.release_candidate) {
            (BoundaryState::ReachedAt(_), Some(distance)) if distance > 0.0 => distance,
            _ => return ReleaseOutcome::Ignored,
        };

        if distance >= self.max_pull_distance {
            log::debug!("released at {distance}; triggering reload");
            self.surface.set_loading(true);
            self.surface.apply(IndicatorUpdate::loading());
            (self.on_reload)();
            ReleaseOutcome::Reloading
        } else {
            log::debug!("released at {distance}; snapping back");
            self.reset();
            ReleaseOutcome::SnappedBack
        }
    }

    /// Returns the indicator to rest and clears the loading flag.
    ///
    /// Does nothing on an inert tracker.
    pub fn reset(&mut self) {
        if self.inert {
            return;
        }
        self.surface.apply(IndicatorUpdate::rest());
        self.surface.set_loading(false);
    }

    /// Routes a pointer event from the gesture source.
    ///
    /// The event is consumed whenever native scrolling must be suppressed.
    pub fn handle_pointer_event(
        &mut self,
        event: &PointerEvent,
        boundary: &impl ScrollBoundary,
    ) -> Option<ReleaseOutcome> {
        match event.kind {
            PointerEventKind::Down => {
                self.on_touch_start(event.primary_y(), boundary.scroll_offset());
                None
            }
            PointerEventKind::Move => {
                let suppress = self.on_touch_move(
                    event.primary_y(),
                    boundary.scroll_offset(),
                    boundary.is_at_top(),
                );
                if suppress {
                    event.consume();
                }
                None
            }
            PointerEventKind::Up => Some(self.on_touch_end()),
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/pull_refresh_tests.rs"]
mod tests;
