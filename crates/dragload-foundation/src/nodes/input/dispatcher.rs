//! Pointer event queue between a gesture source and the tracker.
//!
//! Platform integrations push events as they arrive; the UI loop drains the
//! queue into a [`PullToRefresh`] once per frame, reading the scroll position
//! at that moment.

use super::gestures::{PullToRefresh, ReleaseOutcome};
use super::types::{PointerEvent, PointerId};
use crate::surface::{RenderSurface, ScrollBoundary};

#[derive(Default)]
pub struct PointerDispatcher {
    queue: Vec<(PointerId, PointerEvent)>,
}

impl PointerDispatcher {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    pub fn push(&mut self, event: PointerEvent) {
        self.queue.push((event.id, event));
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain<F>(&mut self, mut handler: F)
    where
        F: FnMut(PointerId, PointerEvent),
    {
        for (id, event) in self.queue.drain(..) {
            handler(id, event);
        }
    }

    /// Feeds every queued event to `tracker` and returns the release outcomes
    /// in arrival order.
    pub fn dispatch_to<S: RenderSurface>(
        &mut self,
        tracker: &mut PullToRefresh<S>,
        boundary: &impl ScrollBoundary,
    ) -> Vec<ReleaseOutcome> {
        let mut outcomes = Vec::new();
        self.drain(|id, event| {
            if let Some(outcome) = tracker.handle_pointer_event(&event, boundary) {
                log::debug!("pointer {id} released: {outcome:?}");
                outcomes.push(outcome);
            }
        });
        outcomes
    }
}
