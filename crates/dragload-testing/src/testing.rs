//! In-memory collaborators for driving a tracker without a real UI.

use dragload_foundation::{RenderSurface, ScrollBoundary};
use dragload_ui_graphics::{IndicatorStyle, IndicatorUpdate};
use std::cell::Cell;

/// Render surface that keeps every update it receives.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    updates: Vec<IndicatorUpdate>,
    style: IndicatorStyle,
    loading: bool,
    attached: bool,
    prepare_calls: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            updates: Vec::new(),
            style: IndicatorStyle::REST,
            loading: false,
            attached: true,
            prepare_calls: 0,
        }
    }

    /// A surface standing in for a missing indicator element.
    pub fn detached() -> Self {
        Self {
            attached: false,
            ..Self::new()
        }
    }

    pub fn updates(&self) -> &[IndicatorUpdate] {
        &self.updates
    }

    pub fn last_update(&self) -> Option<IndicatorUpdate> {
        self.updates.last().copied()
    }

    /// Style after applying every update in order.
    pub fn style(&self) -> IndicatorStyle {
        self.style
    }

    pub fn prepare_calls(&self) -> usize {
        self.prepare_calls
    }

    pub fn clear_updates(&mut self) {
        self.updates.clear();
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for RecordingSurface {
    fn apply(&mut self, update: IndicatorUpdate) {
        self.style.apply(update);
        self.updates.push(update);
    }

    fn is_loading(&self) -> bool {
        self.loading
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn is_attached(&self) -> bool {
        self.attached
    }

    fn prepare(&mut self) {
        self.prepare_calls += 1;
        self.style.extra_extension = 0.0;
    }
}

/// Scroll position that tests can move around.
#[derive(Debug, Default)]
pub struct FakeScroll {
    offset: Cell<f32>,
}

impl FakeScroll {
    pub fn at(offset: f32) -> Self {
        Self {
            offset: Cell::new(offset),
        }
    }

    pub fn set(&self, offset: f32) {
        self.offset.set(offset);
    }

    /// Scrolls the content like a native drag of `delta` would; dragging down
    /// moves towards the top and stops there.
    pub fn scroll_by_drag(&self, delta: f32) {
        let next = (self.offset.get() - delta).max(0.0);
        self.offset.set(next);
    }
}

impl ScrollBoundary for FakeScroll {
    fn scroll_offset(&self) -> f32 {
        self.offset.get()
    }
}
