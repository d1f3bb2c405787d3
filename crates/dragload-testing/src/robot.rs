//! Robot-style driver for pull gestures
//!
//! The robot owns a tracker attached to a [`RecordingSurface`], a
//! [`FakeScroll`] standing in for the scrollable region, and a counter of
//! reload callbacks. Interactions go through real [`PointerEvent`]s and a
//! [`PointerDispatcher`]; events the tracker does not consume scroll the fake
//! region the way the platform would.
//!
//! # Example
//!
//! ```
//! use dragload_testing::PullRobot;
//!
//! let mut robot = PullRobot::new();
//! robot.scroll_to(0.0);
//! robot.press(100.0);
//! robot.drag_to(160.0, 6);
//! robot.release();
//!
//! assert_eq!(robot.reload_count(), 1);
//! robot.finish_reload();
//! ```

use crate::testing::{FakeScroll, RecordingSurface};
use dragload_foundation::{
    PointerDispatcher, PointerEvent, PointerEventKind, PullToRefresh, PullToRefreshConfig,
    ReleaseOutcome, ScrollBoundary,
};
use dragload_ui_graphics::{IndicatorStyle, IndicatorUpdate, Point};
use std::cell::Cell;
use std::rc::Rc;

pub struct PullRobot {
    tracker: PullToRefresh<RecordingSurface>,
    dispatcher: PointerDispatcher,
    scroll: FakeScroll,
    reloads: Rc<Cell<u32>>,
    last_y: f32,
}

impl PullRobot {
    /// Robot with the default configuration, list at its top.
    pub fn new() -> Self {
        Self::with_config(PullToRefreshConfig::default())
    }

    pub fn with_config(config: PullToRefreshConfig) -> Self {
        Self::with_surface(RecordingSurface::new(), config)
    }

    /// # Panics
    ///
    /// Panics if `config` is invalid.
    pub fn with_surface(surface: RecordingSurface, config: PullToRefreshConfig) -> Self {
        let reloads = Rc::new(Cell::new(0));
        let counter = Rc::clone(&reloads);
        let tracker = PullToRefresh::attach(surface, config)
            .unwrap_or_else(|err| panic!("robot config rejected: {err}"))
            .on_reload(move || counter.set(counter.get() + 1));

        Self {
            tracker,
            dispatcher: PointerDispatcher::new(),
            scroll: FakeScroll::at(0.0),
            reloads,
            last_y: 0.0,
        }
    }

    pub fn scroll_to(&mut self, offset: f32) {
        self.scroll.set(offset);
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll.scroll_offset()
    }

    pub fn press(&mut self, y: f32) {
        self.last_y = y;
        self.send(PointerEvent::touch(PointerEventKind::Down, [Point::new(0.0, y)]));
    }

    /// Moves the finger to `y`. Returns true when the tracker suppressed the
    /// native scroll for this move.
    pub fn move_to(&mut self, y: f32) -> bool {
        let event = PointerEvent::touch(PointerEventKind::Move, [Point::new(0.0, y)]);
        let delta = y - self.last_y;
        self.last_y = y;

        self.send(event.clone());
        let consumed = event.is_consumed();
        if !consumed {
            self.scroll.scroll_by_drag(delta);
        }
        consumed
    }

    /// Moves to `y` in `steps` evenly spaced moves.
    pub fn drag_to(&mut self, y: f32, steps: usize) {
        let steps = steps.max(1);
        let from = self.last_y;
        for step in 1..=steps {
            let fraction = step as f32 / steps as f32;
            self.move_to(from + (y - from) * fraction);
        }
    }

    pub fn release(&mut self) -> ReleaseOutcome {
        self.dispatcher.push(PointerEvent::touch(PointerEventKind::Up, []));
        let outcomes = self.dispatcher.dispatch_to(&mut self.tracker, &self.scroll);
        outcomes.last().copied().unwrap_or(ReleaseOutcome::Ignored)
    }

    /// Press, drag and release in one go.
    pub fn pull(&mut self, from_y: f32, to_y: f32, steps: usize) -> ReleaseOutcome {
        self.press(from_y);
        self.drag_to(to_y, steps);
        self.release()
    }

    /// Signals that the reload finished.
    pub fn finish_reload(&mut self) {
        self.tracker.reset();
    }

    pub fn reload_count(&self) -> u32 {
        self.reloads.get()
    }

    pub fn is_loading(&self) -> bool {
        self.tracker.is_loading()
    }

    pub fn updates(&self) -> &[IndicatorUpdate] {
        self.tracker.surface().updates()
    }

    pub fn last_update(&self) -> Option<IndicatorUpdate> {
        self.tracker.surface().last_update()
    }

    pub fn style(&self) -> IndicatorStyle {
        self.tracker.surface().style()
    }

    pub fn tracker(&self) -> &PullToRefresh<RecordingSurface> {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut PullToRefresh<RecordingSurface> {
        &mut self.tracker
    }

    fn send(&mut self, event: PointerEvent) {
        self.dispatcher.push(event);
        let outcomes = self.dispatcher.dispatch_to(&mut self.tracker, &self.scroll);
        debug_assert!(outcomes.is_empty(), "only release produces outcomes");
    }
}

impl Default for PullRobot {
    fn default() -> Self {
        Self::new()
    }
}
