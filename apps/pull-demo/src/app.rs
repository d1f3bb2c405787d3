//! Scripted pull-to-refresh over a simulated feed.
//!
//! A finger presses at `from`, moves to `to` in `steps` moves and lifts. Moves
//! the tracker does not consume scroll the feed natively. A triggered reload
//! completes after `reload_frames` frames, prepends a fresh item and resets
//! the indicator.

use anyhow::Context;
use clap::Parser;
use dragload_foundation::{
    IndicatorStyle, IndicatorUpdate, Point, PointerDispatcher, PointerEvent, PointerEventKind,
    PullToRefresh, PullToRefreshConfig, ReleaseOutcome, RenderSurface,
};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq, Parser)]
#[command(name = "pull-demo")]
#[command(about = "Scripted pull-to-refresh gesture over a simulated feed")]
#[command(allow_negative_numbers = true)]
pub struct DemoOptions {
    /// Pull distance that triggers a reload, in pixels.
    #[arg(long = "max-pull", default_value_t = dragload_foundation::DEFAULT_MAX_PULL_DISTANCE)]
    pub max_pull: f32,
    /// Initial scroll offset of the feed.
    #[arg(long, default_value_t = 0.0, value_parser = non_negative_px)]
    pub scroll: f32,
    /// Y position where the finger presses.
    #[arg(long, default_value_t = 100.0)]
    pub from: f32,
    /// Y position where the finger lifts.
    #[arg(long, default_value_t = 200.0)]
    pub to: f32,
    /// Number of moves between press and release.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    pub steps: u32,
    /// Frames the reload takes before the indicator resets.
    #[arg(long = "reload-frames", default_value_t = 3)]
    pub reload_frames: u32,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self::parse_from(["pull-demo"])
    }
}

fn non_negative_px(value: &str) -> Result<f32, String> {
    let px: f32 = value
        .parse()
        .map_err(|_| format!("expected a number, got {value:?}"))?;
    if px.is_finite() && px >= 0.0 {
        Ok(px)
    } else {
        Err(format!("{value} is not a non-negative offset"))
    }
}

/// Text rendition of the loading indicator.
#[derive(Debug, Default)]
pub struct ConsoleSurface {
    style: IndicatorStyle,
    loading: bool,
    frames: Vec<String>,
}

impl ConsoleSurface {
    fn note(&mut self, line: String) {
        log::info!("{line}");
        self.frames.push(line);
    }
}

impl RenderSurface for ConsoleSurface {
    fn apply(&mut self, update: IndicatorUpdate) {
        self.style.apply(update);
        let extent = self.style.extent().max(0.0).round() as usize;
        let line = format!(
            "|{:<30}| height {:>5.1} extension {:>6.1} transition {}",
            "#".repeat(extent.min(30)),
            self.style.height,
            self.style.extra_extension,
            if self.style.transition_enabled { "on" } else { "off" },
        );
        self.note(line);
    }

    fn is_loading(&self) -> bool {
        self.loading
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn prepare(&mut self) {
        self.style = IndicatorStyle::REST;
    }
}

#[derive(Debug)]
pub struct DemoReport {
    pub outcome: ReleaseOutcome,
    pub reloads: u32,
    pub feed: Vec<String>,
    pub frames: Vec<String>,
    pub final_scroll: f32,
}

pub fn run(options: &DemoOptions) -> anyhow::Result<DemoReport> {
    let config = PullToRefreshConfig::default().with_max_pull_distance(options.max_pull);
    let requested = Rc::new(Cell::new(0u32));
    let flag = Rc::clone(&requested);
    let mut tracker = PullToRefresh::attach(ConsoleSurface::default(), config)
        .context("invalid pull-to-refresh options")?
        .on_reload(move || flag.set(flag.get() + 1));

    let mut feed: Vec<String> = (1..=5).map(|i| format!("item {i}")).collect();
    let mut dispatcher = PointerDispatcher::new();
    let mut offset = options.scroll;
    let mut last_y = options.from;

    dispatcher.push(PointerEvent::touch(
        PointerEventKind::Down,
        [Point::new(0.0, options.from)],
    ));
    dispatcher.dispatch_to(&mut tracker, &offset);

    for step in 1..=options.steps {
        let fraction = step as f32 / options.steps as f32;
        let y = options.from + (options.to - options.from) * fraction;
        let event = PointerEvent::touch(PointerEventKind::Move, [Point::new(0.0, y)]);
        dispatcher.push(event.clone());
        dispatcher.dispatch_to(&mut tracker, &offset);
        if !event.is_consumed() {
            offset = (offset - (y - last_y)).max(0.0);
            log::debug!("native scroll to {offset}");
        }
        last_y = y;
    }

    dispatcher.push(PointerEvent::touch(PointerEventKind::Up, []));
    let outcome = dispatcher
        .dispatch_to(&mut tracker, &offset)
        .last()
        .copied()
        .unwrap_or(ReleaseOutcome::Ignored);
    log::info!("release: {outcome:?}");

    if tracker.is_loading() {
        for frame in 1..=options.reload_frames {
            tracker
                .surface_mut()
                .note(format!("frame {frame}: loading..."));
        }
        feed.insert(0, format!("item {}", feed.len() + 1));
        tracker.reset();
    }

    let surface = std::mem::take(tracker.surface_mut());
    Ok(DemoReport {
        outcome,
        reloads: requested.get(),
        feed,
        frames: surface.frames,
        final_scroll: offset,
    })
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
