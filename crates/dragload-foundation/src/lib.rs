//! Pointer input plumbing and the pull-to-refresh gesture for Dragload
//!
//! [`PullToRefresh`] watches touch sequences on a scrollable region. Once the
//! region is scrolled to its top and the finger keeps moving down, the
//! tracker stretches a loading indicator through a [`RenderSurface`] and, on
//! release past the configured distance, fires the reload callback.

pub mod config;
pub mod gesture_constants;
pub mod nodes;
pub mod surface;

pub use config::{ConfigError, PullToRefreshConfig};
pub use gesture_constants::DEFAULT_MAX_PULL_DISTANCE;
pub use nodes::input::dispatcher::PointerDispatcher;
pub use nodes::input::gestures::{BoundaryState, DragSession, PullToRefresh, ReleaseOutcome};
pub use nodes::input::{PointerEvent, PointerEventKind, PointerId};
pub use surface::{RenderSurface, ScrollBoundary};

pub use dragload_animation::{damp, CurveError, ResistanceBand, ResistanceCurve};
pub use dragload_ui_graphics::{IndicatorStyle, IndicatorUpdate, Point};

pub mod prelude {
    pub use crate::config::PullToRefreshConfig;
    pub use crate::nodes::input::gestures::{PullToRefresh, ReleaseOutcome};
    pub use crate::nodes::input::prelude::*;
    pub use crate::surface::{RenderSurface, ScrollBoundary};
}
