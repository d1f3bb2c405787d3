//! Pure data for drawing in Dragload
//!
//! This crate contains the geometry primitive used for pointer positions and
//! the style instruction a loading indicator surface receives.

mod geometry;
mod indicator;

pub use geometry::*;
pub use indicator::*;

pub mod prelude {
    pub use crate::geometry::Point;
    pub use crate::indicator::{IndicatorStyle, IndicatorUpdate};
}
