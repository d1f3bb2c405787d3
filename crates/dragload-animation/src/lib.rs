//! Resistance (damping) curves for Dragload
//!
//! Pull gestures stretch the loading indicator linearly up to a cap. Past the
//! cap every further band of drag distance moves the indicator less than the
//! previous one, which gives the "rubber band" feel.

mod resistance;

pub use resistance::*;

pub mod prelude {
    pub use crate::resistance::{damp, CurveError, ResistanceBand, ResistanceCurve};
}
