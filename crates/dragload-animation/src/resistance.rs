//! Piecewise-linear resistance schedule.
//!
//! A curve is an ordered list of bands. Input up to the first threshold passes
//! through unchanged. Between two thresholds the input is scaled by the rate of
//! the lower band, and each completed band contributes its full width times its
//! rate. With thresholds strictly increasing and rates strictly decreasing the
//! result is continuous, monotone and grows slower than linear.

use smallvec::SmallVec;
use std::fmt;

/// One step of a resistance schedule: input past `threshold` moves the output
/// at `rate` until the next threshold is reached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResistanceBand {
    pub threshold: f32,
    pub rate: f32,
}

impl ResistanceBand {
    pub const fn new(threshold: f32, rate: f32) -> Self {
        Self { threshold, rate }
    }
}

/// The schedule used by pull-to-refresh indicators: 20px bands at
/// 0.5, 0.4, 0.3, 0.2 and 0.1.
pub const DEFAULT_BANDS: [ResistanceBand; 5] = [
    ResistanceBand::new(20.0, 0.5),
    ResistanceBand::new(40.0, 0.4),
    ResistanceBand::new(60.0, 0.3),
    ResistanceBand::new(80.0, 0.2),
    ResistanceBand::new(100.0, 0.1),
];

/// Applies the default schedule to `value`.
///
/// `value` is the overflow past the visual cap and is expected to be
/// non-negative. Anything at or below the first threshold is returned as is.
pub fn damp(value: f32) -> f32 {
    damp_with(&DEFAULT_BANDS, value)
}

fn damp_with(bands: &[ResistanceBand], value: f32) -> f32 {
    // Highest band whose threshold the value has passed.
    let Some(index) = bands.iter().rposition(|band| value > band.threshold) else {
        return value;
    };

    let mut damped = (value - bands[index].threshold) * bands[index].rate;
    for upper in (1..=index).rev() {
        let lower = &bands[upper - 1];
        damped += (bands[upper].threshold - lower.threshold) * lower.rate;
    }
    damped + bands[0].threshold
}

#[derive(Debug, Clone, PartialEq)]
pub enum CurveError {
    Empty,
    InvalidThreshold { index: usize, threshold: f32 },
    InvalidRate { index: usize, rate: f32 },
    ThresholdsNotIncreasing { index: usize },
    RatesNotDecreasing { index: usize },
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveError::Empty => write!(f, "resistance curve has no bands"),
            CurveError::InvalidThreshold { index, threshold } => {
                write!(f, "band {index} has invalid threshold {threshold}")
            }
            CurveError::InvalidRate { index, rate } => {
                write!(f, "band {index} has rate {rate}; expected 0 < rate <= 1")
            }
            CurveError::ThresholdsNotIncreasing { index } => {
                write!(f, "band {index} threshold does not exceed the previous one")
            }
            CurveError::RatesNotDecreasing { index } => {
                write!(f, "band {index} rate is not below the previous one")
            }
        }
    }
}

impl std::error::Error for CurveError {}

/// A validated resistance schedule.
#[derive(Clone, Debug, PartialEq)]
pub struct ResistanceCurve {
    bands: SmallVec<[ResistanceBand; 5]>,
}

impl ResistanceCurve {
    /// Builds a curve from bands ordered by threshold.
    pub fn new(bands: impl IntoIterator<Item = ResistanceBand>) -> Result<Self, CurveError> {
        let bands: SmallVec<[ResistanceBand; 5]> = bands.into_iter().collect();
        if bands.is_empty() {
            return Err(CurveError::Empty);
        }

        for (index, band) in bands.iter().enumerate() {
            if !band.threshold.is_finite() || band.threshold < 0.0 {
                return Err(CurveError::InvalidThreshold {
                    index,
                    threshold: band.threshold,
                });
            }
            if !band.rate.is_finite() || band.rate <= 0.0 || band.rate > 1.0 {
                return Err(CurveError::InvalidRate {
                    index,
                    rate: band.rate,
                });
            }
        }

        for (index, pair) in bands.windows(2).enumerate() {
            if pair[1].threshold <= pair[0].threshold {
                return Err(CurveError::ThresholdsNotIncreasing { index: index + 1 });
            }
            if pair[1].rate >= pair[0].rate {
                return Err(CurveError::RatesNotDecreasing { index: index + 1 });
            }
        }

        Ok(Self { bands })
    }

    /// The default pull-to-refresh schedule.
    pub fn standard() -> Self {
        Self {
            bands: SmallVec::from_slice(&DEFAULT_BANDS),
        }
    }

    pub fn bands(&self) -> &[ResistanceBand] {
        &self.bands
    }

    /// Maps an overflow distance to its resistance-adjusted extension.
    pub fn damp(&self, value: f32) -> f32 {
        damp_with(&self.bands, value)
    }
}

impl Default for ResistanceCurve {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
#[path = "tests/resistance_tests.rs"]
mod tests;
