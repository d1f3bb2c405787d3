//! Construction-time options for [`PullToRefresh`](crate::PullToRefresh).

use crate::gesture_constants::DEFAULT_MAX_PULL_DISTANCE;
use dragload_animation::{CurveError, ResistanceBand, ResistanceCurve};
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct PullToRefreshConfig {
    /// Distance past which the indicator stops growing linearly and release
    /// triggers a reload.
    pub max_pull_distance: f32,
    /// Schedule applied to the overflow past the cap.
    pub resistance: ResistanceCurve,
}

impl PullToRefreshConfig {
    pub fn with_max_pull_distance(mut self, distance: f32) -> Self {
        self.max_pull_distance = distance;
        self
    }

    pub fn with_resistance(mut self, resistance: ResistanceCurve) -> Self {
        self.resistance = resistance;
        self
    }

    /// Replaces the resistance schedule with one built from `bands`.
    pub fn with_resistance_bands(
        self,
        bands: impl IntoIterator<Item = ResistanceBand>,
    ) -> Result<Self, ConfigError> {
        let curve = ResistanceCurve::new(bands)?;
        Ok(self.with_resistance(curve))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_pull_distance.is_finite() || self.max_pull_distance <= 0.0 {
            return Err(ConfigError::InvalidMaxPullDistance(self.max_pull_distance));
        }
        Ok(())
    }
}

impl Default for PullToRefreshConfig {
    fn default() -> Self {
        Self {
            max_pull_distance: DEFAULT_MAX_PULL_DISTANCE,
            resistance: ResistanceCurve::standard(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidMaxPullDistance(f32),
    Resistance(CurveError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMaxPullDistance(distance) => {
                write!(f, "max pull distance must be positive and finite, got {distance}")
            }
            ConfigError::Resistance(err) => write!(f, "invalid resistance curve: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Resistance(err) => Some(err),
            ConfigError::InvalidMaxPullDistance(_) => None,
        }
    }
}

impl From<CurveError> for ConfigError {
    fn from(err: CurveError) -> Self {
        ConfigError::Resistance(err)
    }
}
