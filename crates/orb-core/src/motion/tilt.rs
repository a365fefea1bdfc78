//! Low-pass tilt smoothing for the parallax ball offset.

use serde::{Deserialize, Serialize};

/// Tuning constants for the tilt filter.
///
/// The smoothing weight, axis scale and clamp bound are empirically tuned
/// display values, not derived physical quantities. They are kept
/// configurable rather than recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TiltConfig {
    /// Weight of the previous smoothed value in the moving average.
    pub smoothing: f32,
    /// Multiplier from raw accelerometer units to display units.
    pub scale: f32,
    /// Symmetric clamp bound in display units.
    pub clamp: f32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            smoothing: 0.88,
            scale: 7.5,
            clamp: 15.0,
        }
    }
}

/// A smoothed, clamped 2D offset in display units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TiltVector {
    pub x: f32,
    pub y: f32,
}

/// Exponentially-weighted moving average over raw accelerometer samples.
///
/// Each update folds one sample into the average and clamps the result, so
/// sensor spikes can never push the displayed offset outside the configured
/// range. Pure function of previous state and new sample; O(1) and
/// non-blocking, safe to run on the sensor delivery path.
#[derive(Debug, Clone, Default)]
pub struct TiltFilter {
    config: TiltConfig,
    tilt: TiltVector,
}

impl TiltFilter {
    /// Creates a filter with the given tuning constants.
    pub fn new(config: TiltConfig) -> Self {
        Self {
            config,
            tilt: TiltVector::default(),
        }
    }

    /// Folds one raw sample into the smoothed tilt and returns the result.
    ///
    /// The x axis is negated so that tilting the device left moves the
    /// displayed object left.
    pub fn update(&mut self, raw_x: f32, raw_y: f32) -> TiltVector {
        let instant_x = -raw_x * self.config.scale;
        let instant_y = raw_y * self.config.scale;
        let keep = self.config.smoothing;
        let take = 1.0 - keep;
        let bound = self.config.clamp;
        self.tilt.x = (self.tilt.x * keep + instant_x * take).clamp(-bound, bound);
        self.tilt.y = (self.tilt.y * keep + instant_y * take).clamp(-bound, bound);
        self.tilt
    }

    /// Returns the current smoothed tilt without consuming a sample.
    pub fn current(&self) -> TiltVector {
        self.tilt
    }
}
