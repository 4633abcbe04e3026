//! Fixed parameters of a mosaic and its animation.

use thiserror::Error;

use crate::geometry::Point;

/// Default side length of the square being partitioned.
pub const DEFAULT_SIZE: f64 = 400.0;

/// Default length of one animation cycle, in milliseconds.
pub const DEFAULT_PERIOD_MS: f64 = 5000.0;

/// Default scale reached at the peak of the animation.
pub const DEFAULT_FINAL_SCALE: f64 = 1.1;

/// Rejected configuration values.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("mosaic size must be positive, got {0}")]
    NonPositiveSize(f64),
    #[error("animation period must be positive, got {0}")]
    NonPositivePeriod(f64),
    #[error("final scale must be greater than 1, got {0}")]
    ScaleNotAboveOne(f64),
    #[error("configuration value `{0}` is not finite")]
    NotFinite(&'static str),
}

/// Size of the mosaic square plus the timing and amplitude of its animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MosaicConfig {
    size: f64,
    period: f64,
    final_scale: f64,
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            period: DEFAULT_PERIOD_MS,
            final_scale: DEFAULT_FINAL_SCALE,
        }
    }
}

impl MosaicConfig {
    /// Creates a configuration.
    ///
    /// # Panics
    /// Panics if any value is non-finite, `size` or `period` is not positive,
    /// or `final_scale` is not greater than 1.
    pub fn new(size: f64, period: f64, final_scale: f64) -> Self {
        match Self::try_new(size, period, final_scale) {
            Ok(config) => config,
            Err(err) => panic!("invalid mosaic configuration: {err}"),
        }
    }

    /// Creates a configuration, reporting the first invalid value instead of panicking.
    pub fn try_new(size: f64, period: f64, final_scale: f64) -> Result<Self, ConfigError> {
        if !size.is_finite() {
            return Err(ConfigError::NotFinite("size"));
        }
        if !period.is_finite() {
            return Err(ConfigError::NotFinite("period"));
        }
        if !final_scale.is_finite() {
            return Err(ConfigError::NotFinite("final_scale"));
        }
        if size <= 0.0 {
            return Err(ConfigError::NonPositiveSize(size));
        }
        if period <= 0.0 {
            return Err(ConfigError::NonPositivePeriod(period));
        }
        if final_scale <= 1.0 {
            return Err(ConfigError::ScaleNotAboveOne(final_scale));
        }
        Ok(Self {
            size,
            period,
            final_scale,
        })
    }

    /// Returns a copy with a different square size.
    ///
    /// # Panics
    /// Panics if `size` is not a positive finite number.
    pub fn with_size(self, size: f64) -> Self {
        Self::new(size, self.period, self.final_scale)
    }

    /// Returns a copy with a different animation period (milliseconds).
    ///
    /// # Panics
    /// Panics if `period` is not a positive finite number.
    pub fn with_period(self, period: f64) -> Self {
        Self::new(self.size, period, self.final_scale)
    }

    /// Returns a copy with a different peak scale.
    ///
    /// # Panics
    /// Panics if `final_scale` is not a finite number greater than 1.
    pub fn with_final_scale(self, final_scale: f64) -> Self {
        Self::new(self.size, self.period, final_scale)
    }

    /// Side length of the square.
    #[inline]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Length of one animation cycle, in milliseconds.
    #[inline]
    pub fn period(&self) -> f64 {
        self.period
    }

    /// Scale reached at the animation's peak.
    #[inline]
    pub fn final_scale(&self) -> f64 {
        self.final_scale
    }

    /// Geometric center of the square, `(size/2, size/2)`.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.size / 2.0, self.size / 2.0)
    }
}
