//! Configuration parameters for feature extraction

use serde::{Deserialize, Serialize};

/// Default analysis window duration in milliseconds
pub const DEFAULT_WINDOW_MS: u32 = 20;

/// Default stride between windows in milliseconds
pub const DEFAULT_STRIDE_MS: u32 = 10;

/// Feature extraction configuration parameters
///
/// Window and stride durations are whole milliseconds. Hosts that carry
/// configuration as loosely typed values should construct through
/// [`FrontendConfig::from_millis`], which falls back to the defaults on
/// anything that is not a positive whole number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontendConfig {
    /// Analysis window duration in milliseconds (default: 20)
    pub window_ms: u32,

    /// Stride between consecutive windows in milliseconds (default: 10)
    pub stride_ms: u32,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            window_ms: DEFAULT_WINDOW_MS,
            stride_ms: DEFAULT_STRIDE_MS,
        }
    }
}

impl FrontendConfig {
    /// Build a configuration from loosely typed millisecond values
    ///
    /// Any value that is not a positive whole number of milliseconds (NaN,
    /// infinite, zero, negative, or fractional) is replaced by its default
    /// and a warning is logged. Invalid configuration is never an error.
    ///
    /// # Example
    ///
    /// ```
    /// use stft_frontend::FrontendConfig;
    ///
    /// let config = FrontendConfig::from_millis(25.0, 10.0);
    /// assert_eq!(config.window_ms, 25);
    ///
    /// // Fractional window falls back to the 20 ms default
    /// let config = FrontendConfig::from_millis(15.5, 10.0);
    /// assert_eq!(config.window_ms, 20);
    /// ```
    pub fn from_millis(window_ms: f64, stride_ms: f64) -> Self {
        Self {
            window_ms: sanitize_millis(window_ms, DEFAULT_WINDOW_MS, "window"),
            stride_ms: sanitize_millis(stride_ms, DEFAULT_STRIDE_MS, "stride"),
        }
    }

    /// Window length in samples at the given sample rate
    pub fn window_samples(&self, sample_rate: u32) -> usize {
        millis_to_samples(self.window_ms, sample_rate)
    }

    /// Stride length in samples at the given sample rate
    pub fn stride_samples(&self, sample_rate: u32) -> usize {
        millis_to_samples(self.stride_ms, sample_rate)
    }
}

fn sanitize_millis(value: f64, default: u32, name: &str) -> u32 {
    if value.is_finite() && value > 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        value as u32
    } else {
        log::warn!(
            "Invalid {} duration {} ms, falling back to {} ms",
            name,
            value,
            default
        );
        default
    }
}

fn millis_to_samples(millis: u32, sample_rate: u32) -> usize {
    (f64::from(sample_rate) * f64::from(millis) / 1000.0).round() as usize
}
