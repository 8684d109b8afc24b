//! # STFT Frontend
//!
//! A feature extraction frontend for speech recognition models, converting
//! raw waveforms into the normalized log-power spectrograms acoustic models
//! consume.
//!
//! ## Features
//!
//! - **Fixed-rate pipeline**: audio above 16 kHz is downsampled with an
//!   anti-aliased converter; spectral analysis always runs at 16 kHz
//! - **Windowed spectral analysis**: periodic Hann window, one-sided FFT
//!   power spectrum with scale correction, log compression
//! - **Per-bin normalization**: mean/variance standardization across frames
//! - **Deterministic output**: identical input and configuration produce
//!   bit-identical feature tensors
//!
//! ## Quick Start
//!
//! ```no_run
//! use stft_frontend::{extract_features, FrontendConfig};
//!
//! // Load audio samples (mono, f32, normalized)
//! let samples: Vec<f32> = vec![]; // Your audio data
//! let sample_rate = 44_100;
//!
//! let features = extract_features(&samples, sample_rate, FrontendConfig::default())?;
//!
//! println!("{} frames x {} bins", features.num_frames(), features.num_bins());
//! # Ok::<(), stft_frontend::FrontendError>(())
//! ```
//!
//! ## Architecture
//!
//! The extraction pipeline follows this flow:
//!
//! ```text
//! Audio Input → Resampling → Framing → Spectral Transform → Normalization → Feature Tensor
//! ```
//!
//! Data flows strictly forward; every stage allocates its own output and no
//! state is kept between invocations.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod features;
pub mod preprocessing;

// Re-export main types
pub use config::FrontendConfig;
pub use error::FrontendError;
pub use features::tensor::FeatureTensor;

/// Sample rate the spectral analysis runs at, in Hz
///
/// Input above this rate is downsampled; input at or below it is analyzed
/// as is. This is a property of the downstream acoustic models, not a
/// configuration knob.
pub const TARGET_SAMPLE_RATE: u32 = 16_000;

/// Main feature extraction function
///
/// Converts a waveform into a normalized log-power spectrogram tensor of
/// shape `[num_frames, num_bins, 1, 1]`, where
/// `num_bins = window_len / 2 + 1` at the 16 kHz analysis rate.
///
/// Input shorter than one analysis window (including empty input) produces
/// a zero-frame tensor rather than an error.
///
/// # Arguments
///
/// * `samples` - Mono audio samples, normalized to [-1.0, 1.0]
/// * `sample_rate` - Sample rate in Hz (typically 44100 or 48000)
/// * `config` - Window and stride configuration
///
/// # Returns
///
/// `FeatureTensor` holding the normalized features
///
/// # Errors
///
/// Returns `FrontendError::InvalidInput` if `sample_rate` is zero
///
/// # Example
///
/// ```no_run
/// use stft_frontend::{extract_features, FrontendConfig};
///
/// let samples = vec![0.0f32; 16_000]; // 1 second of silence
/// let features = extract_features(&samples, 16_000, FrontendConfig::default())?;
/// assert_eq!(features.shape(), [99, 161, 1, 1]);
/// # Ok::<(), stft_frontend::FrontendError>(())
/// ```
pub fn extract_features(
    samples: &[f32],
    sample_rate: u32,
    config: FrontendConfig,
) -> Result<FeatureTensor, FrontendError> {
    log::debug!(
        "Extracting features: {} samples at {} Hz, window {} ms, stride {} ms",
        samples.len(),
        sample_rate,
        config.window_ms,
        config.stride_ms
    );

    if sample_rate == 0 {
        return Err(FrontendError::InvalidInput(
            "Invalid sample rate: 0".to_string(),
        ));
    }

    // 1. Resampling (downsample only; lower rates pass through)
    let resampled;
    let samples: &[f32] = if sample_rate > TARGET_SAMPLE_RATE {
        log::info!(
            "Downsampling from {} Hz to {} Hz",
            sample_rate,
            TARGET_SAMPLE_RATE
        );
        resampled = preprocessing::resample::resample(samples, sample_rate, TARGET_SAMPLE_RATE);
        &resampled
    } else {
        samples
    };

    // Window and stride are defined in milliseconds at the analysis rate
    let window_len = config.window_samples(TARGET_SAMPLE_RATE);
    let stride_len = config.stride_samples(TARGET_SAMPLE_RATE);
    let num_bins = window_len / 2 + 1;

    // 2. Framing
    let frames = features::framing::frame_signal(samples, window_len, stride_len)?;
    if frames.is_empty() {
        log::warn!(
            "Input too short for one {}-sample window, returning empty features",
            window_len
        );
        return Ok(FeatureTensor::empty(num_bins));
    }
    log::debug!(
        "Framed into {} windows of {} samples (stride {})",
        frames.len(),
        window_len,
        stride_len
    );

    // 3. Spectral transform
    let spectra = features::spectrum::log_power_spectrum(&frames, window_len, TARGET_SAMPLE_RATE)?;

    // 4. Normalization
    let tensor = features::normalize::normalize_features(&spectra)?;

    log::debug!("Feature tensor shape {:?}", tensor.shape());

    Ok(tensor)
}

/// Reusable extractor that captures configuration at construction
///
/// Hosts that serve many requests with one configuration construct this
/// once and call [`FeatureExtractor::extract`] per request. Extraction is
/// pure and keeps no state between calls, so a shared extractor can be used
/// from multiple threads without locking.
///
/// # Example
///
/// ```no_run
/// use stft_frontend::{FeatureExtractor, FrontendConfig};
///
/// let extractor = FeatureExtractor::new(FrontendConfig::default());
/// let samples = vec![0.0f32; 16_000];
/// let features = extractor.extract(&samples, 16_000)?;
/// # Ok::<(), stft_frontend::FrontendError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct FeatureExtractor {
    config: FrontendConfig,
}

impl FeatureExtractor {
    /// Create an extractor with the given configuration
    pub fn new(config: FrontendConfig) -> Self {
        Self { config }
    }

    /// The configuration captured at construction
    pub fn config(&self) -> FrontendConfig {
        self.config
    }

    /// Extract features from one recording
    ///
    /// Equivalent to [`extract_features`] with the captured configuration.
    pub fn extract(
        &self,
        samples: &[f32],
        sample_rate: u32,
    ) -> Result<FeatureTensor, FrontendError> {
        extract_features(samples, sample_rate, self.config)
    }
}
