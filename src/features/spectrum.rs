//! Windowed log-power spectrum computation
//!
//! Converts sample frames into one-sided log-power spectra:
//! 1. Apply a periodic Hann window to each frame
//! 2. Forward FFT, keep bins `0..=window_len/2`, power = |X|²
//! 3. One-sided scale correction with `scale = sum(hann²) * sample_rate`:
//!    DC and the last bin divide by `scale`, interior bins multiply by
//!    `2 / scale`
//! 4. Add a fixed floor, then natural log
//!
//! Downstream acoustic models are trained against this exact arithmetic,
//! so the scaling and the additive floor are part of the output contract.
//!
//! # Example
//!
//! ```
//! use stft_frontend::features::spectrum::log_power_spectrum;
//!
//! let frames = vec![vec![0.0f32; 320]; 4];
//! let spectra = log_power_spectrum(&frames, 320, 16_000)?;
//! assert_eq!(spectra.len(), 4);
//! assert_eq!(spectra[0].len(), 161);
//! # Ok::<(), stft_frontend::FrontendError>(())
//! ```

use crate::error::FrontendError;
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// Floor added to power values before log compression
///
/// Added, not clamped: every bin is offset by this amount so silent bins
/// land at `ln(1e-14)` instead of negative infinity.
const LOG_FLOOR: f32 = 1e-14;

/// Periodic Hann window of the given length
///
/// `w[k] = 0.5 - 0.5 * cos(2 * pi * k / len)` for `k` in `[0, len)`. The
/// periodic form omits the closing endpoint, which keeps the window DFT-even
/// for overlapped spectral analysis.
pub fn hann_window(len: usize) -> Vec<f32> {
    (0..len)
        .map(|k| 0.5 - 0.5 * (2.0 * std::f32::consts::PI * k as f32 / len as f32).cos())
        .collect()
}

/// Compute one-sided log-power spectra for a batch of frames
///
/// # Arguments
///
/// * `frames` - Frames of exactly `window_len` samples each
/// * `window_len` - Frame length in samples
/// * `sample_rate` - Sample rate in Hz, used in the scale correction
///
/// # Returns
///
/// One row of `window_len / 2 + 1` log-power values per input frame
///
/// # Errors
///
/// Returns `FrontendError::InvalidInput` if `window_len` or `sample_rate`
/// is zero, and `FrontendError::ProcessingError` if any frame's length
/// differs from `window_len`
pub fn log_power_spectrum(
    frames: &[Vec<f32>],
    window_len: usize,
    sample_rate: u32,
) -> Result<Vec<Vec<f32>>, FrontendError> {
    if window_len == 0 {
        return Err(FrontendError::InvalidInput(
            "Window length must be > 0".to_string(),
        ));
    }

    if sample_rate == 0 {
        return Err(FrontendError::InvalidInput(
            "Invalid sample rate: 0".to_string(),
        ));
    }

    if frames.is_empty() {
        return Ok(Vec::new());
    }

    log::debug!(
        "Computing log-power spectra: {} frames of {} samples at {} Hz",
        frames.len(),
        window_len,
        sample_rate
    );

    let window = hann_window(window_len);
    let window_energy: f32 = window.iter().map(|&w| w * w).sum();
    let scale = window_energy * sample_rate as f32;

    let num_bins = window_len / 2 + 1;
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(window_len);

    let mut spectra = Vec::with_capacity(frames.len());
    let mut buffer: Vec<Complex<f32>> = vec![Complex::new(0.0, 0.0); window_len];

    for (frame_idx, frame) in frames.iter().enumerate() {
        if frame.len() != window_len {
            return Err(FrontendError::ProcessingError(format!(
                "Frame {} has length {}, expected {}",
                frame_idx,
                frame.len(),
                window_len
            )));
        }

        for (dst, (&sample, &w)) in buffer.iter_mut().zip(frame.iter().zip(window.iter())) {
            *dst = Complex::new(sample * w, 0.0);
        }
        fft.process(&mut buffer);

        let mut row = Vec::with_capacity(num_bins);
        for (bin, value) in buffer[..num_bins].iter().enumerate() {
            let power = value.norm_sqr();
            // Interior bins absorb the mirrored negative-frequency half;
            // DC and the last bin have no mirror
            let corrected = if bin == 0 || bin == num_bins - 1 {
                power / scale
            } else {
                power * 2.0 / scale
            };
            row.push((corrected + LOG_FLOOR).ln());
        }
        spectra.push(row);
    }

    Ok(spectra)
}
