//! Frame extraction for windowed spectral analysis
//!
//! Slices a sample sequence into overlapping fixed-length frames. Frame `i`
//! covers samples `[i * stride_len, i * stride_len + window_len)`. Trailing
//! samples that do not fill a final window are dropped, never zero-padded,
//! so every frame holds exactly `window_len` real samples.
//!
//! # Example
//!
//! ```
//! use stft_frontend::features::framing::frame_signal;
//!
//! let samples = vec![0.0f32; 16_000];
//! let frames = frame_signal(&samples, 320, 160)?;
//! assert_eq!(frames.len(), 99);
//! # Ok::<(), stft_frontend::FrontendError>(())
//! ```

use crate::error::FrontendError;

/// Slice samples into overlapping frames
///
/// The number of frames is `(usable_len - window_len) / stride_len + 1`,
/// where `usable_len = len - ((len - window_len) % stride_len)`; the tail
/// beyond `usable_len` is discarded.
///
/// # Arguments
///
/// * `samples` - Mono audio samples
/// * `window_len` - Frame length in samples
/// * `stride_len` - Step between frame starts in samples
///
/// # Returns
///
/// Frames of exactly `window_len` samples each. Input shorter than one
/// window yields an empty vector, not an error.
///
/// # Errors
///
/// Returns `FrontendError::InvalidInput` if `window_len` or `stride_len`
/// is zero
pub fn frame_signal(
    samples: &[f32],
    window_len: usize,
    stride_len: usize,
) -> Result<Vec<Vec<f32>>, FrontendError> {
    if window_len == 0 {
        return Err(FrontendError::InvalidInput(
            "Window length must be > 0".to_string(),
        ));
    }

    if stride_len == 0 {
        return Err(FrontendError::InvalidInput(
            "Stride length must be > 0".to_string(),
        ));
    }

    if samples.len() < window_len {
        log::warn!(
            "Window length ({}) larger than input length ({}), returning no frames",
            window_len,
            samples.len()
        );
        return Ok(Vec::new());
    }

    let num_frames = (samples.len() - window_len) / stride_len + 1;
    let mut frames = Vec::with_capacity(num_frames);

    for i in 0..num_frames {
        let start = i * stride_len;
        frames.push(samples[start..start + window_len].to_vec());
    }

    Ok(frames)
}
