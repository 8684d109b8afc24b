//! Channel selection utilities
//!
//! Decoders commonly hand over interleaved multi-channel sample data. The
//! feature pipeline consumes a single channel, so hosts reduce the buffer to
//! channel 0 before extraction. Multi-channel fusion is out of scope.

use crate::error::FrontendError;

/// Extract the primary (first) channel from an interleaved buffer
///
/// # Arguments
///
/// * `interleaved` - Samples interleaved as `[ch0, ch1, ..., ch0, ch1, ...]`
/// * `channel_count` - Number of interleaved channels
///
/// # Returns
///
/// Samples of channel 0 only
///
/// # Errors
///
/// Returns `FrontendError::InvalidInput` if `channel_count` is zero
pub fn primary_channel(
    interleaved: &[f32],
    channel_count: usize,
) -> Result<Vec<f32>, FrontendError> {
    if channel_count == 0 {
        return Err(FrontendError::InvalidInput(
            "Channel count must be > 0".to_string(),
        ));
    }

    if channel_count == 1 {
        return Ok(interleaved.to_vec());
    }

    log::debug!(
        "Selecting channel 0 of {} from {} interleaved samples",
        channel_count,
        interleaved.len()
    );

    Ok(interleaved.iter().step_by(channel_count).copied().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mono_passthrough() {
        let samples = vec![0.1, 0.2, 0.3];
        let mono = primary_channel(&samples, 1).unwrap();
        assert_eq!(mono, samples);
    }

    #[test]
    fn test_stereo_picks_first_channel() {
        let interleaved = vec![0.1, -0.1, 0.2, -0.2, 0.3, -0.3];
        let mono = primary_channel(&interleaved, 2).unwrap();
        assert_eq!(mono, vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_partial_last_frame() {
        // Trailing samples that do not fill a full frame still yield their
        // channel-0 sample
        let interleaved = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let mono = primary_channel(&interleaved, 2).unwrap();
        assert_eq!(mono, vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn test_empty_input() {
        let mono = primary_channel(&[], 2).unwrap();
        assert!(mono.is_empty());
    }

    #[test]
    fn test_zero_channels_rejected() {
        let result = primary_channel(&[0.1, 0.2], 0);
        assert!(result.is_err());
    }
}
