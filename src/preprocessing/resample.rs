//! Sample rate conversion (downsampling only)
//!
//! The acoustic model expects audio at a fixed rate, so recordings captured
//! at higher rates are downsampled before feature extraction. Input at or
//! below the target rate is passed through unchanged.
//!
//! Algorithm:
//! 1. Low-pass the signal at the source rate to suppress content above the
//!    target Nyquist frequency (two cascaded biquads, 4th-order Butterworth)
//! 2. Read the filtered signal back out at the rate ratio using linear
//!    interpolation, producing `round(len * target / source)` samples
//!
//! # Example
//!
//! ```
//! use stft_frontend::preprocessing::resample::resample;
//!
//! let samples = vec![0.0f32; 44_100];
//! let resampled = resample(&samples, 44_100, 16_000);
//! assert_eq!(resampled.len(), 16_000);
//! ```

/// Q values for a 4th-order Butterworth low-pass split into two biquads
const BUTTERWORTH_Q: [f32; 2] = [0.541_196_1, 1.306_563];

/// Anti-alias cutoff as a fraction of the target rate
///
/// Kept below the target Nyquist (0.5) so the filter transition band has
/// rolled off before the folding frequency.
const CUTOFF_RATIO: f32 = 0.45;

/// Second-order low-pass section (RBJ cookbook coefficients)
struct LowPassFilter {
    // Direct Form II transposed only needs two state variables
    x1: f32,
    x2: f32,
    b0: f32,
    b1: f32,
    b2: f32,
    a1: f32,
    a2: f32,
}

impl LowPassFilter {
    fn new(cutoff_hz: f32, sample_rate: f32, q: f32) -> Self {
        let w0 = 2.0 * std::f32::consts::PI * cutoff_hz / sample_rate;
        let cos_w0 = w0.cos();
        let sin_w0 = w0.sin();
        let alpha = sin_w0 / (2.0 * q);

        let b0 = (1.0 - cos_w0) / 2.0;
        let b1 = 1.0 - cos_w0;
        let b2 = (1.0 - cos_w0) / 2.0;
        let a0 = 1.0 + alpha;
        let a1 = -2.0 * cos_w0;
        let a2 = 1.0 - alpha;

        Self {
            x1: 0.0,
            x2: 0.0,
            b0: b0 / a0,
            b1: b1 / a0,
            b2: b2 / a0,
            a1: a1 / a0,
            a2: a2 / a0,
        }
    }

    fn process(&mut self, sample: f32) -> f32 {
        // Direct Form II transposed implementation
        let output = self.b0 * sample + self.x1;
        self.x1 = self.b1 * sample + self.x2 - self.a1 * output;
        self.x2 = self.b2 * sample - self.a2 * output;
        output
    }
}

/// Downsample audio to the target rate
///
/// Applies an anti-alias low-pass at the source rate, then reads the
/// filtered signal out at the rate ratio with linear interpolation. The
/// output holds `round(len * target_rate / source_rate)` samples.
///
/// When `source_rate <= target_rate` the input is returned unchanged;
/// upsampling is out of scope. Empty input produces empty output. This
/// stage has no error conditions.
///
/// # Arguments
///
/// * `samples` - Mono audio samples
/// * `source_rate` - Rate the samples were captured at, in Hz
/// * `target_rate` - Rate to convert to, in Hz
///
/// # Returns
///
/// Samples at the target rate
pub fn resample(samples: &[f32], source_rate: u32, target_rate: u32) -> Vec<f32> {
    if samples.is_empty() {
        return Vec::new();
    }

    if source_rate <= target_rate {
        return samples.to_vec();
    }

    log::debug!(
        "Resampling {} samples from {} Hz to {} Hz",
        samples.len(),
        source_rate,
        target_rate
    );

    // Step 1: anti-alias low-pass at the source rate
    let cutoff_hz = CUTOFF_RATIO * target_rate as f32;
    let mut sections: Vec<LowPassFilter> = BUTTERWORTH_Q
        .iter()
        .map(|&q| LowPassFilter::new(cutoff_hz, source_rate as f32, q))
        .collect();

    let filtered: Vec<f32> = samples
        .iter()
        .map(|&s| sections.iter_mut().fold(s, |acc, f| f.process(acc)))
        .collect();

    // Step 2: linear-interpolation readout at the rate ratio
    let ratio = f64::from(target_rate) / f64::from(source_rate);
    let out_len = (samples.len() as f64 * ratio).round() as usize;
    let last = filtered.len() - 1;

    let mut output = Vec::with_capacity(out_len);
    for i in 0..out_len {
        let src_pos = i as f64 / ratio;
        let idx = src_pos as usize;
        let frac = (src_pos - idx as f64) as f32;

        let s0 = filtered[idx.min(last)];
        let s1 = filtered[(idx + 1).min(last)];
        output.push(s0 + (s1 - s0) * frac);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Generate a sine wave at the given frequency
    fn generate_tone(freq: f32, num_samples: usize, amplitude: f32, sample_rate: f32) -> Vec<f32> {
        (0..num_samples)
            .map(|i| {
                let t = i as f32 / sample_rate;
                amplitude * (2.0 * std::f32::consts::PI * freq * t).sin()
            })
            .collect()
    }

    #[test]
    fn test_passthrough_at_target_rate() {
        let samples = generate_tone(440.0, 1600, 0.5, 16_000.0);
        let out = resample(&samples, 16_000, 16_000);
        assert_eq!(out, samples);
    }

    #[test]
    fn test_passthrough_below_target_rate() {
        let samples = generate_tone(440.0, 800, 0.5, 8_000.0);
        let out = resample(&samples, 8_000, 16_000);
        assert_eq!(out, samples);
    }

    #[test]
    fn test_empty_input() {
        let out = resample(&[], 44_100, 16_000);
        assert!(out.is_empty());
    }

    #[test]
    fn test_output_length_rounding() {
        // 1000 samples at 48 kHz -> round(1000 / 3) = 333
        let samples = vec![0.0f32; 1000];
        let out = resample(&samples, 48_000, 16_000);
        assert_eq!(out.len(), 333);

        // One second at 44.1 kHz -> exactly 16000
        let samples = vec![0.0f32; 44_100];
        let out = resample(&samples, 44_100, 16_000);
        assert_eq!(out.len(), 16_000);
    }

    #[test]
    fn test_zeros_stay_zeros() {
        let samples = vec![0.0f32; 44_100];
        let out = resample(&samples, 44_100, 16_000);
        assert!(out.iter().all(|&x| x == 0.0), "Zero input must map to zero output");
    }

    #[test]
    fn test_dc_level_preserved() {
        // The low-pass has unity DC gain, so a constant signal converges to
        // the same constant once the filter transient has settled
        let samples = vec![0.25f32; 32_000];
        let out = resample(&samples, 32_000, 16_000);
        assert_eq!(out.len(), 16_000);

        for &x in &out[8_000..] {
            assert!(
                (x - 0.25).abs() < 1e-3,
                "DC level should settle at 0.25, got {}",
                x
            );
        }
    }

    #[test]
    fn test_passband_tone_amplitude_preserved() {
        // 1 kHz is far below the 7.2 kHz cutoff, so its amplitude should
        // survive the downsample from 48 kHz
        let samples = generate_tone(1000.0, 24_000, 0.5, 48_000.0);
        let out = resample(&samples, 48_000, 16_000);
        assert_eq!(out.len(), 8_000);

        let peak = out[2_000..6_000]
            .iter()
            .map(|&x| x.abs())
            .fold(0.0f32, f32::max);
        assert!(
            (peak - 0.5).abs() < 0.05,
            "Passband tone peak should be ~0.5, got {:.3}",
            peak
        );
    }

    #[test]
    fn test_deterministic() {
        let samples = generate_tone(700.0, 22_050, 0.4, 22_050.0);
        let a = resample(&samples, 22_050, 16_000);
        let b = resample(&samples, 22_050, 16_000);
        assert_eq!(a, b);
    }
}
