//! Example: Extract features from a synthesized tone
//!
//! Synthesizes one second of a 1 kHz tone, extracts features, and prints
//! the strongest frequency bin of the first few frames. No files needed.

use stft_frontend::features::framing::frame_signal;
use stft_frontend::features::spectrum::log_power_spectrum;
use stft_frontend::{extract_features, FrontendConfig, TARGET_SAMPLE_RATE};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let freq = 1000.0;
    let samples: Vec<f32> = (0..TARGET_SAMPLE_RATE as usize)
        .map(|i| {
            let t = i as f32 / TARGET_SAMPLE_RATE as f32;
            0.5 * (2.0 * std::f32::consts::PI * freq * t).sin()
        })
        .collect();

    let config = FrontendConfig::default();
    let features = extract_features(&samples, TARGET_SAMPLE_RATE, config)?;
    println!("Tensor shape: {:?}", features.shape());

    // Peak bins straight from the spectral stage (pre-normalization)
    let window_len = config.window_samples(TARGET_SAMPLE_RATE);
    let stride_len = config.stride_samples(TARGET_SAMPLE_RATE);
    let frames = frame_signal(&samples, window_len, stride_len)?;
    let spectra = log_power_spectrum(&frames, window_len, TARGET_SAMPLE_RATE)?;

    let bin_width = TARGET_SAMPLE_RATE as f32 / window_len as f32;
    for (i, row) in spectra.iter().take(5).enumerate() {
        if let Some((peak_bin, peak_value)) = row
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(bin, &v)| (bin, v))
        {
            println!(
                "  Frame {}: peak bin {} ({:.0} Hz), log-power {:.2}",
                i,
                peak_bin,
                peak_bin as f32 * bin_width,
                peak_value
            );
        }
    }

    Ok(())
}
