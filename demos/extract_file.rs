//! Example: Extract features from a WAV file
//!
//! Usage: cargo run --example extract_file -- path/to/audio.wav

use stft_frontend::preprocessing::channels::primary_channel;
use stft_frontend::{extract_features, FrontendConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .ok_or("Usage: extract_file <audio.wav>")?;

    // Load audio
    let mut reader = hound::WavReader::open(&path)?;
    let spec = reader.spec();
    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader.samples::<f32>().collect::<Result<Vec<_>, _>>()?,
        hound::SampleFormat::Int => {
            let max_value = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|s| s as f32 / max_value))
                .collect::<Result<Vec<_>, _>>()?
        }
    };
    let mono = primary_channel(&samples, spec.channels as usize)?;

    // Extract
    let features = extract_features(&mono, spec.sample_rate, FrontendConfig::default())?;

    // Print results
    println!("Feature extraction:");
    println!(
        "  Input: {} samples at {} Hz ({} channel(s))",
        mono.len(),
        spec.sample_rate,
        spec.channels
    );
    println!("  Tensor shape: {:?}", features.shape());
    if let Some(first) = features.frame(0) {
        let min = first.iter().copied().fold(f32::INFINITY, f32::min);
        let max = first.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        println!("  First frame range: [{:.3}, {:.3}]", min, max);
    }

    Ok(())
}
