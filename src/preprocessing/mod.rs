//! Audio preprocessing modules
//!
//! This module contains utilities for preparing audio for feature extraction:
//! - Channel selection (interleaved multi-channel to channel 0)
//! - Sample rate conversion (downsampling to the target rate)

pub mod channels;
pub mod resample;
