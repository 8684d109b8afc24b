//! Feature extraction modules
//!
//! This module contains the stages that turn preprocessed samples into the
//! final feature tensor:
//! - Framing (overlapping window extraction)
//! - Spectrum (Hann window, FFT, one-sided log-power)
//! - Normalization (per-bin standardization)
//! - Tensor (output container)

pub mod framing;
pub mod normalize;
pub mod spectrum;
pub mod tensor;
