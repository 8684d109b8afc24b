//! Feature tensor output type

use crate::error::FrontendError;
use serde::{Deserialize, Serialize};

/// Normalized feature tensor produced by the pipeline
///
/// Stores features contiguously in row-major order with logical shape
/// `[num_frames, num_bins, 1, 1]`. The two trailing singleton dimensions
/// match the 4-D input layout acoustic models expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureTensor {
    data: Vec<f32>,
    shape: [usize; 4],
}

impl FeatureTensor {
    /// Build a tensor from row-major data
    ///
    /// # Errors
    ///
    /// Returns `FrontendError::ProcessingError` if `data.len()` is not
    /// `num_frames * num_bins`
    pub fn new(data: Vec<f32>, num_frames: usize, num_bins: usize) -> Result<Self, FrontendError> {
        if data.len() != num_frames * num_bins {
            return Err(FrontendError::ProcessingError(format!(
                "Tensor data length {} does not match shape [{}, {}, 1, 1]",
                data.len(),
                num_frames,
                num_bins
            )));
        }

        Ok(Self {
            data,
            shape: [num_frames, num_bins, 1, 1],
        })
    }

    /// Zero-frame tensor for inputs too short to fill a single window
    pub fn empty(num_bins: usize) -> Self {
        Self {
            data: Vec::new(),
            shape: [0, num_bins, 1, 1],
        }
    }

    /// Logical shape `[num_frames, num_bins, 1, 1]`
    pub fn shape(&self) -> [usize; 4] {
        self.shape
    }

    /// Number of analysis frames
    pub fn num_frames(&self) -> usize {
        self.shape[0]
    }

    /// Number of frequency bins per frame
    pub fn num_bins(&self) -> usize {
        self.shape[1]
    }

    /// True when the tensor holds no frames
    pub fn is_empty(&self) -> bool {
        self.shape[0] == 0
    }

    /// Contiguous row-major feature data
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// One frame's feature row, or `None` if `index` is out of range
    pub fn frame(&self, index: usize) -> Option<&[f32]> {
        if index >= self.num_frames() {
            return None;
        }
        let start = index * self.num_bins();
        Some(&self.data[start..start + self.num_bins()])
    }

    /// Single feature value, or `None` if either index is out of range
    pub fn get(&self, frame: usize, bin: usize) -> Option<f32> {
        if frame >= self.num_frames() || bin >= self.num_bins() {
            return None;
        }
        Some(self.data[frame * self.num_bins() + bin])
    }
}
