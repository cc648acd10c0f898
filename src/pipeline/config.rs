//! Configuration value objects consumed when the pipelines are built.
//!
//! Both structs are opaque to the dispatcher; the backend serializes them
//! into flags for the inference process.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Model-runtime settings shared by both subject pipelines.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Root folder holding model checkpoints.
    pub model_dir: PathBuf,
    /// CUDA device ordinal.
    pub device_id: u32,
    /// Run the motion generator in half precision.
    pub half_precision: bool,
    /// Diffusion sampling steps per audio window.
    pub sampling_steps: u32,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("./checkpoints"),
            device_id: 0,
            half_precision: true,
            sampling_steps: 25,
        }
    }
}

/// Face-detection settings applied when the reference image is cropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CropConfig {
    /// Minimum detector confidence before a face is accepted.
    pub detector_threshold: f64,
    /// Longest side the source image is resized to before detection.
    pub source_max_dim: u32,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            detector_threshold: 0.5,
            source_max_dim: 1280,
        }
    }
}
