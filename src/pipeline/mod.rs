//! Generation pipeline seam and startup wiring.
//!
//! The model runtime lives behind the [`Pipeline`] trait. Two instances are
//! built once at process start, one per subject category, and shared
//! read-only across every request for the life of the process.

pub mod backend;
pub mod config;
pub mod dispatch;

use std::{path::PathBuf, sync::Arc};

use thiserror::Error;

use crate::{
    config::Settings,
    request::{AnimationMode, GenerationRequest},
};

use backend::ProcessPipeline;
use config::{CropConfig, InferenceConfig};
use dispatch::Dispatcher;

/// Reference to a rendered video artifact on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoArtifact {
    pub path: PathBuf,
}

/// One subject-specific generation backend.
///
/// Implementations must tolerate concurrent calls; any serialization of
/// access to the underlying model resource happens behind this trait, not
/// in front of it.
pub trait Pipeline: Send + Sync {
    fn generate(&self, request: &GenerationRequest) -> Result<VideoArtifact, PipelineError>;
}

/// Faults raised by a backing pipeline, relayed to the caller untouched.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to launch inference backend {program:?}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("inference backend exited with {status}: {stderr}")]
    Backend {
        status: std::process::ExitStatus,
        stderr: String,
    },
    #[error("inference backend reported success but wrote no artifact at {0:?}")]
    MissingArtifact(PathBuf),
}

/// Build both subject pipelines from the startup configuration and wire
/// them into a dispatcher.
pub fn load(settings: &Settings) -> Dispatcher {
    let inference = InferenceConfig {
        model_dir: settings.model_dir.clone(),
        ..InferenceConfig::default()
    };
    let crop = CropConfig::default();
    let human = ProcessPipeline::new(
        AnimationMode::Human,
        settings,
        inference.clone(),
        crop.clone(),
    );
    let animal = ProcessPipeline::new(AnimationMode::Animal, settings, inference, crop);
    Dispatcher::new(Arc::new(human), Arc::new(animal))
}
