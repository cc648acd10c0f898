//! Request routing onto the two subject pipelines.

use std::sync::Arc;

use tracing::debug;

use crate::request::{AnimationMode, GenerationRequest};

use super::{Pipeline, PipelineError, VideoArtifact};

/// Routes one generation request to the pipeline serving its subject
/// category and relays the outcome untouched.
///
/// Holds immutable handles to pipelines built once at startup; it never
/// mutates them, retries, caches, or reshapes a request on the way through.
pub struct Dispatcher {
    human: Arc<dyn Pipeline>,
    animal: Arc<dyn Pipeline>,
}

impl Dispatcher {
    pub fn new(human: Arc<dyn Pipeline>, animal: Arc<dyn Pipeline>) -> Self {
        Self { human, animal }
    }

    /// Forward `request` to the matching pipeline. Every field reaches the
    /// backend intact and the backend's result or fault comes back
    /// unchanged.
    pub fn dispatch(&self, request: &GenerationRequest) -> Result<VideoArtifact, PipelineError> {
        let target = match request.animation_mode {
            AnimationMode::Animal => &self.animal,
            AnimationMode::Human => &self.human,
        };
        debug!(mode = %request.animation_mode, "dispatching generation request");
        target.generate(request)
    }
}
