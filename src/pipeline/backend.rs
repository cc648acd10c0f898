//! Process-backed pipeline implementation.
//!
//! The model runtime is reached over a process boundary: one inference
//! command per job, fed the whole request as flags and expected to write
//! the artifact at the path it is handed.

use std::{ffi::OsString, path::PathBuf, process::Command};

use chrono::Utc;
use tracing::{info, warn};

use crate::{
    config::Settings,
    request::{AnimationMode, GenerationRequest},
};

use super::{
    config::{CropConfig, InferenceConfig},
    Pipeline, PipelineError, VideoArtifact,
};

/// Pipeline instance invoking the external inference program for one
/// subject category. Checkpoints are resolved per category so the two
/// instances stay independently tuned.
pub struct ProcessPipeline {
    mode: AnimationMode,
    program: PathBuf,
    outputs_dir: PathBuf,
    temp_dir: PathBuf,
    inference: InferenceConfig,
    crop: CropConfig,
}

impl ProcessPipeline {
    pub fn new(
        mode: AnimationMode,
        settings: &Settings,
        inference: InferenceConfig,
        crop: CropConfig,
    ) -> Self {
        Self {
            mode,
            program: settings.backend_program.clone(),
            outputs_dir: settings.outputs_dir.clone(),
            temp_dir: settings.temp_dir.clone(),
            inference,
            crop,
        }
    }

    fn output_path(&self) -> PathBuf {
        let stamp = Utc::now().format("%Y%m%dT%H%M%S%.3f");
        self.outputs_dir.join(format!("{}-{stamp}.mp4", self.mode))
    }

    fn config_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::new();
        args.push("--model-dir".into());
        args.push(self.inference.model_dir.join(self.mode.to_string()).into());
        args.push("--device-id".into());
        args.push(self.inference.device_id.to_string().into());
        args.push("--half-precision".into());
        args.push(self.inference.half_precision.to_string().into());
        args.push("--sampling-steps".into());
        args.push(self.inference.sampling_steps.to_string().into());
        args.push("--detector-threshold".into());
        args.push(self.crop.detector_threshold.to_string().into());
        args.push("--source-max-dim".into());
        args.push(self.crop.source_max_dim.to_string().into());
        args.push("--temp-dir".into());
        args.push(self.temp_dir.clone().into());
        args
    }
}

impl Pipeline for ProcessPipeline {
    fn generate(&self, request: &GenerationRequest) -> Result<VideoArtifact, PipelineError> {
        let output = self.output_path();
        let mut command = Command::new(&self.program);
        command.args(request_args(request));
        command.args(self.config_args());
        command.arg("--output").arg(&output);

        info!(program = %self.program.display(), mode = %self.mode, "running inference backend");
        let done = command.output().map_err(|source| PipelineError::Spawn {
            program: self.program.clone(),
            source,
        })?;
        if !done.status.success() {
            let stderr = String::from_utf8_lossy(&done.stderr).trim().to_string();
            warn!(status = %done.status, "inference backend failed");
            return Err(PipelineError::Backend {
                status: done.status,
                stderr,
            });
        }
        if !output.is_file() {
            return Err(PipelineError::MissingArtifact(output));
        }
        info!(path = %output.display(), "rendered video artifact");
        Ok(VideoArtifact { path: output })
    }
}

/// Flag rendition of a request, field for field in form order.
pub fn request_args(request: &GenerationRequest) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::new();
    args.push("--reference-image".into());
    args.push(request.reference_image.clone().into());
    args.push("--input-audio".into());
    args.push(request.input_audio.clone().into());
    args.push("--normalize-lip".into());
    args.push(request.normalize_lip.to_string().into());
    args.push("--relative-motion".into());
    args.push(request.relative_motion.to_string().into());
    args.push("--driving-multiplier".into());
    args.push(request.driving_multiplier.to_string().into());
    args.push("--mode".into());
    args.push(request.animation_mode.to_string().into());
    args.push("--driving-option".into());
    args.push(request.driving_option.to_string().into());
    args.push("--crop-input".into());
    args.push(request.crop_input.to_string().into());
    args.push("--crop-scale".into());
    args.push(request.crop_scale.to_string().into());
    args.push("--crop-x-offset".into());
    args.push(request.crop_x_offset.to_string().into());
    args.push("--crop-y-offset".into());
    args.push(request.crop_y_offset.to_string().into());
    args.push("--stitching".into());
    args.push(request.stitching.to_string().into());
    args.push("--paste-back".into());
    args.push(request.paste_back.to_string().into());
    args.push("--cfg-scale".into());
    args.push(request.cfg_scale.to_string().into());
    args
}
