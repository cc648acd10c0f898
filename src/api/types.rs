//! Shared DTOs for JSON requests and responses.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::request::{AnimationMode, DrivingOption, GenerationRequest};

/// Body of `POST /generate`. Both media paths are required; every other
/// field falls back to the form default when omitted.
#[derive(Debug, Deserialize)]
pub struct GenerateRequestDto {
    pub reference_image: PathBuf,
    pub input_audio: PathBuf,
    pub normalize_lip: Option<bool>,
    pub relative_motion: Option<bool>,
    pub driving_multiplier: Option<f64>,
    pub animation_mode: Option<AnimationMode>,
    pub driving_option: Option<DrivingOption>,
    pub crop_input: Option<bool>,
    pub crop_scale: Option<f64>,
    pub crop_x_offset: Option<f64>,
    pub crop_y_offset: Option<f64>,
    pub stitching: Option<bool>,
    pub paste_back: Option<bool>,
    pub cfg_scale: Option<f64>,
}

impl GenerateRequestDto {
    pub fn into_request(self) -> GenerationRequest {
        let defaults = GenerationRequest::default();
        GenerationRequest {
            reference_image: self.reference_image,
            input_audio: self.input_audio,
            normalize_lip: self.normalize_lip.unwrap_or(defaults.normalize_lip),
            relative_motion: self.relative_motion.unwrap_or(defaults.relative_motion),
            driving_multiplier: self
                .driving_multiplier
                .unwrap_or(defaults.driving_multiplier),
            animation_mode: self.animation_mode.unwrap_or(defaults.animation_mode),
            driving_option: self.driving_option.unwrap_or(defaults.driving_option),
            crop_input: self.crop_input.unwrap_or(defaults.crop_input),
            crop_scale: self.crop_scale.unwrap_or(defaults.crop_scale),
            crop_x_offset: self.crop_x_offset.unwrap_or(defaults.crop_x_offset),
            crop_y_offset: self.crop_y_offset.unwrap_or(defaults.crop_y_offset),
            stitching: self.stitching.unwrap_or(defaults.stitching),
            paste_back: self.paste_back.unwrap_or(defaults.paste_back),
            cfg_scale: self.cfg_scale.unwrap_or(defaults.cfg_scale),
        }
    }
}

/// Body returned by `POST /generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponseDto {
    pub video: PathBuf,
}
