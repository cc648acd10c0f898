//! Typed model for one audio-to-video generation job.
//!
//! One request is built per user interaction, validated at the interface
//! layer, handed to the dispatcher, and discarded. It carries no identity
//! and is never persisted.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Subject category selecting which backing pipeline services a job.
///
/// Free-form text maps to a mode with the rule the legacy frontend used:
/// the exact literal `"animal"` selects [`AnimationMode::Animal`], anything
/// else falls back to [`AnimationMode::Human`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum AnimationMode {
    Human,
    Animal,
}

impl From<String> for AnimationMode {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<&str> for AnimationMode {
    fn from(value: &str) -> Self {
        if value == "animal" {
            Self::Animal
        } else {
            Self::Human
        }
    }
}

impl fmt::Display for AnimationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => f.write_str("human"),
            Self::Animal => f.write_str("animal"),
        }
    }
}

/// Whether motion transfer favours expression detail or head pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DrivingOption {
    ExpressionFriendly,
    PoseFriendly,
}

impl fmt::Display for DrivingOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpressionFriendly => f.write_str("expression-friendly"),
            Self::PoseFriendly => f.write_str("pose-friendly"),
        }
    }
}

/// One generation job, field for field what the form or CLI collected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub reference_image: PathBuf,
    pub input_audio: PathBuf,
    pub normalize_lip: bool,
    pub relative_motion: bool,
    pub driving_multiplier: f64,
    pub animation_mode: AnimationMode,
    pub driving_option: DrivingOption,
    pub crop_input: bool,
    pub crop_scale: f64,
    pub crop_x_offset: f64,
    pub crop_y_offset: f64,
    pub stitching: bool,
    pub paste_back: bool,
    pub cfg_scale: f64,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            reference_image: PathBuf::new(),
            input_audio: PathBuf::new(),
            normalize_lip: true,
            relative_motion: true,
            driving_multiplier: 1.0,
            animation_mode: AnimationMode::Human,
            driving_option: DrivingOption::ExpressionFriendly,
            crop_input: true,
            crop_scale: 2.3,
            crop_x_offset: 0.0,
            crop_y_offset: -0.125,
            stitching: true,
            paste_back: true,
            cfg_scale: 4.0,
        }
    }
}

impl GenerationRequest {
    /// Check the request is serviceable: both inputs readable, every numeric
    /// control within its documented domain. Runs before dispatch; the
    /// dispatcher itself never inspects anything but the mode.
    pub fn validate(&self) -> Result<(), RequestError> {
        if !is_readable_file(&self.reference_image) {
            return Err(RequestError::ImageNotReadable(self.reference_image.clone()));
        }
        if !is_readable_file(&self.input_audio) {
            return Err(RequestError::AudioNotReadable(self.input_audio.clone()));
        }
        check_range("driving_multiplier", self.driving_multiplier, 0.0, 2.0)?;
        check_range("crop_scale", self.crop_scale, 1.8, 4.0)?;
        check_range("crop_x_offset", self.crop_x_offset, -0.5, 0.5)?;
        check_range("crop_y_offset", self.crop_y_offset, -0.5, 0.5)?;
        check_range("cfg_scale", self.cfg_scale, 0.0, 10.0)?;
        Ok(())
    }
}

fn is_readable_file(path: &Path) -> bool {
    std::fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), RequestError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(RequestError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// Faults detected while validating a request at the interface layer.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("reference image is not a readable file: {0:?}")]
    ImageNotReadable(PathBuf),
    #[error("input audio is not a readable file: {0:?}")]
    AudioNotReadable(PathBuf),
    #[error("{field} = {value} outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}
