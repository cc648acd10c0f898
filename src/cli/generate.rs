//! CLI entry-point for running one generation job headless.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Args as ClapArgs};
use tracing::instrument;

use crate::{
    config::Settings,
    pipeline,
    request::{AnimationMode, DrivingOption, GenerationRequest},
};

/// Flags mirror the browser form, defaults included.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Reference image to animate.
    #[arg(long)]
    pub reference_image: PathBuf,
    /// Driving audio clip.
    #[arg(long)]
    pub input_audio: PathBuf,
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub normalize_lip: bool,
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub relative_motion: bool,
    #[arg(long, default_value_t = 1.0)]
    pub driving_multiplier: f64,
    #[arg(long, value_enum, default_value_t = AnimationMode::Human)]
    pub animation_mode: AnimationMode,
    #[arg(long, value_enum, default_value_t = DrivingOption::ExpressionFriendly)]
    pub driving_option: DrivingOption,
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub crop_input: bool,
    #[arg(long, default_value_t = 2.3)]
    pub crop_scale: f64,
    #[arg(long, default_value_t = 0.0)]
    pub crop_x_offset: f64,
    #[arg(long, default_value_t = -0.125)]
    pub crop_y_offset: f64,
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub stitching: bool,
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub paste_back: bool,
    #[arg(long, default_value_t = 4.0)]
    pub cfg_scale: f64,
}

impl Args {
    fn into_request(self) -> GenerationRequest {
        GenerationRequest {
            reference_image: self.reference_image,
            input_audio: self.input_audio,
            normalize_lip: self.normalize_lip,
            relative_motion: self.relative_motion,
            driving_multiplier: self.driving_multiplier,
            animation_mode: self.animation_mode,
            driving_option: self.driving_option,
            crop_input: self.crop_input,
            crop_scale: self.crop_scale,
            crop_x_offset: self.crop_x_offset,
            crop_y_offset: self.crop_y_offset,
            stitching: self.stitching,
            paste_back: self.paste_back,
            cfg_scale: self.cfg_scale,
        }
    }
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let request = args.into_request();
    request.validate().context("invalid generation request")?;

    let dispatcher = pipeline::load(&settings);
    let artifact = tokio::task::spawn_blocking(move || dispatcher.dispatch(&request))
        .await?
        .context("generation failed")?;
    println!("{}", artifact.path.display());
    Ok(())
}
