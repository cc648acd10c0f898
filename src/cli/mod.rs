//! Command-line interface wiring for a2v-studio.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod generate;
pub mod serve;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Audio-driven portrait animation frontend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Generate(args) => generate::run(args, settings).await,
            Commands::Serve(args) => serve::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render one video from a reference image and a driving audio clip.
    Generate(generate::Args),
    /// Serve the JSON API and static form.
    Serve(serve::Args),
}
