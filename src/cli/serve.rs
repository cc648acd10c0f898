//! CLI entry-point for serving the HTTP API and static form.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{api, config::Settings};

/// Run the Axum server.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Listening port; falls back to the configured default.
    #[arg(long)]
    pub port: Option<u16>,
    /// Bind address; falls back to the configured default.
    #[arg(long)]
    pub host: Option<String>,
    /// Expose the surface on every interface so the link can be shared.
    #[arg(long)]
    pub share: bool,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let host = args
        .host
        .clone()
        .unwrap_or_else(|| settings.server_host.clone());
    let port = args.port.unwrap_or(settings.server_port);
    let share = args.share || settings.share;
    api::serve(settings, host, port, share).await
}
