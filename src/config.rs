//! Runtime configuration utilities for a2v-studio.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Program invoked to run model inference for one job.
    pub backend_program: PathBuf,
    /// Root folder holding model checkpoints.
    pub model_dir: PathBuf,
    /// Root folder for rendered video artifacts.
    pub outputs_dir: PathBuf,
    /// Scratch folder for uploaded reference material.
    pub temp_dir: PathBuf,
    /// Default bind address for `serve`.
    pub server_host: String,
    /// Default listening port for `serve`.
    pub server_port: u16,
    /// Default share-link exposure for `serve`.
    pub share: bool,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let backend_program = env::var("A2V_BACKEND")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("a2v-infer"));
        let model_dir = env::var("A2V_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./checkpoints"));
        let outputs_dir = env::var("A2V_OUTPUTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./outputs"));
        let temp_dir = env::var("A2V_TEMP_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./a2v_temp"));
        let server_host =
            env::var("A2V_SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let server_port = env::var("A2V_SERVER_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(7860);
        let share = env::var("A2V_SHARE")
            .ok()
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        std::fs::create_dir_all(&outputs_dir).context("creating outputs dir")?;
        std::fs::create_dir_all(&temp_dir).context("creating temp dir")?;

        Ok(Self {
            backend_program,
            model_dir,
            outputs_dir,
            temp_dir,
            server_host,
            server_port,
            share,
        })
    }

    /// Convenience helper for derived artifact path segments.
    pub fn join_output<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.outputs_dir.join(path)
    }
}
