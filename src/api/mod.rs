//! HTTP layer exposing the generation surface and the static form.

pub mod routes;
pub mod types;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;

use crate::{config::Settings, pipeline, pipeline::dispatch::Dispatcher};

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    pub settings: Settings,
}

/// Serve the JSON API and static form until interrupted.
///
/// `share` widens the bind address to every interface and relaxes CORS so
/// the link can be handed out; tunnelling is left to whatever fronts the
/// port.
pub async fn serve(settings: Settings, host: String, port: u16, share: bool) -> Result<()> {
    let dispatcher = Arc::new(pipeline::load(&settings));
    let state = AppState {
        dispatcher,
        settings,
    };
    let static_dir = ServeDir::new("src/ui/static");
    let mut router = Router::new()
        .route("/generate", post(routes::generate))
        .route("/healthz", get(routes::healthz))
        .fallback_service(static_dir)
        .layer(TraceLayer::new_for_http())
        .with_state(state);
    if share {
        router = router.layer(CorsLayer::permissive());
    }

    let bind_host = if share { "0.0.0.0" } else { host.as_str() };
    let addr: SocketAddr = format!("{bind_host}:{port}").parse()?;
    info!(%addr, share, "serving a2v-studio API");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}
