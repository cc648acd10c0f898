//! HTTP route handlers for Axum.

use axum::{extract::State, http::StatusCode, Json};
use tracing::warn;

use crate::api::types::{GenerateRequestDto, GenerateResponseDto};

use super::AppState;

type ApiResult<T> = Result<Json<T>, (StatusCode, String)>;

/// Run one generation job. Validation happens here; the dispatcher only
/// routes. Generation blocks its request, so the call moves to a blocking
/// worker while the async surface keeps serving.
pub async fn generate(
    State(state): State<AppState>,
    Json(dto): Json<GenerateRequestDto>,
) -> ApiResult<GenerateResponseDto> {
    let request = dto.into_request();
    if let Err(err) = request.validate() {
        warn!(%err, "rejecting generation request");
        return Err((StatusCode::UNPROCESSABLE_ENTITY, err.to_string()));
    }

    let dispatcher = state.dispatcher.clone();
    let artifact = tokio::task::spawn_blocking(move || dispatcher.dispatch(&request))
        .await
        .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?
        .map_err(|err| (StatusCode::BAD_GATEWAY, err.to_string()))?;

    Ok(Json(GenerateResponseDto {
        video: artifact.path,
    }))
}

pub async fn healthz() -> &'static str {
    "ok"
}
