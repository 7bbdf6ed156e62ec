use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::Json};

use subtitle_application::{GenerateSubtitlesRequest, GenerateSubtitlesResponse};

use crate::error::{error_mapper, HttpError};
use crate::AppState;

pub async fn generate_subtitles(
    State(state): State<AppState>,
    Json(request): Json<GenerateSubtitlesRequest>,
) -> Result<(StatusCode, Json<GenerateSubtitlesResponse>), HttpError> {
    let started = Instant::now();
    tracing::info!(
        payload_bytes = request.audio.len(),
        "received subtitle request"
    );

    match state.usecase.generate(request).await {
        Ok(result) => {
            tracing::info!(
                srt_bytes = result.srt.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "subtitle request completed"
            );
            Ok((StatusCode::OK, Json(result)))
        }
        Err(error) => {
            tracing::error!(error = %error, "subtitle request failed");
            Err(error_mapper(error))
        }
    }
}

pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
