use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::models::Manifest;
use crate::state::AppState;

pub async fn get_version_manifest(State(state): State<AppState>) -> impl IntoResponse {
    let manifest = Manifest::from_release(&state.config.release);

    tracing::debug!("served manifest for {}", manifest.version);

    (
        StatusCode::OK,
        [(header::CACHE_CONTROL, state.config.cache.header_value())],
        Json(manifest),
    )
}
