pub mod health;
pub mod version;

use axum::{Router, routing::get};

use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/version.json", get(version::get_version_manifest))
}
