pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::deed::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // By-product files are served read-only; the handlers never write here.
    let generated = ServeDir::new(&state.config.generated_dir);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/generate-pdf", post(handlers::handle_generate))
        .route("/download-pdf/:id", get(handlers::handle_download))
        .nest_service("/generated", generated)
        .with_state(state)
}
