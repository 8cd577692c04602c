pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};

use crate::extraction::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/qa", post(handlers::handle_create_qa_pairs))
        // Gemini caps inline document data at 20 MB
        .layer(DefaultBodyLimit::max(20_000_000))
        .with_state(state)
}
