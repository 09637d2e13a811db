pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ingest::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/upload/", post(handlers::handle_upload_job_description))
        .route(
            "/extract-experience-skills/",
            post(handlers::handle_extract_experience_skills),
        )
        .with_state(state)
}
