pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::resumes::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/upload/",
            post(handlers::handle_upload).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/resumes/", get(handlers::handle_list_resumes))
        .route("/resumes/:id", get(handlers::handle_get_resume))
        .with_state(state)
}
