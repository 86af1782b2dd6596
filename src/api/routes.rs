use axum::{
    routing::{get, post},
    Router,
};

use crate::server::AppState;

use super::handlers::{after_demo_form, send_email, submit_form};
use super::health::{health, stats};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health & Stats
        .route("/health", get(health))
        .route("/stats", get(stats))
        // Submission endpoints
        .route("/send-email", post(send_email))
        .route("/submit-form", post(submit_form))
        .route("/after-demo-form", post(after_demo_form))
}
