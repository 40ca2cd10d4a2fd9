pub mod health;
pub mod prompts;

use axum::{
    routing::{get, post},
    Router,
};

pub fn build_router() -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/prompts/enhance", post(prompts::handle_enhance))
        .route("/api/v1/prompts/classify", post(prompts::handle_classify))
        .route("/api/v1/prompts/diff", post(prompts::handle_diff))
}
