pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::scoring::handlers;
use crate::state::AppState;
use crate::web;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // HTML front end
        .route("/", get(web::handle_index))
        .route("/compare", post(web::handle_compare_form))
        // Headline API
        .route(
            "/api/v1/headlines/compare",
            post(handlers::handle_compare),
        )
        .with_state(state)
}
