pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::contact::handlers as contact;
use crate::flows::handlers as flows;
use crate::portfolio::handlers as portfolio;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Portfolio API
        .route(
            "/api/v1/portfolio",
            get(portfolio::get_portfolio).put(portfolio::update_portfolio),
        )
        .route("/api/v1/portfolio/projects", post(portfolio::add_project))
        .route(
            "/api/v1/portfolio/projects/:name",
            put(portfolio::update_project).delete(portfolio::delete_project),
        )
        // Contact relay
        .route("/api/v1/contact", post(contact::send_contact_message))
        // AI flows
        .route("/api/v1/chat", post(flows::chat))
        .route("/api/v1/resume/extract", post(flows::extract_resume))
        .with_state(state)
}
