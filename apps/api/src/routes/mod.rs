pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::history::handlers as history_handlers;
use crate::policy::handlers as policy_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation API — non-POST verbs get a JSON 405 body
        .route(
            "/api/v1/policies/generate",
            post(policy_handlers::handle_generate).fallback(policy_handlers::method_not_allowed),
        )
        .route(
            "/api/v1/policies/assemble",
            post(policy_handlers::handle_assemble).fallback(policy_handlers::method_not_allowed),
        )
        // Draft / history API
        .route(
            "/api/v1/users/:user_id/drafts",
            post(history_handlers::handle_save_draft),
        )
        .route(
            "/api/v1/users/:user_id/drafts/latest",
            get(history_handlers::handle_latest_draft),
        )
        .route(
            "/api/v1/users/:user_id/policies",
            post(history_handlers::handle_save_policy),
        )
        .route(
            "/api/v1/users/:user_id/history",
            get(history_handlers::handle_history),
        )
        .route(
            "/api/v1/users/:user_id/records/:record_id",
            delete(history_handlers::handle_delete_record),
        )
        .route(
            "/api/v1/users/:user_id/records/:record_id/export",
            get(history_handlers::handle_export),
        )
        .with_state(state)
}
