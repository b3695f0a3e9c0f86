//! HTTP router assembly.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers, state::AppState};

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let member_routes = Router::new()
        .route("/login", post(handlers::members::login))
        .route("/create", post(handlers::members::create_member))
        .route("/search", post(handlers::members::search_member));

    let deposit_routes = Router::new().route(
        "/createDepositAccount",
        post(handlers::deposits::create_deposit_account),
    );

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .nest("/api/member", member_routes)
        .nest("/api/deposit", deposit_routes)
        // Browser clients are served from a different origin
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
