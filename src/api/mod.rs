pub mod handlers;
pub mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post, put, delete},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::{config::Settings, service::ServiceContext};
use state::AppState;

pub fn create_app(service_context: Arc<ServiceContext>, settings: Arc<Settings>) -> Router {
    let app_state = AppState::new(service_context, settings);

    Router::new()
        // Root and health endpoints
        .route("/", get(handlers::root::root))
        .route("/health", get(handlers::root::health_check))
        // API routes
        .nest("/api", api_routes())
        // Add state to the router
        .with_state(app_state)
        // Middleware
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/members", member_routes())
        .nest("/tournaments", tournament_routes())
        .nest("/leagues", league_routes())
        .route("/dashboard", get(handlers::dashboard::summary))
        .route("/results", get(handlers::dashboard::results))
        .route("/payments/totals", get(handlers::dashboard::payment_totals))
        .route("/changes", get(handlers::changes::stream))
}

fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::members::list))
        .route("/", post(handlers::members::create))
        .route("/:id", get(handlers::members::get))
        .route("/:id", put(handlers::members::update))
        .route("/:id", delete(handlers::members::delete))
}

fn tournament_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::events::list_tournaments))
        .route("/", post(handlers::events::create_tournament))
        .route("/:id", get(handlers::events::get_tournament))
        .route("/:id", put(handlers::events::update_tournament))
        .route("/:id", delete(handlers::events::delete_tournament))
        .route(
            "/:id/participants/:index/payment-status",
            post(handlers::events::tournament_payment_status),
        )
}

fn league_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::events::list_leagues))
        .route("/", post(handlers::events::create_league))
        .route("/:id", get(handlers::events::get_league))
        .route("/:id", put(handlers::events::update_league))
        .route("/:id", delete(handlers::events::delete_league))
        .route(
            "/:id/participants/:index/payment-status",
            post(handlers::events::league_payment_status),
        )
}
