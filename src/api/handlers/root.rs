use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub async fn root() -> impl IntoResponse {
    Json(json!({
        "name": "Rallybook API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Team management for pickleball tournaments and leagues",
        "status": "operational",
        "endpoints": {
            "health": "/health",
            "members": "/api/members",
            "tournaments": "/api/tournaments",
            "leagues": "/api/leagues",
            "dashboard": "/api/dashboard",
            "results": "/api/results",
            "changes": "/api/changes"
        }
    }))
}

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}
