//! Service info and health check endpoints

use axum::Json;

/// GET / - service banner
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Cafe API is running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /health - liveness probe
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
