use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Static availability message.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Intake API is running"
    }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": "0.1.0",
        "service": "intake-api"
    }))
}
