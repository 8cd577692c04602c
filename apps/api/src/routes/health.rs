use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Static liveness message so load balancers and humans can confirm the
/// service is up.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Academic PDF Q&A Service is running"
    }))
}
