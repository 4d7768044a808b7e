//! HTTP endpoint handlers

mod explain;
mod quiz;

pub use explain::explain_handler;
pub use quiz::quiz_handler;

use axum::Json;
use serde_json::{json, Value};

/// Root liveness endpoint
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "OctoLearn backend is running!" }))
}
