use axum::{response::Redirect, Json};
use serde_json::Value;

use crate::services::roster_service;

pub async fn root_handler() -> Redirect {
    Redirect::temporary(roster_service::redirect_root())
}

pub async fn health_handler() -> Json<Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
