use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::warn;

use crate::database::ActivityDirectory;
use crate::error::RosterError;
use crate::models::ActivityListing;
use crate::services::roster_service::{self, RosterQuery};

type RosterResult = Result<Json<Value>, (StatusCode, Json<Value>)>;

pub async fn list_activities_handler(
    State(directory): State<ActivityDirectory>,
) -> Json<ActivityListing> {
    Json(roster_service::list_activities(&directory))
}

pub async fn signup_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<RosterQuery>, QueryRejection>,
    State(directory): State<ActivityDirectory>,
) -> RosterResult {
    let (activity_name, query) = roster_params(path, query)?;
    roster_service::signup(&directory, &activity_name, query.email.as_deref())
        .map(confirmation)
        .map_err(rejection)
}

pub async fn unregister_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<RosterQuery>, QueryRejection>,
    State(directory): State<ActivityDirectory>,
) -> RosterResult {
    let (activity_name, query) = roster_params(path, query)?;
    roster_service::unregister(&directory, &activity_name, query.email.as_deref())
        .map(confirmation)
        .map_err(rejection)
}

// Malformed paths and query strings get the same `{detail}` body as roster errors.
fn roster_params(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<RosterQuery>, QueryRejection>,
) -> Result<(String, RosterQuery), (StatusCode, Json<Value>)> {
    let Path(activity_name) =
        path.map_err(|e| malformed_request("path", e.status(), e.body_text()))?;
    let Query(query) =
        query.map_err(|e| malformed_request("query", e.status(), e.body_text()))?;
    Ok((activity_name, query))
}

fn malformed_request(part: &str, status: StatusCode, detail: String) -> (StatusCode, Json<Value>) {
    warn!(part, status = %status, detail = %detail, "roster_request_malformed");
    (status, Json(serde_json::json!({ "detail": detail })))
}

fn confirmation(message: String) -> Json<Value> {
    Json(serde_json::json!({ "message": message }))
}

fn rejection(e: RosterError) -> (StatusCode, Json<Value>) {
    (
        e.status(),
        Json(serde_json::json!({ "detail": e.to_string() })),
    )
}
