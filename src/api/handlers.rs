//! HTTP handlers for the task board API.
//!
//! Handlers are stateless request/response mappings: they validate input,
//! delegate to [`TaskBoardService`], and translate outcomes into envelope
//! responses. All store-level classification happens in
//! [`ApiFailure::from_service`].

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use mockable::Clock;
use uuid::Uuid;

use super::dto::{ApiSuccess, CreateTaskBody, HealthResponse, TaskResponse, UpdateStatusBody};
use super::error::{ApiFailure, ErrorExposure};
use super::extract::ApiJson;
use crate::task::domain::TaskId;
use crate::task::services::{CreateTaskRequest, TaskBoardService};

/// Shared application dependencies.
///
/// The repository behind the service is selected at startup; handlers never
/// see concrete store types.
#[derive(Clone)]
pub struct AppState {
    /// Task board service backing the task routes.
    pub service: TaskBoardService,
    /// Clock used for liveness timestamps.
    pub clock: Arc<dyn Clock + Send + Sync>,
    /// Store-failure exposure policy.
    pub exposure: ErrorExposure,
}

/// `GET /health` — liveness probe with a server-side timestamp.
pub async fn health_check(State(state): State<AppState>) -> Json<ApiSuccess<HealthResponse>> {
    Json(ApiSuccess::new(HealthResponse {
        status: "ok",
        timestamp: state.clock.utc(),
    }))
}

/// `GET /api/tasks` — all tasks, newest first.
pub async fn list_tasks(
    State(state): State<AppState>,
) -> Result<Json<ApiSuccess<Vec<TaskResponse>>>, ApiFailure> {
    let tasks = state
        .service
        .list_tasks()
        .await
        .map_err(|error| ApiFailure::from_service(&error, state.exposure))?;
    let payload: Vec<TaskResponse> = tasks.iter().map(TaskResponse::from).collect();
    Ok(Json(ApiSuccess::new(payload)))
}

/// `GET /api/tasks/{id}` — a single task by identifier.
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiSuccess<TaskResponse>>, ApiFailure> {
    let task_id = parse_task_id(&id)?;
    let task = state
        .service
        .find_task(task_id)
        .await
        .map_err(|error| ApiFailure::from_service(&error, state.exposure))?
        .ok_or_else(|| ApiFailure::not_found(format!("no task with identifier {id}")))?;
    Ok(Json(ApiSuccess::new(TaskResponse::from(&task))))
}

/// `POST /api/tasks` — creates a task in the `To-Do` status.
pub async fn create_task(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateTaskBody>,
) -> Result<(StatusCode, Json<ApiSuccess<TaskResponse>>), ApiFailure> {
    let mut request = CreateTaskRequest::new(body.title);
    if let Some(description) = body.description {
        request = request.with_description(description);
    }
    let task = state
        .service
        .create_task(request)
        .await
        .map_err(|error| ApiFailure::from_service(&error, state.exposure))?;
    Ok((
        StatusCode::CREATED,
        Json(ApiSuccess::new(TaskResponse::from(&task))),
    ))
}

/// `PATCH /api/tasks/{id}/status` — moves a task to the target status.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<UpdateStatusBody>,
) -> Result<Json<ApiSuccess<TaskResponse>>, ApiFailure> {
    let task_id = parse_task_id(&id)?;
    let task = state
        .service
        .update_status(task_id, &body.status)
        .await
        .map_err(|error| ApiFailure::from_service(&error, state.exposure))?;
    Ok(Json(ApiSuccess::new(TaskResponse::from(&task))))
}

/// Fallback for unmatched routes.
pub async fn not_found() -> ApiFailure {
    ApiFailure::not_found("resource not found")
}

/// Converts a panic that escaped a handler into the generic 500 envelope.
///
/// Handlers return `Result` for every expected failure, so anything caught
/// here is a bug. The panic payload is logged, never echoed to the client.
pub fn unhandled_panic(
    payload: Box<dyn std::any::Any + Send + 'static>,
) -> axum::response::Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    tracing::error!(detail, "unhandled panic while serving request");
    axum::response::IntoResponse::into_response(ApiFailure::internal("internal server error"))
}

/// Parses a path identifier, treating malformed values as missing tasks.
///
/// The store's identifier type is opaque to callers, so an unparseable
/// identifier is indistinguishable from an absent one.
fn parse_task_id(raw: &str) -> Result<TaskId, ApiFailure> {
    Uuid::parse_str(raw.trim())
        .map(TaskId::from_uuid)
        .map_err(|_| ApiFailure::not_found(format!("no task with identifier {raw}")))
}
