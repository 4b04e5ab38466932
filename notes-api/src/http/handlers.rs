//! HTTP handlers for the notes API

use super::state::AppState;
use super::types::*;
use crate::error::ApiResult;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

// ============================================================================
// Note Handlers
// ============================================================================

/// POST /api/notes - Create a note
#[utoipa::path(post, path = "/api/notes", tag = "Notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created", body = NoteResponse),
        (status = 400, description = "Invalid title or malformed body", body = ErrorResponse)
    ))]
pub async fn create_note(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(req) = payload?;
    let note = state.service.create(req.into())?;
    let location = format!("/api/notes/{}", note.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(NoteResponse::from(note)),
    ))
}

/// GET /api/notes - List notes, most recently updated first
#[utoipa::path(get, path = "/api/notes", tag = "Notes",
    responses((status = 200, description = "All notes", body = Vec<NoteResponse>)))]
pub async fn list_notes(State(state): State<Arc<AppState>>) -> Json<Vec<NoteResponse>> {
    Json(
        state
            .service
            .list()
            .into_iter()
            .map(NoteResponse::from)
            .collect(),
    )
}

/// GET /api/notes/:id - Fetch one note
#[utoipa::path(get, path = "/api/notes/{id}", tag = "Notes",
    params(("id" = String, Path, description = "Note ID")),
    responses(
        (status = 200, description = "Note found", body = NoteResponse),
        (status = 404, description = "No such note", body = ErrorResponse)
    ))]
pub async fn get_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<NoteResponse>> {
    let note = state.service.get(&id)?;
    Ok(Json(note.into()))
}

/// PUT /api/notes/:id - Replace title and content
#[utoipa::path(put, path = "/api/notes/{id}", tag = "Notes",
    params(("id" = String, Path, description = "Note ID")),
    request_body = UpdateNoteRequest,
    responses(
        (status = 200, description = "Note updated", body = NoteResponse),
        (status = 400, description = "Invalid title or malformed body", body = ErrorResponse),
        (status = 404, description = "No such note", body = ErrorResponse)
    ))]
pub async fn update_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateNoteRequest>, JsonRejection>,
) -> ApiResult<Json<NoteResponse>> {
    let Json(req) = payload?;
    let note = state.service.update(&id, req.into())?;
    Ok(Json(note.into()))
}

/// DELETE /api/notes/:id - Remove a note
#[utoipa::path(delete, path = "/api/notes/{id}", tag = "Notes",
    params(("id" = String, Path, description = "Note ID")),
    responses(
        (status = 204, description = "Note deleted"),
        (status = 404, description = "No such note", body = ErrorResponse)
    ))]
pub async fn delete_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.service.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Operational Handlers
// ============================================================================

/// GET / - Basic health check
#[utoipa::path(get, path = "/", tag = "Health",
    responses((status = 200, description = "Service is up", body = HealthMessage)))]
pub async fn root_health() -> Json<HealthMessage> {
    Json(HealthMessage {
        message: "Healthy".to_string(),
    })
}

/// GET /health - Component health report
pub async fn health_report(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let report = state.health.check_health();
    let status = StatusCode::from_u16(report.status.to_http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(report))
}

/// GET /metrics - Prometheus exposition; 404 when metrics are disabled
pub async fn metrics(State(state): State<Arc<AppState>>) -> Response {
    match &state.metrics {
        Some(exporter) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            exporter.render(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
