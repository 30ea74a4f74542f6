//! HTTP request handlers for the Shift Wage Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute;
use crate::config::WageConfig;
use crate::error::{EngineError, EngineResult};
use crate::export::exporter_for;
use crate::history::{HistoryEntry, HistoryStore};
use crate::models::WageBreakdown;

use super::request::{ExportQuery, ShiftRequest};
use super::response::{ApiError, ApiErrorResponse, RememberedRate};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route(
            "/history",
            get(list_history_handler)
                .post(append_history_handler)
                .delete(clear_history_handler),
        )
        .route("/history/export", get(export_history_handler))
        .route(
            "/history/:index",
            get(get_history_handler)
                .put(replace_history_handler)
                .delete(remove_history_handler),
        )
        .route("/rates/:worker_name", get(remembered_rate_handler))
        .with_state(state)
}

/// Handler for POST /calculate.
///
/// Computes a breakdown without storing it. A missing rate is taken from the
/// worker's remembered rate.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShiftRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match read_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let started = Instant::now();
    let result = {
        let history = state.history().await;
        calculate_for(&history, &request, state.config().config())
    };

    match result {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                worker = %breakdown.worker_name,
                mission = %breakdown.mission_id,
                gross_pay = %breakdown.gross_pay,
                duration_us = started.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, breakdown)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for GET /history.
async fn list_history_handler(State(state): State<AppState>) -> Response {
    let history = state.history().await;
    json_response(StatusCode::OK, history.entries())
}

/// Handler for GET /history/:index.
async fn get_history_handler(State(state): State<AppState>, Path(index): Path<usize>) -> Response {
    let correlation_id = Uuid::new_v4();
    let history = state.history().await;
    match history.get(index) {
        Ok(entry) => json_response(StatusCode::OK, entry),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /history.
///
/// Computes a breakdown and appends it to the history.
async fn append_history_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShiftRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing history append");

    let request = match read_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let mut history = state.history().await;
    match calculate_for(&history, &request, state.config().config()) {
        Ok(breakdown) => {
            let entry = history.append(breakdown).clone();
            info!(
                correlation_id = %correlation_id,
                entry_id = %entry.id,
                gross_pay = %entry.breakdown.gross_pay,
                entries = history.len(),
                "Breakdown appended to history"
            );
            json_response(StatusCode::CREATED, entry)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for PUT /history/:index.
///
/// Recomputes the entry from new fields and replaces it in place.
async fn replace_history_handler(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    payload: Result<Json<ShiftRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, index, "Processing history replace");

    let request = match read_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let mut history = state.history().await;
    match replace_entry(&mut history, index, &request, state.config().config()) {
        Ok(entry) => {
            info!(
                correlation_id = %correlation_id,
                entry_id = %entry.id,
                index,
                gross_pay = %entry.breakdown.gross_pay,
                "History entry replaced"
            );
            json_response(StatusCode::OK, entry)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for DELETE /history/:index.
async fn remove_history_handler(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let mut history = state.history().await;
    match history.remove(index) {
        Ok(entry) => {
            info!(
                correlation_id = %correlation_id,
                entry_id = %entry.id,
                index,
                entries = history.len(),
                "History entry removed"
            );
            json_response(StatusCode::OK, entry)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for DELETE /history.
async fn clear_history_handler(State(state): State<AppState>) -> Response {
    let mut history = state.history().await;
    let removed = history.len();
    history.clear();
    info!(removed, "History cleared");
    StatusCode::NO_CONTENT.into_response()
}

/// Handler for GET /history/export.
///
/// Renders every stored breakdown, in order, in the requested format.
async fn export_history_handler(
    State(state): State<AppState>,
    query: Result<Query<ExportQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection, "Invalid export query");
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ApiError::validation_error(rejection.body_text())),
            )
                .into_response();
        }
    };

    let records = state.history().await.breakdowns();
    let exporter = exporter_for(query.format);

    match exporter.export(&records) {
        Ok(bytes) => {
            info!(
                correlation_id = %correlation_id,
                format = ?query.format,
                records = records.len(),
                bytes = bytes.len(),
                "History exported"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, exporter.content_type().to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!(
                            "attachment; filename=\"wage-history.{}\"",
                            exporter.file_extension()
                        ),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for GET /rates/:worker_name.
async fn remembered_rate_handler(
    State(state): State<AppState>,
    Path(worker_name): Path<String>,
) -> Response {
    let result = state.history().await.remembered_rate(&worker_name);
    match result {
        Ok(hourly_rate) => json_response(
            StatusCode::OK,
            RememberedRate {
                worker_name,
                hourly_rate,
            },
        ),
        Err(err) => {
            let mut api_error: ApiErrorResponse = err.into();
            api_error.status = StatusCode::NOT_FOUND;
            api_error.into_response()
        }
    }
}

fn calculate_for(
    history: &HistoryStore,
    request: &ShiftRequest,
    config: &WageConfig,
) -> EngineResult<WageBreakdown> {
    let input = request.to_shift_input(history)?;
    compute(&input, config)
}

fn replace_entry(
    history: &mut HistoryStore,
    index: usize,
    request: &ShiftRequest,
    config: &WageConfig,
) -> EngineResult<HistoryEntry> {
    history.get(index)?;
    let breakdown = calculate_for(history, request, config)?;
    history.replace(index, breakdown).cloned()
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}

fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "Request failed");
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

fn read_payload(
    correlation_id: Uuid,
    payload: Result<Json<ShiftRequest>, JsonRejection>,
) -> Result<ShiftRequest, Response> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(json_response(StatusCode::BAD_REQUEST, error))
}
