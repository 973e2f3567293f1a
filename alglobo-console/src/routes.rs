use axum::{
    extract::{rejection::JsonRejection, State},
    http::Uri,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::actions;
use crate::error::AppError;
use crate::page;
use crate::state::{AppState, ConsoleState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/console/send", post(send))
        .route("/console/status", post(check_status))
        .route("/console/metrics", post(fetch_metrics))
        .route("/console/clear", post(clear))
        .fallback(not_found)
}

async fn index() -> Html<String> {
    Html(page::render())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn send(
    State(state): State<AppState>,
    payload: Result<Json<ConsoleState>, JsonRejection>,
) -> Result<Json<ConsoleState>, AppError> {
    let Json(console) = payload?;
    Ok(Json(actions::send(console, &state.gateway).await))
}

async fn check_status(
    State(state): State<AppState>,
    payload: Result<Json<ConsoleState>, JsonRejection>,
) -> Result<Json<ConsoleState>, AppError> {
    let Json(console) = payload?;
    Ok(Json(actions::check_status(console, &state.gateway).await))
}

async fn fetch_metrics(
    State(state): State<AppState>,
    payload: Result<Json<ConsoleState>, JsonRejection>,
) -> Result<Json<ConsoleState>, AppError> {
    let Json(console) = payload?;
    Ok(Json(actions::fetch_metrics(console, &state.gateway).await))
}

async fn clear(
    payload: Result<Json<ConsoleState>, JsonRejection>,
) -> Result<Json<ConsoleState>, AppError> {
    let Json(console) = payload?;
    Ok(Json(actions::clear(console)))
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFoundError(format!("No route for {}", uri))
}
