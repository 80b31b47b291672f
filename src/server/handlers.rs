use axum::{extract::State, Json};
use tracing::info;

use super::response::{StatusResponse, TalksResponse};
use super::AppState;
use crate::components::talks::translate_events;
use crate::error::ApiResult;

/// Message returned by the index route
pub const WELCOME_MESSAGE: &str = "Welcome to GDG Attendees API";

/// Handler for the index route
pub async fn index_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: Some(WELCOME_MESSAGE.to_string()),
        status: "running".to_string(),
    })
}

/// Handler for API health check
pub async fn health_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: None,
        status: "healthy".to_string(),
    })
}

/// Handler listing every talk in the calendar
pub async fn talks_handler(State(state): State<AppState>) -> ApiResult<Json<TalksResponse>> {
    let events = state.calendar.list_events(&state.config.calendar).await?;
    let talks = translate_events(&events);

    info!("Serving {} talks", talks.len());
    Ok(Json(TalksResponse::from(talks)))
}
