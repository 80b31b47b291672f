use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::components::talks::Talk;
use crate::error::Error;

/// Body of `GET /api/v1/talks`
#[derive(Debug, Serialize, Deserialize)]
pub struct TalksResponse {
    pub talks: Vec<Talk>,
    pub total: usize,
}

impl From<Vec<Talk>> for TalksResponse {
    fn from(talks: Vec<Talk>) -> Self {
        let total = talks.len();
        Self { talks, total }
    }
}

/// Body of `GET /` and `GET /health`
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status: String,
}

/// Body returned for every failed request
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl From<&Error> for ErrorResponse {
    fn from(err: &Error) -> Self {
        Self {
            error: err.summary().to_string(),
            details: err.details(),
            status: err.upstream_status(),
        }
    }
}

// Every failure maps to 500; the `error` field tells them apart
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::from(&self)),
        )
            .into_response()
    }
}
