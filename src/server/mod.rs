mod handlers;
mod response;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::components::google_calendar::CalendarClient;
use crate::config::Config;

pub use handlers::{health_handler, index_handler, talks_handler};
pub use response::{ErrorResponse, StatusResponse, TalksResponse};

/// Shared, read-only state handed to every request
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded at startup
    pub config: Arc<Config>,
    /// Client for the calendar provider
    pub calendar: Arc<CalendarClient>,
}

impl AppState {
    pub fn new(config: Config, calendar: CalendarClient) -> Self {
        Self {
            config: Arc::new(config),
            calendar: Arc::new(calendar),
        }
    }
}

/// Build the router with all routes and middleware
pub fn router(state: AppState) -> Router {
    let api = Router::new().route("/talks", get(talks_handler));

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .nest("/api/v1", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
