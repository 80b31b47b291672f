use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(attendees_api::config),
        help("set CALENDAR_ID, CALENDAR_API_KEY and CALENDAR_BASE_URL in the environment or .env")
    )]
    Configuration(String),

    #[error("Calendar provider unreachable: {0}")]
    #[diagnostic(code(attendees_api::upstream_unreachable))]
    UpstreamUnreachable(String),

    #[error("Calendar provider returned HTTP {status}")]
    #[diagnostic(code(attendees_api::upstream))]
    Upstream { status: u16, body: String },

    #[error("Failed to decode calendar response: {0}")]
    #[diagnostic(code(attendees_api::response_decode))]
    ResponseDecode(String),

    #[error(transparent)]
    #[diagnostic(code(attendees_api::io))]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    #[diagnostic(code(attendees_api::other))]
    Other(String),
}

impl Error {
    /// Short, machine-readable summary used as the `error` field of API responses
    pub fn summary(&self) -> &'static str {
        match self {
            Error::Configuration(_) => "Missing required configuration",
            Error::UpstreamUnreachable(_) => "Failed to fetch calendar events",
            Error::Upstream { .. } => "Google Calendar API error",
            Error::ResponseDecode(_) => "Failed to parse calendar response",
            Error::Io(_) | Error::Other(_) => "Internal server error",
        }
    }

    /// Diagnostic context for the `details` field of API responses
    pub fn details(&self) -> String {
        match self {
            Error::Configuration(msg)
            | Error::UpstreamUnreachable(msg)
            | Error::ResponseDecode(msg)
            | Error::Other(msg) => msg.clone(),
            Error::Upstream { status, body } => format!("HTTP {}: {}", status, body),
            Error::Io(e) => e.to_string(),
        }
    }

    /// Status code reported by the calendar provider, if it answered at all
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Error::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Configuration(format!("Invalid config file: {}", err))
    }
}

/// Type alias for Result with our Error type
pub type ApiResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Configuration(format!("Invalid environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Configuration(message.to_string())
}

/// Helper to create other errors
pub fn other_error(message: &str) -> Error {
    Error::Other(message.to_string())
}
