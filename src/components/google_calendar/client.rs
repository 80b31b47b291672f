use super::models::{CalendarEvent, EventList};
use super::transport::{CalendarTransport, ReqwestTransport};
use crate::config::{CalendarSettings, Config};
use crate::error::{config_error, ApiResult, Error};
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use url::Url;

/// Client for the calendar provider's events list endpoint
#[derive(Clone)]
pub struct CalendarClient {
    transport: Arc<dyn CalendarTransport>,
}

impl CalendarClient {
    /// Create a client using the given transport
    pub fn new(transport: Arc<dyn CalendarTransport>) -> Self {
        Self { transport }
    }

    /// Create a client backed by reqwest, with the timeout from the config
    pub fn from_config(config: &Config) -> ApiResult<Self> {
        let transport = ReqwestTransport::new(config.request_timeout())
            .map_err(|e| Error::Other(e.to_string()))?;
        Ok(Self::new(Arc::new(transport)))
    }

    /// Fetch all events of the calendar, ordered by start time
    pub async fn list_events(&self, settings: &CalendarSettings) -> ApiResult<Vec<CalendarEvent>> {
        let missing = settings.missing();
        if !missing.is_empty() {
            return Err(config_error(&format!("{} must be set", missing.join(" and "))));
        }

        let url = events_url(settings)?;
        debug!("Fetching calendar events from {}", redact_key(&url));

        let response = self.transport.get(url).await.map_err(|e| {
            error!("Calendar request failed: {}", e);
            Error::UpstreamUnreachable(e.to_string())
        })?;

        if !response.is_success() {
            warn!("Calendar API responded with HTTP {}", response.status);
            return Err(Error::Upstream {
                status: response.status,
                body: response.body,
            });
        }

        let list: EventList = serde_json::from_str(&response.body)
            .map_err(|e| Error::ResponseDecode(e.to_string()))?;

        info!("Fetched {} calendar events", list.items.len());
        Ok(list.items)
    }
}

/// Build the events list URL for the configured calendar
pub fn events_url(settings: &CalendarSettings) -> ApiResult<Url> {
    let mut url = Url::parse(settings.base_url.trim())
        .map_err(|e| config_error(&format!("Invalid CALENDAR_BASE_URL: {}", e)))?;

    url.path_segments_mut()
        .map_err(|_| config_error("CALENDAR_BASE_URL cannot be used as a base URL"))?
        .pop_if_empty()
        .push(settings.calendar_id.trim())
        .push("events");

    url.query_pairs_mut()
        .append_pair("key", settings.api_key.trim())
        .append_pair("orderBy", "startTime")
        .append_pair("singleEvents", "true");

    Ok(url)
}

/// URL as a string with the API key hidden, for logs
fn redact_key(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let value = if k == "key" { "REDACTED".to_string() } else { v.into_owned() };
            (k.into_owned(), value)
        })
        .collect();

    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
