use crate::error::{config_error, env_error, ApiResult};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

/// Default path of the optional config file
pub const DEFAULT_CONFIG_PATH: &str = "config/server.toml";
/// Default listen address
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;
/// Default timeout for calls to the calendar provider
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings needed to reach the calendar provider
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarSettings {
    /// Calendar to read events from
    pub calendar_id: String,
    /// API key sent as the `key` query parameter
    pub api_key: String,
    /// Base URL of the calendars collection, e.g. `https://www.googleapis.com/calendar/v3/calendars`
    pub base_url: String,
}

impl CalendarSettings {
    /// Names of the required settings that are empty
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.calendar_id.trim().is_empty() {
            missing.push("CALENDAR_ID");
        }
        if self.api_key.trim().is_empty() {
            missing.push("CALENDAR_API_KEY");
        }
        if self.base_url.trim().is_empty() {
            missing.push("CALENDAR_BASE_URL");
        }
        missing
    }
}

/// Main configuration structure for the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Address to bind the HTTP listener to
    pub host: IpAddr,
    /// Port to bind the HTTP listener to
    pub port: u16,
    /// Calendar provider settings
    pub calendar: CalendarSettings,
    /// Timeout for outbound calendar requests, in seconds
    pub request_timeout_secs: u64,
}

/// Optional on-disk configuration, every value overridable from the environment
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    server: ServerSection,
    #[serde(default)]
    calendar: CalendarSection,
}

#[derive(Debug, Default, Deserialize)]
struct ServerSection {
    host: Option<String>,
    port: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
struct CalendarSection {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            calendar: CalendarSettings::default(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load configuration from .env, the optional config file and the environment
    pub fn load() -> ApiResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let path = env::var("TALKS_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let file = read_config_file(Path::new(&path))?;

        Self::from_sources(file, |key| env::var(key).ok())
    }

    /// Build the config from a parsed file and an environment lookup
    fn from_sources<F>(file: FileConfig, lookup: F) -> ApiResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match (lookup("HOST"), file.server.host) {
            (Some(host), _) => host.parse::<IpAddr>().map_err(|_| env_error("HOST"))?,
            (None, Some(host)) => host.parse::<IpAddr>().map_err(|_| {
                config_error(&format!("Invalid [server] host in config file: {}", host))
            })?,
            (None, None) => DEFAULT_HOST,
        };

        let port = match lookup("PORT") {
            Some(port) => port.parse::<u16>().map_err(|_| env_error("PORT"))?,
            None => file.server.port.unwrap_or(DEFAULT_PORT),
        };

        let request_timeout_secs = match lookup("CALENDAR_TIMEOUT_SECS") {
            Some(secs) => secs
                .parse::<u64>()
                .map_err(|_| env_error("CALENDAR_TIMEOUT_SECS"))?,
            None => file.calendar.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        };

        // Calendar settings are checked per request so the API can report them
        let calendar = CalendarSettings {
            calendar_id: lookup("CALENDAR_ID").unwrap_or_default(),
            api_key: lookup("CALENDAR_API_KEY").unwrap_or_default(),
            base_url: lookup("CALENDAR_BASE_URL")
                .or(file.calendar.base_url)
                .unwrap_or_default(),
        };

        let missing = calendar.missing();
        if !missing.is_empty() {
            warn!(
                "Calendar settings incomplete, talk requests will fail until set: {}",
                missing.join(", ")
            );
        }

        Ok(Config {
            host,
            port,
            calendar,
            request_timeout_secs,
        })
    }

    /// Socket address the server listens on
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Timeout applied to calendar requests
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Parse the config file at `path`; a missing or unreadable file yields the defaults
fn read_config_file(path: &Path) -> ApiResult<FileConfig> {
    match fs::read_to_string(path) {
        Ok(content) => {
            debug!("Loaded config file {}", path.display());
            Ok(toml::from_str::<FileConfig>(&content)?)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(FileConfig::default()),
        Err(e) => {
            warn!("Ignoring unreadable config file {}: {}", path.display(), e);
            Ok(FileConfig::default())
        }
    }
}
