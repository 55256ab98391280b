//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Listen port used when `PORT` is unset or unusable.
pub const DEFAULT_PORT: u16 = 4000;

/// Application configuration loaded from environment variables.
///
/// Read once at startup and immutable for the process lifetime.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Raw `PORT` value as provided by the environment.
    ///
    /// Kept as a string so an unparseable value falls back to
    /// [`DEFAULT_PORT`] instead of aborting startup.
    #[serde(default)]
    pub port: Option<String>,

    /// Log filter (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// The port the server should listen on.
    pub fn listen_port(&self) -> u16 {
        resolve_port(self.port.as_deref())
    }
}

/// Pure mapping from a raw environment value to a usable listen port.
///
/// Unset, non-numeric, out-of-range, and zero values all resolve to
/// [`DEFAULT_PORT`].
pub fn resolve_port(raw: Option<&str>) -> u16 {
    raw.and_then(|s| s.trim().parse::<u16>().ok())
        .filter(|port| *port != 0)
        .unwrap_or(DEFAULT_PORT)
}
