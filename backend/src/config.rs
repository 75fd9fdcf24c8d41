//! Runtime configuration read from the environment (and an optional `.env`).
//!
//! | Variable | Default |
//! |---|---|
//! | `CARD_CATALOG_HOST` | `127.0.0.1` |
//! | `CARD_CATALOG_PORT` | `3000` |
//! | `SCRYFALL_BASE_URL` | `https://api.scryfall.com` |
//! | `CARD_CATALOG_SEED_EXAMPLE` | `false` |
//! | `CARD_CATALOG_OPEN_BROWSER` | `false` |

use std::env;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SCRYFALL_BASE_URL: &str = "https://api.scryfall.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub scryfall_base_url: String,
    /// Start the favorites list with the demo card instead of empty.
    pub seed_example: bool,
    /// Open the UI in the default browser once the server is up.
    pub open_browser: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value {value:?} for {variable}")]
pub struct ConfigError {
    pub variable: &'static str,
    pub value: String,
}

impl From<ConfigError> for std::io::Error {
    fn from(err: ConfigError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            scryfall_base_url: DEFAULT_SCRYFALL_BASE_URL.to_string(),
            seed_example: false,
            open_browser: false,
        }
    }
}

impl AppConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, falling back to defaults
    /// for unset variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();

        let port = match lookup("CARD_CATALOG_PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError {
                variable: "CARD_CATALOG_PORT",
                value,
            })?,
            None => defaults.port,
        };

        Ok(AppConfig {
            host: lookup("CARD_CATALOG_HOST").unwrap_or(defaults.host),
            port,
            scryfall_base_url: lookup("SCRYFALL_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.scryfall_base_url),
            seed_example: parse_flag(&lookup, "CARD_CATALOG_SEED_EXAMPLE", defaults.seed_example)?,
            open_browser: parse_flag(&lookup, "CARD_CATALOG_OPEN_BROWSER", defaults.open_browser)?,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_flag<F>(lookup: &F, variable: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(variable) {
        None => Ok(default),
        Some(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" | "" => Ok(false),
            _ => Err(ConfigError { variable, value }),
        },
    }
}
