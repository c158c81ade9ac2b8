//! API credentials and host configuration.
//!
//! Configuration is resolved once, before any request is made, and is
//! immutable afterwards: the dispatcher captures it at construction and
//! never mutates it during a call. The API key is held as a
//! [`SecretString`] and only exposed at the moment the Authorization
//! header is built.

use std::collections::BTreeMap;
use std::path::Path;

use secrecy::SecretString;
use serde::Deserialize;
use validator::Validate;

use crate::error::{Error, Result};

/// Default API endpoint.
pub const DEFAULT_HOST: &str = "https://secure.sakura.ad.jp/vps/api/v7";

/// Environment variable holding the bearer token.
pub const ENV_API_KEY: &str = "VPS_API_KEY";

/// Environment variable overriding the API host.
pub const ENV_HOST: &str = "VPS_HOST";

/// Name of the dotfile consulted in the home directory.
pub const CONFIG_FILE_NAME: &str = ".vpsc";

/// Configuration for a VPS API client instance.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ApiConfig {
    /// Base URL of the API, including the version prefix.
    #[validate(url)]
    pub host: String,

    /// Bearer token used for every request.
    pub api_key: SecretString,
}

impl ApiConfig {
    /// Create a configuration for the default host.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            api_key: SecretString::from(api_key.into()),
        }
    }

    /// Override the API host.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the host is not a valid URL.
    pub fn check(&self) -> Result<()> {
        self.validate()
            .map_err(|err| Error::Config(format!("invalid configuration: {err}")))
    }

    /// Resolve configuration from the process environment.
    ///
    /// Lookup order per value: environment variable first
    /// ([`ENV_API_KEY`] / [`ENV_HOST`]), then the `~/.vpsc` dotfile
    /// (`vps_`-prefixed `key=value` lines), then the built-in default
    /// host. A missing API key is an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when no API key can be resolved or the
    /// resolved host is not a valid URL.
    pub fn from_env() -> Result<Self> {
        let file_vars = dirs::home_dir()
            .map(|home| home.join(CONFIG_FILE_NAME))
            .filter(|path| path.is_file())
            .map(|path| Self::read_env_file(&path))
            .transpose()?
            .unwrap_or_default();

        let api_key = std::env::var(ENV_API_KEY)
            .ok()
            .or_else(|| file_vars.get("vps_api_key").cloned())
            .ok_or_else(|| {
                Error::Config(format!(
                    "API key not set; export {ENV_API_KEY} or add vps_api_key to ~/{CONFIG_FILE_NAME}"
                ))
            })?;

        let host = std::env::var(ENV_HOST)
            .ok()
            .or_else(|| file_vars.get("vps_host").cloned())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let config = Self::new(api_key).with_host(host);
        config.check()?;
        Ok(config)
    }

    fn read_env_file(path: &Path) -> Result<BTreeMap<String, String>> {
        let contents = std::fs::read_to_string(path).map_err(|err| {
            Error::Config(format!("failed to read {}: {err}", path.display()))
        })?;
        Ok(parse_env_file(&contents))
    }
}

/// Parse `key=value` lines into a map with lowercased keys.
///
/// Blank lines and `#` comments are skipped; surrounding whitespace and
/// one layer of single or double quotes around the value are stripped.
fn parse_env_file(contents: &str) -> BTreeMap<String, String> {
    let mut vars = BTreeMap::new();

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        let key = key.trim().to_ascii_lowercase();
        let mut value = value.trim();
        if value.len() >= 2
            && (value.starts_with('"') && value.ends_with('"')
                || value.starts_with('\'') && value.ends_with('\''))
        {
            value = &value[1..value.len() - 1];
        }

        vars.insert(key, value.to_string());
    }

    vars
}
