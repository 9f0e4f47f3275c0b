//! Construction-time options for [`ServerWatchdogClient`](crate::ServerWatchdogClient).
//!
//! Options can be assembled in code with the `with_*` setters or loaded
//! from JSON and INI sources. Loading never validates; validation runs
//! when the client is created so that every source goes through the same
//! checks in the same order.

use std::fs;
use std::path::Path;
use std::time::Duration;

use ini::Ini;
use serde::Deserialize;

use crate::error::ClientBuildError;

/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

macro_rules! ensure_non_empty {
    ($value:expr, $field:expr) => {{
        if $value.is_empty() {
            Err(ClientBuildError::InvalidConfig(format!(
                "{} must not be empty",
                $field
            )))
        } else {
            Ok(())
        }
    }};
}

/// Options describing how to reach the watchdog service.
///
/// Field names follow the service's JSON configuration format: `host`,
/// `port`, `useSsl`, `apiKey`, `defaultChannel` and `timeout`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientOptions {
    /// Host name or address of the service.
    pub host: String,
    /// TCP port of the service. Must fit in 0..=65535.
    pub port: u32,
    /// Use HTTPS instead of plain HTTP.
    #[serde(default)]
    pub use_ssl: bool,
    /// Credential sent in the `X-Api-Key` header.
    pub api_key: String,
    /// Channel used when a call does not name one.
    pub default_channel: String,
    /// Request timeout in milliseconds; zero selects [`DEFAULT_TIMEOUT_MS`].
    #[serde(default, rename = "timeout")]
    pub timeout_ms: u64,
}

impl ClientOptions {
    /// Create options with the required fields set and defaults elsewhere.
    pub fn new(
        host: impl Into<String>,
        port: u32,
        api_key: impl Into<String>,
        default_channel: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            api_key: api_key.into(),
            default_channel: default_channel.into(),
            ..Self::default()
        }
    }

    /// Select HTTPS (`true`) or HTTP (`false`).
    pub fn with_ssl(mut self, use_ssl: bool) -> Self {
        self.use_ssl = use_ssl;
        self
    }

    /// Set the request timeout in milliseconds.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Check the options, reporting the first problem found.
    ///
    /// Fields are checked in the order host, port, API key, default channel.
    pub fn validate(&self) -> Result<(), ClientBuildError> {
        ensure_non_empty!(self.host, "host")?;
        self.validate_port()?;
        ensure_non_empty!(self.api_key, "API key")?;
        ensure_non_empty!(self.default_channel, "default channel")?;
        Ok(())
    }

    fn validate_port(&self) -> Result<(), ClientBuildError> {
        if u16::try_from(self.port).is_err() {
            return Err(ClientBuildError::InvalidConfig(format!(
                "port {} is out of range",
                self.port
            )));
        }
        Ok(())
    }

    /// Base URL of the service, without a trailing slash.
    pub fn base_url(&self) -> String {
        let scheme = if self.use_ssl { "https" } else { "http" };
        format!("{scheme}://{}:{}", self.host, self.port)
    }

    /// Effective request timeout.
    pub fn timeout(&self) -> Duration {
        match self.timeout_ms {
            0 => Duration::from_millis(DEFAULT_TIMEOUT_MS),
            ms => Duration::from_millis(ms),
        }
    }

    /// Parse options from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ClientBuildError> {
        serde_json::from_str(json)
            .map_err(|err| ClientBuildError::InvalidConfig(format!("malformed JSON options: {err}")))
    }

    /// Read and parse options from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ClientBuildError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parse options from one section of an INI document.
    ///
    /// Keys match the JSON field names. `host`, `port`, `apiKey` and
    /// `defaultChannel` are required; `useSsl` and `timeout` are optional.
    pub fn from_ini_str(text: &str, section: &str) -> Result<Self, ClientBuildError> {
        let ini = Ini::load_from_str(text)
            .map_err(|err| ClientBuildError::InvalidConfig(format!("malformed INI options: {err}")))?;
        let props = ini.section(Some(section)).ok_or_else(|| {
            ClientBuildError::InvalidConfig(format!("missing section [{section}]"))
        })?;
        let required = |key: &str| {
            props
                .get(key)
                .map(str::to_owned)
                .ok_or_else(|| ClientBuildError::InvalidConfig(format!("missing key {key}")))
        };

        let port = required("port")?;
        let options = Self {
            host: required("host")?,
            port: parse_number(&port, "port")?,
            use_ssl: props
                .get("useSsl")
                .map(parse_bool)
                .transpose()?
                .unwrap_or(false),
            api_key: required("apiKey")?,
            default_channel: required("defaultChannel")?,
            timeout_ms: props
                .get("timeout")
                .map(|value| parse_number(value, "timeout"))
                .transpose()?
                .unwrap_or(0),
        };
        Ok(options)
    }

    /// Read and parse options from one section of an INI file.
    pub fn from_ini_file(path: impl AsRef<Path>, section: &str) -> Result<Self, ClientBuildError> {
        let text = fs::read_to_string(path)?;
        Self::from_ini_str(&text, section)
    }
}

fn parse_number<T: std::str::FromStr>(value: &str, key: &str) -> Result<T, ClientBuildError> {
    value
        .trim()
        .parse()
        .map_err(|_| ClientBuildError::InvalidConfig(format!("{key} must be a non-negative integer")))
}

fn parse_bool(value: &str) -> Result<bool, ClientBuildError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ClientBuildError::InvalidConfig(format!(
            "useSsl must be a boolean, got {other:?}"
        ))),
    }
}
