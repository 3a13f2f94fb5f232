//! Configuration management for prismaop
//!
//! Settings come from, in order of precedence: CLI flags, environment
//! variables (both handled by clap), the YAML config file, then defaults.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::client::pacing::DEFAULT_REQUEST_DELAY;
use crate::error::{ConfigError, Result};

/// Production API base URL
pub const DEFAULT_API_URL: &str = "https://api.prismacloud.io";

/// Report written to the working directory unless overridden
pub const DEFAULT_OUTPUT: &str = "prisma_cloud_account_inventory.csv";

/// Values shipped in sample configs; a run must never reach the API with them.
const PLACEHOLDER_API_URL: &str = "https://api.your-region.prismacloud.io";
const PLACEHOLDER_ACCESS_KEY: &str = "YOUR_ACCESS_KEY_ID";
const PLACEHOLDER_SECRET_KEY: &str = "YOUR_SECRET_KEY";

/// Layered configuration; every field is optional until resolved
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// API base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Access key ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,

    /// Secret key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,

    /// Pause before each organization member listing, in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_delay_ms: Option<u64>,

    /// Report output path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

/// Fully resolved settings for one inventory run
#[derive(Debug, Clone)]
pub struct Settings {
    pub credentials: Credentials,
    pub request_delay: Duration,
    pub output: PathBuf,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".prismaop").join("config.yaml"))
    }

    /// Load configuration from an explicit path, or the default path.
    ///
    /// A missing file at the default path yields an empty config; a missing
    /// file that was asked for explicitly is an error.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(Path::new(path)),
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Layer `other` on top of `self`; values set in `other` win.
    pub fn overlay(self, other: Config) -> Config {
        Config {
            api_url: other.api_url.or(self.api_url),
            access_key: other.access_key.or(self.access_key),
            secret_key: other.secret_key.or(self.secret_key),
            request_delay_ms: other.request_delay_ms.or(self.request_delay_ms),
            output: other.output.or(self.output),
        }
    }

    /// Reject sample placeholder values among the fields that are set.
    pub fn check_placeholders(&self) -> Result<()> {
        reject_placeholders(
            self.api_url.as_deref(),
            self.access_key.as_deref(),
            self.secret_key.as_deref(),
        )
    }

    /// Whether a secret key is present (used to decide on prompting).
    pub fn has_secret_key(&self) -> bool {
        self.secret_key.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Resolve defaults and validate credentials.
    pub fn into_settings(self) -> Result<Settings> {
        let credentials = Credentials::new(
            self.api_url.as_deref().unwrap_or(DEFAULT_API_URL),
            self.access_key.as_deref().unwrap_or_default(),
            self.secret_key.as_deref().unwrap_or_default(),
        );
        credentials.validate()?;

        Ok(Settings {
            credentials,
            request_delay: self
                .request_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_REQUEST_DELAY),
            output: self
                .output
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
        })
    }
}

/// API credentials: base URL plus access key pair
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_url: String,
    access_key: String,
    secret_key: String,
}

impl Credentials {
    pub fn new(
        api_url: impl Into<String>,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            api_url: api_url.into(),
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Reject missing values and the sample placeholders.
    pub fn validate(&self) -> Result<()> {
        if self.api_url.trim().is_empty() {
            return Err(ConfigError::Missing("API URL", "api-url", "PRISMAOP_API_URL").into());
        }
        if self.access_key.trim().is_empty() {
            return Err(
                ConfigError::Missing("Access key", "access-key", "PRISMAOP_ACCESS_KEY").into(),
            );
        }
        if self.secret_key.is_empty() {
            return Err(
                ConfigError::Missing("Secret key", "secret-key", "PRISMAOP_SECRET_KEY").into(),
            );
        }

        reject_placeholders(
            Some(self.api_url.as_str()),
            Some(self.access_key.as_str()),
            Some(self.secret_key.as_str()),
        )
    }
}

fn reject_placeholders(
    api_url: Option<&str>,
    access_key: Option<&str>,
    secret_key: Option<&str>,
) -> Result<()> {
    if api_url.is_some_and(|url| url.trim_end_matches('/') == PLACEHOLDER_API_URL) {
        return Err(ConfigError::Placeholder("API URL").into());
    }
    if access_key == Some(PLACEHOLDER_ACCESS_KEY) {
        return Err(ConfigError::Placeholder("Access key").into());
    }
    if secret_key == Some(PLACEHOLDER_SECRET_KEY) {
        return Err(ConfigError::Placeholder("Secret key").into());
    }
    Ok(())
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_url", &self.api_url)
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}
