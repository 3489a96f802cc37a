//! Configuration management
//!
//! Settings live in `~/.mollie/config.yaml`. Environment variables override
//! file values so CI jobs can run without a config file.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::client::{ClientSettings, DEFAULT_BASE_URL};
use crate::error::{ConfigError, Result};

/// Environment variable holding an API key (`live_...` / `test_...`)
pub const API_TOKEN_ENV: &str = "MOLLIE_API_TOKEN";

/// Environment variable holding an organization access token (`access_...`)
pub const ORG_TOKEN_ENV: &str = "MOLLIE_ORG_TOKEN";

/// Environment variable overriding the API base URL
pub const BASE_URL_ENV: &str = "MOLLIE_BASE_URL";

/// Which configured token is sent as bearer credential
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// Website profile API key
    #[default]
    Api,
    /// Organization access token, required for the organizations API
    Org,
}

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_token: Option<String>,

    #[serde(default)]
    pub auth: AuthMode,

    /// API base URL, must end in `/`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// HTTP timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_token: None,
            org_token: None,
            auth: AuthMode::default(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".mollie").join("config.yaml"))
    }

    /// Resolve an explicit path or fall back to the default location
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Load the file at `path` (or the default location) if it exists,
    /// otherwise start from defaults, then apply environment overrides.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(path)?;
        let mut config = if path.exists() {
            Self::load_from(path)?
        } else {
            Self::default()
        };
        config.apply_env();
        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Tokens are secrets: owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Apply `MOLLIE_*` environment overrides.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(token) = non_empty(API_TOKEN_ENV) {
            self.api_token = Some(token);
        }
        if let Some(token) = non_empty(ORG_TOKEN_ENV) {
            self.org_token = Some(token);
        }
        if let Some(url) = non_empty(BASE_URL_ENV) {
            self.base_url = url;
        }
    }

    /// Token selected by [`Config::auth`]
    pub fn token(&self) -> Result<&str> {
        let token = match self.auth {
            AuthMode::Api => self.api_token.as_deref(),
            AuthMode::Org => self.org_token.as_deref(),
        };
        token.ok_or_else(|| ConfigError::MissingToken.into())
    }

    /// Connection settings for the HTTP transport
    pub fn settings(&self) -> Result<ClientSettings> {
        Ok(ClientSettings::new(self.token()?)
            .with_base_url(self.base_url.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs)))
    }
}
