//! Error types for the Mollie API client

use thiserror::Error;

use crate::client::models::ErrorResponse;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl Error {
    /// True when the error is the malformed base URL sentinel.
    pub fn is_bad_base_url(&self) -> bool {
        matches!(self, Error::Api(ApiError::BadBaseUrl))
    }

    /// HTTP status of a non-2xx API answer, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api(ApiError::Response(body)) => Some(body.status),
            _ => None,
        }
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured base URL is unparseable or lacks a trailing slash.
    /// Raised while building the request, before any network I/O.
    #[error("base URL must be an absolute URL with a trailing slash")]
    BadBaseUrl,

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {0}")]
    Response(ErrorResponse),

    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Request cancelled")]
    Cancelled,

    #[error("Request deadline exceeded")]
    DeadlineExceeded,
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network(format!("Failed to connect to API: {}", err))
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `mollie config set` to create one.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("No access token configured. Set MOLLIE_API_TOKEN or run `mollie config set`.")]
    MissingToken,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_base_url_is_identifiable() {
        let err: Error = ApiError::BadBaseUrl.into();
        assert!(err.is_bad_base_url());
        assert!(!Error::Other("x".to_string()).is_bad_base_url());
    }

    #[test]
    fn test_api_error_network() {
        let err = ApiError::Network("Connection refused".to_string());
        assert!(err.to_string().contains("Connection refused"));
    }

    #[test]
    fn test_decode_error_keeps_syntax_diagnostic() {
        let json_err = serde_json::from_str::<serde_json::Value>("{hello").unwrap_err();
        let err: Error = ApiError::Decode(json_err).into();
        let msg = err.to_string();
        assert!(msg.contains("decode"));
        assert!(msg.contains("line 1 column"));
    }

    #[test]
    fn test_response_error_exposes_status() {
        let err: Error = ApiError::Response(ErrorResponse {
            status: 404,
            title: "Not Found".to_string(),
            detail: "No organization exists with token org_1.".to_string(),
            field: None,
            links: None,
        })
        .into();

        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("No organization exists"));
    }

    #[test]
    fn test_config_error_missing_token() {
        let err = ConfigError::MissingToken;
        assert!(err.to_string().contains("MOLLIE_API_TOKEN"));
    }

    #[test]
    fn test_config_error_parse() {
        let err = ConfigError::ParseError("unexpected key".to_string());
        assert!(err.to_string().contains("unexpected key"));
    }

    #[test]
    fn test_error_from_config_error() {
        let err: Error = ConfigError::NotFound.into();

        match err {
            Error::Config(ConfigError::NotFound) => (),
            _ => panic!("Expected Error::Config(ConfigError::NotFound)"),
        }
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}
