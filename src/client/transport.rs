//! Authenticated request construction and execution

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client as HttpClient, Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::context::RequestContext;
use super::models::ErrorResponse;
use crate::error::{ApiError, ConfigError, Error, Result};

/// Mollie API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.mollie.com/";

/// Per-request timeout applied by the HTTP client
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const JSON_MEDIA_TYPE: &str = "application/json";

/// Request ready to be executed by a [`Transport`]
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    /// JSON-encoded body
    pub body: Option<Vec<u8>>,
    pub context: RequestContext,
}

/// Successful (2xx) response with the raw body
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub content: Vec<u8>,
}

impl ApiResponse {
    /// Decode the body as JSON.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.content).map_err(|e| ApiError::Decode(e).into())
    }
}

/// Shared HTTP transport used by every API accessor.
///
/// Implementations must be safe to share across tasks.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Build a request for `path`, relative to the base URL.
    ///
    /// Fails with [`ApiError::BadBaseUrl`] before any I/O when the base URL is
    /// unusable.
    fn new_api_request(
        &self,
        ctx: &RequestContext,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<ApiRequest>;

    /// Perform the round trip. Non-2xx answers become [`ApiError::Response`].
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// Connection settings for [`HttpTransport`]
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Absolute URL ending in `/`
    pub base_url: String,
    /// API key (`live_`/`test_`) or organization access token (`access_`)
    pub token: String,
    pub timeout: Duration,
}

impl ClientSettings {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: token.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// reqwest-backed [`Transport`]
pub struct HttpTransport {
    http: HttpClient,
    base_url: String,
    token: String,
    user_agent: String,
}

impl HttpTransport {
    pub fn new(settings: ClientSettings) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: settings.base_url,
            token: settings.token,
            user_agent: format!("mollie-api/{}", env!("CARGO_PKG_VERSION")),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn resolve(&self, path: &str) -> Result<Url> {
        let base = Url::parse(&self.base_url).map_err(|_| ApiError::BadBaseUrl)?;
        if base.cannot_be_a_base() || !base.path().ends_with('/') {
            return Err(ApiError::BadBaseUrl.into());
        }
        // The parser normalizes an empty path to "/", so check it as written.
        let written = self.base_url.split(['?', '#']).next().unwrap_or_default();
        if !written.ends_with('/') {
            return Err(ApiError::BadBaseUrl.into());
        }

        base.join(path.trim_start_matches('/'))
            .map_err(|e| Error::Other(format!("Invalid request path {}: {}", path, e)))
    }

    fn headers(&self, with_body: bool) -> Result<HeaderMap> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.token)).map_err(|_| {
            ConfigError::Invalid("access token contains invalid characters".to_string())
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_MEDIA_TYPE));
        if let Ok(agent) = HeaderValue::from_str(&self.user_agent) {
            headers.insert(USER_AGENT, agent);
        }
        if with_body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_MEDIA_TYPE));
        }

        Ok(headers)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn new_api_request(
        &self,
        ctx: &RequestContext,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<ApiRequest> {
        let url = self.resolve(path)?;
        let headers = self.headers(body.is_some())?;

        Ok(ApiRequest {
            method,
            url,
            headers,
            body,
            context: ctx.clone(),
        })
    }

    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let ApiRequest {
            method,
            url,
            headers,
            body,
            context,
        } = request;

        debug!("{} {}", method, url);

        let mut builder = self
            .http
            .request(method.clone(), url.clone())
            .headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = context.run(builder.send()).await?.map_err(ApiError::from)?;
        let status = response.status();
        let content = context.run(response.bytes()).await?.map_err(ApiError::from)?;

        debug!("{} {} -> {} ({} bytes)", method, url, status, content.len());

        if status.is_success() {
            return Ok(ApiResponse {
                status,
                content: content.to_vec(),
            });
        }

        warn!("{} {} failed with status {}", method, url, status);
        Err(ApiError::Response(error_response(status, &content)).into())
    }
}

/// Decode the API error document, falling back to the status line and raw
/// body text when the body is something else.
fn error_response(status: StatusCode, content: &[u8]) -> ErrorResponse {
    if let Ok(body) = serde_json::from_slice::<ErrorResponse>(content) {
        return body;
    }

    ErrorResponse {
        status: status.as_u16(),
        title: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
        detail: String::from_utf8_lossy(content).trim().to_string(),
        field: None,
        links: None,
    }
}

/// JSON-encode a request payload.
pub fn encode_body<T: Serialize + ?Sized>(payload: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(payload).map_err(|e| ApiError::Encode(e).into())
}

/// Build, execute and return the raw response.
pub async fn send(
    transport: &dyn Transport,
    ctx: &RequestContext,
    method: Method,
    path: &str,
    body: Option<Vec<u8>>,
) -> Result<ApiResponse> {
    let request = transport.new_api_request(ctx, method, path, body)?;
    transport.execute(request).await
}

/// GET `path` and decode the JSON body into `T`.
pub async fn get_json<T: DeserializeOwned>(
    transport: &dyn Transport,
    ctx: &RequestContext,
    path: &str,
) -> Result<T> {
    send(transport, ctx, Method::GET, path, None).await?.decode()
}
