//! Mock transport for testing
//!
//! Records every request and answers from a queue of canned replies, so
//! accessors can be unit tested without a network.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::{Method, StatusCode, Url};

use super::context::RequestContext;
use super::models::ErrorResponse;
use super::transport::{ApiRequest, ApiResponse, Transport};
use crate::error::{ApiError, Result};

/// Canned answer for the next executed request
#[derive(Debug, Clone)]
pub enum MockReply {
    /// 2xx with the given body
    Body(StatusCode, String),
    /// Non-2xx translated the way the HTTP transport does
    Status(ErrorResponse),
    /// Network-level failure
    Network(String),
}

/// Request captured by [`MockTransport`]
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

/// Mock transport.
///
/// # Example
/// ```ignore
/// let mock = Arc::new(MockTransport::new().with_reply(MockReply::Body(StatusCode::OK, json)));
/// let client = MollieClient::with_transport(mock.clone());
/// client.organizations.get_current(&RequestContext::background()).await?;
/// assert_eq!(mock.requests()[0].path, "/v2/organizations/me");
/// ```
pub struct MockTransport {
    base_url: Url,
    replies: Mutex<VecDeque<MockReply>>,
    requests: Mutex<Vec<CapturedRequest>>,
    bad_base_url: bool,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self {
            base_url: Url::parse("https://api.mollie.test/").expect("static url"),
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            bad_base_url: false,
        }
    }
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply.
    pub fn with_reply(self, reply: MockReply) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    /// Queue a 200 with the given JSON body.
    pub fn with_json(self, body: &str) -> Self {
        self.with_reply(MockReply::Body(StatusCode::OK, body.to_string()))
    }

    /// Fail request construction with the bad base URL sentinel.
    pub fn with_bad_base_url(mut self) -> Self {
        self.bad_base_url = true;
        self
    }

    /// Requests executed so far.
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    fn new_api_request(
        &self,
        ctx: &RequestContext,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<ApiRequest> {
        if self.bad_base_url {
            return Err(ApiError::BadBaseUrl.into());
        }

        Ok(ApiRequest {
            method,
            url: self.base_url.join(path).expect("valid test path"),
            headers: Default::default(),
            body,
            context: ctx.clone(),
        })
    }

    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        request.context.check()?;

        self.requests.lock().unwrap().push(CapturedRequest {
            method: request.method,
            path: request.url.path().to_string(),
            body: request
                .body
                .as_deref()
                .map(|b| serde_json::from_slice(b).expect("request body is JSON")),
        });

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("no reply queued for request");

        match reply {
            MockReply::Body(status, content) => Ok(ApiResponse {
                status,
                content: content.into_bytes(),
            }),
            MockReply::Status(body) => Err(ApiError::Response(body).into()),
            MockReply::Network(msg) => Err(ApiError::Network(msg).into()),
        }
    }
}
