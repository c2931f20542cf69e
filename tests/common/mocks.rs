//! Mock implementations for testing.
//!
//! [`MockTransport`] answers gateway requests from a script instead of the
//! network, so page controllers can be driven end to end without a server.

use async_trait::async_trait;
use easyrecipe::api::{ApiRequest, ApiResponse, HttpTransport, Method, TransportError};
use easyrecipe::ApiClient;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

/// Base URL every mock client is built with.
pub const MOCK_BASE: &str = "http://api.test";

#[derive(Debug, Clone)]
enum Reply {
    Respond(ApiResponse),
    Fail(String),
}

/// Scripted transport keyed by method and endpoint (path plus query).
///
/// Replies queued for the same endpoint are consumed in order; the last one
/// is reused for any further calls. Requests without a script fail with a
/// transport error.
///
/// # Examples
///
/// ```ignore
/// let mock = MockTransport::new();
/// mock.on(Method::Get, "/recipes/random", 200, json!({ "meal": null }));
/// mock.fail(Method::Get, "/recipes/categories", "connection refused");
/// let api = mock.into_client();
/// ```
#[derive(Debug, Default)]
pub struct MockTransport {
    replies: RefCell<HashMap<(Method, String), VecDeque<Reply>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON reply.
    pub fn on(&self, method: Method, endpoint: &str, status: u16, body: Value) -> &Self {
        self.push(
            method,
            endpoint,
            Reply::Respond(ApiResponse {
                status,
                body: body.to_string(),
            }),
        )
    }

    /// Queue a reply with an empty body.
    pub fn on_empty(&self, method: Method, endpoint: &str, status: u16) -> &Self {
        self.push(
            method,
            endpoint,
            Reply::Respond(ApiResponse {
                status,
                body: String::new(),
            }),
        )
    }

    /// Queue a network failure.
    pub fn fail(&self, method: Method, endpoint: &str, message: &str) -> &Self {
        self.push(method, endpoint, Reply::Fail(message.to_string()))
    }

    fn push(&self, method: Method, endpoint: &str, reply: Reply) -> &Self {
        self.replies
            .borrow_mut()
            .entry((method, endpoint.to_string()))
            .or_default()
            .push_back(reply);
        self
    }

    pub fn into_client(self) -> ApiClient<MockTransport> {
        ApiClient::new(MOCK_BASE, self)
    }

    /// Every request seen so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    /// Number of calls made to one endpoint.
    pub fn calls(&self, method: Method, endpoint: &str) -> usize {
        let url = format!("{}{}", MOCK_BASE, endpoint);
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.method == method && r.url == url)
            .count()
    }

    /// Decoded JSON body of the last call to an endpoint.
    pub fn last_body(&self, method: Method, endpoint: &str) -> Option<Value> {
        let url = format!("{}{}", MOCK_BASE, endpoint);
        self.requests
            .borrow()
            .iter()
            .rev()
            .find(|r| r.method == method && r.url == url)
            .and_then(|r| r.body.as_deref())
            .and_then(|body| serde_json::from_str(body).ok())
    }
}

#[async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.borrow_mut().push(request.clone());

        let endpoint = request
            .url
            .strip_prefix(MOCK_BASE)
            .unwrap_or(&request.url)
            .to_string();

        let mut replies = self.replies.borrow_mut();
        let queue = replies
            .get_mut(&(request.method, endpoint.clone()))
            .ok_or_else(|| {
                TransportError(format!("no mock for {} {}", request.method, endpoint))
            })?;

        let reply = if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        };

        match reply {
            Some(Reply::Respond(response)) => Ok(response),
            Some(Reply::Fail(message)) => Err(TransportError(message)),
            None => Err(TransportError(format!(
                "no mock for {} {}",
                request.method, endpoint
            ))),
        }
    }
}
