//! Browser transport for the EasyRecipe API gateway

use async_trait::async_trait;
use easyrecipe::api::{ApiRequest, ApiResponse, HttpTransport, Method, TransportError};
use easyrecipe::config::DEFAULT_API_URL;
use easyrecipe::ApiClient;
use gloo_net::http::Request;

/// API base URL baked in at build time.
pub fn api_base() -> &'static str {
    option_env!("EASYRECIPE_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// `fetch`-backed transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError(format!("Failed to build request: {}", e)))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| TransportError(format!("Network error: {}", e)))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(format!("Failed to read response: {}", e)))?;

        Ok(ApiResponse { status, body })
    }
}

pub type Api = ApiClient<GlooTransport>;

pub fn client() -> Api {
    ApiClient::new(api_base(), GlooTransport)
}
