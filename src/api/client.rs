use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config;

use super::types::{ApiError, ErrorBody};

/// Thin HTTP client for the HRMS backend. Holds a reusable `reqwest::Client`
/// and, optionally, a fixed base URL (tests); in the browser the base URL is
/// resolved from the runtime configuration on first use.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self { client: Client::new(), base_url: None }
    }

    /// Pin the backend host explicitly, bypassing runtime config resolution.
    /// `base_url` is the host only; the `/api` prefix is appended per request.
    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self { client: Client::new(), base_url: Some(base_url.into()) }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    /// Root of the REST surface, e.g. `http://localhost:8000/api`.
    pub(crate) async fn api_root(&self) -> String {
        let host = match &self.base_url {
            Some(url) => url.clone(),
            None => config::await_api_base_url().await,
        };
        format!("{}/api", host.trim_end_matches('/'))
    }

    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        request.send().await.map_err(|err| ApiError::Transport(err.to_string()))
    }

    /// Consume `response`: deserialize the body on success, otherwise turn the
    /// status and error payload into an `ApiError::Server`.
    pub(crate) async fn decode_json<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, ApiError> {
        if response.status().is_success() {
            response.json::<T>().await.map_err(|err| ApiError::Decode(err.to_string()))
        } else {
            Err(Self::server_error(response).await)
        }
    }

    /// For DELETE endpoints the backend may answer 204 or an empty 200; any
    /// successful status counts, the body is discarded.
    pub(crate) async fn expect_empty(&self, response: Response) -> Result<(), ApiError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::server_error(response).await)
        }
    }

    async fn server_error(response: Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.json::<ErrorBody>().await.unwrap_or_default();
        ApiError::Server { status, body }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
