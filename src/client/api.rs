//! HTTP client for the account endpoints with a fixed timeout and consistent
//! error mapping. Server rejections keep the `{message}` returned by the API so
//! forms can show it; transport failures are mapped to `Network`/`Timeout`.

use super::errors::ClientError;
use crate::{
    api::ApiMessage,
    rules::{login::LoginRequest, password::PasswordChange, profile::ProfileUpdate},
    APP_USER_AGENT,
};
use reqwest::{header::CONTENT_TYPE, Client, Method, Response};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

/// Default request timeout applied to every call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Maximum number of error body characters surfaced to the form.
const MAX_ERROR_CHARS: usize = 200;

pub const LOGIN_PATH: &str = "/api/login";
pub const PASSWORD_PATH: &str = "/api/password";
pub const PROFILE_PATH: &str = "/api/profile";

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// # Errors
    /// Returns `ClientError::Config` if the base URL is invalid.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// # Errors
    /// Returns `ClientError::Config` if the base URL is invalid or the client cannot be built.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let parsed = Url::parse(base_url.trim())
            .map_err(|err| ClientError::Config(format!("Invalid API base URL: {err}")))?;

        if parsed.cannot_be_a_base() {
            return Err(ClientError::Config(format!(
                "Invalid API base URL: {base_url}"
            )));
        }

        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|err| ClientError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Builds a URL from the base URL and the provided path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim().trim_start_matches('/'))
    }

    /// Sends a JSON body and parses the `{message}` response.
    ///
    /// # Errors
    /// Returns a `ClientError` for transport failures, non-success statuses and undecodable bodies.
    #[instrument(skip(self, body))]
    pub async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<ApiMessage, ClientError> {
        let payload = serde_json::to_string(body)
            .map_err(|err| ClientError::Serialization(format!("Failed to encode request: {err}")))?;

        let response = self
            .http
            .request(method, self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(map_request_error)?;

        debug!("response status: {}", response.status());

        handle_json_response(response).await
    }

    /// POST `/api/login`
    ///
    /// # Errors
    /// See [`ApiClient::send_json`].
    pub async fn login(&self, request: &LoginRequest) -> Result<ApiMessage, ClientError> {
        self.send_json(Method::POST, LOGIN_PATH, request).await
    }

    /// POST `/api/password`
    ///
    /// # Errors
    /// See [`ApiClient::send_json`].
    pub async fn change_password(
        &self,
        request: &PasswordChange,
    ) -> Result<ApiMessage, ClientError> {
        self.send_json(Method::POST, PASSWORD_PATH, request).await
    }

    /// PUT `/api/profile`
    ///
    /// # Errors
    /// See [`ApiClient::send_json`].
    pub async fn update_profile(&self, request: &ProfileUpdate) -> Result<ApiMessage, ClientError> {
        self.send_json(Method::PUT, PROFILE_PATH, request).await
    }
}

/// Maps transport errors into `ClientError` variants with timeout detection.
fn map_request_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        ClientError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        ClientError::Network(format!("Unable to reach the server: {err}"))
    }
}

/// Parses JSON responses and surfaces HTTP errors with the server message.
async fn handle_json_response(response: Response) -> Result<ApiMessage, ClientError> {
    let status = response.status();

    if status.is_success() {
        return response
            .json::<ApiMessage>()
            .await
            .map_err(|err| ClientError::Parse(format!("Failed to decode response: {err}")));
    }

    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ApiMessage>(&body) {
        Ok(api_message) => api_message.message,
        Err(_) => sanitize_body(&body),
    };

    Err(ClientError::Http {
        status: status.as_u16(),
        message,
    })
}

/// Trims and truncates error bodies before they reach the form.
fn sanitize_body(body: &str) -> String {
    body.trim().chars().take(MAX_ERROR_CHARS).collect()
}
