//! HTTP client for the authentication backend.

use crate::backend::api::models::{LoginRequest, RegisterRequest, TokenResponse, User};
use crate::simple_error;
use crate::utils::{Error, Result};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("frontdoor/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `POST /auth/login`
    pub async fn login(&self, request: &LoginRequest) -> Result<TokenResponse> {
        let response = self
            .http
            .post(self.url("/auth/login"))
            .json(request)
            .send()
            .await?;
        read_json(response).await
    }

    /// `POST /auth/register`
    pub async fn register(&self, request: &RegisterRequest) -> Result<TokenResponse> {
        let response = self
            .http
            .post(self.url("/auth/register"))
            .json(request)
            .send()
            .await?;
        read_json(response).await
    }

    /// `GET /api/profile`, authorized with the stored token.
    pub async fn profile(&self, token: &str) -> Result<User> {
        let response = self
            .http
            .get(self.url("/api/profile"))
            .bearer_auth(token)
            .send()
            .await?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let body = response.text().await.unwrap_or_default();
    Err(status_error(status, &body))
}

/// Error bodies are JSON strings (`"Invalid token"`); anything else is shown raw.
fn status_error(status: StatusCode, body: &str) -> Error {
    let message = serde_json::from_str::<String>(body)
        .ok()
        .or_else(|| {
            let raw = body.trim();
            (!raw.is_empty()).then(|| raw.to_string())
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        });

    simple_error!("{} ({})", message, status.as_u16())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let client = ApiClient::new("http://localhost:8080/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url("/api/profile"), "http://localhost:8080/api/profile");
    }

    #[test]
    fn json_string_bodies_become_the_message() {
        let err = status_error(StatusCode::CONFLICT, "\"Email already exists\"");
        assert_eq!(err.to_string(), "Email already exists (409)");
    }

    #[test]
    fn plain_bodies_are_kept_raw() {
        let err = status_error(
            StatusCode::UNAUTHORIZED,
            "Invalid token: ExpiredSignature\n",
        );
        assert_eq!(err.to_string(), "Invalid token: ExpiredSignature (401)");
    }

    #[test]
    fn empty_bodies_use_the_reason_phrase() {
        let err = status_error(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(err.to_string(), "Internal Server Error (500)");
    }

    #[tokio::test]
    async fn unreachable_server_is_an_error() {
        let client = ApiClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        assert!(client.profile("abc123").await.is_err());
    }
}
