//! The shared HTTP client for the remote API.
//!
//! Attaches the bearer credential from the shared slot to every request and
//! normalizes transport failures into `FolioError` at this boundary, so
//! nothing upstream ever pattern-matches on HTTP shapes. The backend's
//! error bodies are FastAPI-style `{"detail": "..."}` objects.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use folio_core::auth::CredentialSlot;
use folio_core::config::AppConfig;
use folio_core::error::{FolioError, Result};

/// Message used when a 401 response carries no detail.
const SESSION_REJECTED_MESSAGE: &str = "Sesión inválida o expirada";

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    /// Backend origin with the `/api` prefix already applied.
    base_url: String,
    credential: CredentialSlot,
}

impl ApiClient {
    pub fn new(config: &AppConfig, credential: CredentialSlot) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| FolioError::internal(format!("failed to build HTTP client: {err}")))?;
        let base_url = format!("{}/api", config.backend_url.trim_end_matches('/'));
        Ok(Self {
            http,
            base_url,
            credential,
        })
    }

    pub(crate) async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.http.request(method, url);
        match self.credential.get().await {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sends the request and decodes a JSON body.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.execute(builder).await?;
        response
            .json::<T>()
            .await
            .map_err(|err| FolioError::internal(format!("failed to decode response: {err}")))
    }

    /// Sends the request, discarding the (ack) body.
    pub(crate) async fn send_ack(&self, builder: RequestBuilder) -> Result<()> {
        self.execute(builder).await.map(|_| ())
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await.map_err(|err| {
            if err.is_connect() || err.is_timeout() {
                FolioError::network(err.to_string())
            } else {
                FolioError::internal(err.to_string())
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let detail = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail);
        debug!(%status, ?detail, "gateway rejected request");

        if status == StatusCode::UNAUTHORIZED {
            return Err(FolioError::auth(
                detail.unwrap_or_else(|| SESSION_REJECTED_MESSAGE.to_string()),
            ));
        }
        Err(FolioError::Resource { detail })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bearer_header_follows_the_credential_slot() {
        let credential = CredentialSlot::new();
        let client = ApiClient::new(&AppConfig::default(), credential.clone()).unwrap();

        let request = client
            .request(Method::GET, "/blog/posts")
            .await
            .build()
            .unwrap();
        assert!(request.headers().get("authorization").is_none());

        credential.set("tok-123".to_string()).await;
        let request = client
            .request(Method::GET, "/blog/posts")
            .await
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get("authorization").unwrap(),
            "Bearer tok-123"
        );
    }

    #[test]
    fn base_url_gains_the_api_prefix_once() {
        let config = AppConfig {
            backend_url: "https://folio.example.com/".to_string(),
            ..AppConfig::default()
        };
        let client = ApiClient::new(&config, CredentialSlot::new()).unwrap();
        assert_eq!(client.base_url, "https://folio.example.com/api");
    }
}
