//! HTTP implementation of the authentication gateway.

use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use folio_core::auth::{AuthGateway, Identity, LOGIN_FALLBACK_MESSAGE};
use folio_core::error::{FolioError, Result};
use folio_core::session::Session;

use crate::client::ApiClient;

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    success: bool,
    token: String,
    user: Identity,
}

#[derive(Deserialize)]
struct VerifyResponse {
    username: String,
}

pub struct HttpAuthGateway {
    client: ApiClient,
}

impl HttpAuthGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login(&self, username: &str, password: &str) -> Result<Session> {
        let builder = self
            .client
            .request(Method::POST, "/auth/login")
            .await
            .json(&LoginRequest { username, password });

        let response: LoginResponse = self.client.send_json(builder).await.map_err(|err| {
            // Bad credentials must surface as a displayable auth message
            match err {
                FolioError::Auth(message) => FolioError::Auth(message),
                FolioError::Resource { detail } => {
                    FolioError::Auth(detail.unwrap_or_else(|| LOGIN_FALLBACK_MESSAGE.to_string()))
                }
                other => other,
            }
        })?;

        if !response.success {
            return Err(FolioError::auth(LOGIN_FALLBACK_MESSAGE));
        }
        Ok(Session {
            token: response.token,
            identity: response.user,
        })
    }

    async fn verify(&self) -> Result<Identity> {
        let builder = self.client.request(Method::GET, "/auth/verify").await;
        let response: VerifyResponse = self.client.send_json(builder).await?;
        Ok(Identity::new(response.username))
    }
}
