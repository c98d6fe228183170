//! HTTP implementation of the contact message gateway.

use async_trait::async_trait;
use reqwest::Method;

use folio_core::error::Result;
use folio_core::message::{ContactMessage, MessageDraft, MessageGateway};

use crate::client::ApiClient;

pub struct HttpMessageGateway {
    client: ApiClient,
}

impl HttpMessageGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MessageGateway for HttpMessageGateway {
    async fn list(&self) -> Result<Vec<ContactMessage>> {
        let builder = self.client.request(Method::GET, "/contact/messages").await;
        self.client.send_json(builder).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let builder = self
            .client
            .request(Method::DELETE, &format!("/contact/messages/{id}"))
            .await;
        self.client.send_ack(builder).await
    }

    async fn submit(&self, draft: &MessageDraft) -> Result<()> {
        let builder = self
            .client
            .request(Method::POST, "/contact")
            .await
            .json(draft);
        self.client.send_ack(builder).await
    }
}
