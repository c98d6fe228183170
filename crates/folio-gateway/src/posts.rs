//! HTTP implementation of the blog post gateway.

use async_trait::async_trait;
use reqwest::Method;

use folio_core::error::Result;
use folio_core::post::{Post, PostDraft, PostGateway};

use crate::client::ApiClient;

pub struct HttpPostGateway {
    client: ApiClient,
}

impl HttpPostGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PostGateway for HttpPostGateway {
    async fn list(&self) -> Result<Vec<Post>> {
        let builder = self.client.request(Method::GET, "/blog/posts").await;
        self.client.send_json(builder).await
    }

    async fn get(&self, id: &str) -> Result<Post> {
        let builder = self
            .client
            .request(Method::GET, &format!("/blog/posts/{id}"))
            .await;
        self.client.send_json(builder).await
    }

    async fn create(&self, draft: &PostDraft) -> Result<Post> {
        let builder = self
            .client
            .request(Method::POST, "/blog/posts")
            .await
            .json(draft);
        self.client.send_json(builder).await
    }

    async fn update(&self, id: &str, draft: &PostDraft) -> Result<Post> {
        let builder = self
            .client
            .request(Method::PUT, &format!("/blog/posts/{id}"))
            .await
            .json(draft);
        self.client.send_json(builder).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let builder = self
            .client
            .request(Method::DELETE, &format!("/blog/posts/{id}"))
            .await;
        self.client.send_ack(builder).await
    }
}
