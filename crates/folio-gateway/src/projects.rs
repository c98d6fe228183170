//! HTTP implementation of the project gateway.

use async_trait::async_trait;
use reqwest::Method;

use folio_core::error::Result;
use folio_core::project::{Project, ProjectGateway};

use crate::client::ApiClient;

pub struct HttpProjectGateway {
    client: ApiClient,
}

impl HttpProjectGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProjectGateway for HttpProjectGateway {
    async fn list(&self) -> Result<Vec<Project>> {
        let builder = self.client.request(Method::GET, "/projects").await;
        self.client.send_json(builder).await
    }

    async fn get(&self, id: &str) -> Result<Project> {
        let builder = self
            .client
            .request(Method::GET, &format!("/projects/{id}"))
            .await;
        self.client.send_json(builder).await
    }
}
