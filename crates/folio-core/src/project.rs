//! Portfolio project domain model and gateway contract.
//!
//! Projects are read-only on this side; the public pages list them with the
//! same fetch-with-fallback pattern as blog posts.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    #[serde(rename = "liveUrl")]
    pub live_url: String,
    #[serde(rename = "githubUrl")]
    pub github_url: String,
    pub category: String,
}

/// Remote read contract for projects.
#[async_trait]
pub trait ProjectGateway: Send + Sync {
    async fn list(&self) -> Result<Vec<Project>>;

    async fn get(&self, id: &str) -> Result<Project>;
}
