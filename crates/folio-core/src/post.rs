//! Blog post domain model and gateway contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A published blog post as the gateway returns it.
///
/// `id`, `author` and `date` are assigned server-side; the client never
/// synthesizes them for persisted posts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    /// Cover image URL
    pub image: String,
    pub author: String,
    /// Calendar date or ISO timestamp string, as emitted by the gateway
    pub date: String,
    pub category: String,
    #[serde(rename = "readTime")]
    pub read_time: String,
    pub tags: Vec<String>,
}

/// Payload for creating or updating a post.
///
/// By the time a draft reaches a gateway, `tags` must already be trimmed
/// non-empty strings; normalization happens in the admin controller, not here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image: String,
    pub category: String,
    #[serde(rename = "readTime")]
    pub read_time: String,
    pub tags: Vec<String>,
}

/// Remote persistence contract for blog posts.
///
/// Implementations must report an operation either as fully applied
/// server-side or as failed; no partial success leaks to callers.
#[async_trait]
pub trait PostGateway: Send + Sync {
    async fn list(&self) -> Result<Vec<Post>>;

    async fn get(&self, id: &str) -> Result<Post>;

    /// Returns the created post with its server-assigned `id` and `date`.
    async fn create(&self, draft: &PostDraft) -> Result<Post>;

    async fn update(&self, id: &str, draft: &PostDraft) -> Result<Post>;

    async fn delete(&self, id: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_wire_shape_uses_camel_case_read_time() {
        let json = serde_json::json!({
            "id": "66f0a1",
            "title": "Hola",
            "excerpt": "Resumen",
            "content": "Cuerpo",
            "image": "https://example.com/a.jpg",
            "author": "Ubaldino Ramos",
            "date": "2025-07-15",
            "category": "React",
            "readTime": "5 min",
            "tags": ["React", "Frontend"],
        });
        let post: Post = serde_json::from_value(json).unwrap();
        assert_eq!(post.read_time, "5 min");
        assert_eq!(post.tags.len(), 2);

        let back = serde_json::to_value(&post).unwrap();
        assert!(back.get("readTime").is_some());
        assert!(back.get("read_time").is_none());
    }
}
