//! Read path for the public pages.
//!
//! Deliberate availability-over-freshness tradeoff: when the gateway is
//! down, visitors get the built-in seed content instead of an empty page.
//! Errors are absorbed here and only ever logged.

pub mod seed;

use std::sync::Arc;

use tracing::warn;

use crate::error::Result;
use crate::message::{MessageDraft, MessageGateway};
use crate::post::{Post, PostGateway};
use crate::project::{Project, ProjectGateway};

/// Data source for the public blog, projects, and contact pages.
pub struct PublicContent {
    posts_gateway: Arc<dyn PostGateway>,
    projects_gateway: Arc<dyn ProjectGateway>,
    messages_gateway: Arc<dyn MessageGateway>,
}

impl PublicContent {
    pub fn new(
        posts_gateway: Arc<dyn PostGateway>,
        projects_gateway: Arc<dyn ProjectGateway>,
        messages_gateway: Arc<dyn MessageGateway>,
    ) -> Self {
        Self {
            posts_gateway,
            projects_gateway,
            messages_gateway,
        }
    }

    /// Blog posts for the public page; falls back to the seed dataset on
    /// any gateway failure.
    pub async fn posts(&self) -> Vec<Post> {
        match self.posts_gateway.list().await {
            Ok(posts) => posts,
            Err(err) => {
                warn!("falling back to seed posts: {err}");
                seed::posts()
            }
        }
    }

    /// A single blog post; falls back to the seed dataset on gateway
    /// failure, `None` when the id is unknown on both sides.
    pub async fn post(&self, id: &str) -> Option<Post> {
        match self.posts_gateway.get(id).await {
            Ok(post) => Some(post),
            Err(err) => {
                warn!("falling back to seed posts for {id}: {err}");
                seed::posts().into_iter().find(|post| post.id == id)
            }
        }
    }

    /// Projects for the public page, with the same fallback.
    pub async fn projects(&self) -> Vec<Project> {
        match self.projects_gateway.list().await {
            Ok(projects) => projects,
            Err(err) => {
                warn!("falling back to seed projects: {err}");
                seed::projects()
            }
        }
    }

    /// Submits the public contact form.
    ///
    /// Unlike the read paths this propagates errors: the form does tell
    /// the visitor when a submission did not go through.
    pub async fn submit_message(&self, draft: &MessageDraft) -> Result<()> {
        self.messages_gateway.submit(draft).await
    }
}
