//! The admin panel controller.
//!
//! Bridges the auth state to resource operations and owns the two local
//! result caches plus the singleton edit form. The caches are disposable
//! copies, never a source of truth: every mutation is followed by a full
//! list reload so server-assigned fields (id, date) are reflected exactly,
//! instead of merging single returned objects into the cache.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::admin::form::EditForm;
use crate::auth::AuthController;
use crate::error::{FolioError, Result};
use crate::message::{ContactMessage, MessageGateway};
use crate::post::{Post, PostGateway};

/// Outcome of the two independent `enter` loads.
///
/// Posts and messages are separate failure domains; one failing must not
/// block the other, so both results are reported side by side.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub posts_error: Option<FolioError>,
    pub messages_error: Option<FolioError>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.posts_error.is_none() && self.messages_error.is_none()
    }
}

pub struct AdminController {
    auth: Arc<AuthController>,
    posts_gateway: Arc<dyn PostGateway>,
    messages_gateway: Arc<dyn MessageGateway>,
    posts: RwLock<Vec<Post>>,
    messages: RwLock<Vec<ContactMessage>>,
    form: RwLock<Option<EditForm>>,
    /// Bumped by `exit`; in-flight loads tagged with an older value are
    /// discarded instead of installed, so a response resolving after
    /// logout cannot repopulate the caches.
    generation: AtomicU64,
}

impl AdminController {
    pub fn new(
        auth: Arc<AuthController>,
        posts_gateway: Arc<dyn PostGateway>,
        messages_gateway: Arc<dyn MessageGateway>,
    ) -> Self {
        Self {
            auth,
            posts_gateway,
            messages_gateway,
            posts: RwLock::new(Vec::new()),
            messages: RwLock::new(Vec::new()),
            form: RwLock::new(None),
            generation: AtomicU64::new(0),
        }
    }

    /// Enters the panel: guarded on authentication, then loads posts and
    /// messages in parallel.
    pub async fn enter(&self) -> Result<LoadReport> {
        if !self.auth.is_authenticated().await {
            return Err(FolioError::auth("No autorizado"));
        }

        let (posts, messages) = tokio::join!(self.reload_posts(), self.reload_messages());

        let report = LoadReport {
            posts_error: posts.err(),
            messages_error: messages.err(),
        };
        if let Some(err) = &report.posts_error {
            warn!("failed to load posts: {err}");
        }
        if let Some(err) = &report.messages_error {
            warn!("failed to load messages: {err}");
        }
        Ok(report)
    }

    /// Opens a blank create form, discarding any form already open.
    pub async fn begin_create(&self) {
        *self.form.write().await = Some(EditForm::create());
    }

    /// Opens an edit form pre-populated from `post`, discarding any form
    /// already open.
    pub async fn begin_edit(&self, post: &Post) {
        *self.form.write().await = Some(EditForm::edit(post));
    }

    /// Discards the open form without saving.
    pub async fn cancel_edit(&self) {
        *self.form.write().await = None;
    }

    /// Snapshot of the open form, if any.
    pub async fn form(&self) -> Option<EditForm> {
        self.form.read().await.clone()
    }

    /// Saves the form: create when it has no backing id, update otherwise.
    ///
    /// On success the form closes and the post cache is fully reloaded.
    /// On failure the form stays open with the entered data intact so the
    /// user does not lose input.
    pub async fn save(&self, form: EditForm) -> Result<()> {
        let draft = form.to_draft();
        let result = match form.editing_id.as_deref() {
            Some(id) => self.posts_gateway.update(id, &draft).await,
            None => self.posts_gateway.create(&draft).await,
        };

        match result {
            Ok(saved) => {
                info!(id = %saved.id, "post saved");
                *self.form.write().await = None;
                self.reload_posts().await
            }
            Err(err) => {
                *self.form.write().await = Some(form);
                Err(err)
            }
        }
    }

    /// Deletes a post, but only when the caller confirmed the decision.
    ///
    /// A declined confirmation never reaches the gateway. Returns whether
    /// the delete was issued. On failure the cache is left unchanged,
    /// stale but consistent.
    pub async fn delete_post(&self, id: &str, confirmed: bool) -> Result<bool> {
        if !confirmed {
            debug!(id, "post delete declined");
            return Ok(false);
        }
        self.posts_gateway.delete(id).await?;
        info!(id, "post deleted");
        self.reload_posts().await?;
        Ok(true)
    }

    /// Deletes a contact message; same confirmation contract as
    /// [`delete_post`](Self::delete_post).
    pub async fn delete_message(&self, id: &str, confirmed: bool) -> Result<bool> {
        if !confirmed {
            debug!(id, "message delete declined");
            return Ok(false);
        }
        self.messages_gateway.delete(id).await?;
        info!(id, "message deleted");
        self.reload_messages().await?;
        Ok(true)
    }

    /// Leaves the panel on logout: clears both caches, closes any open
    /// form, and invalidates in-flight loads so a later login (possibly
    /// as a different identity) cannot see stale data.
    pub async fn exit(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.posts.write().await.clear();
        self.messages.write().await.clear();
        *self.form.write().await = None;
    }

    pub async fn posts(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }

    pub async fn messages(&self) -> Vec<ContactMessage> {
        self.messages.read().await.clone()
    }

    async fn reload_posts(&self) -> Result<()> {
        let generation = self.generation.load(Ordering::SeqCst);
        let posts = self.posts_gateway.list().await?;
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("discarding stale post list result");
            return Ok(());
        }
        *self.posts.write().await = posts;
        Ok(())
    }

    async fn reload_messages(&self) -> Result<()> {
        let generation = self.generation.load(Ordering::SeqCst);
        let messages = self.messages_gateway.list().await?;
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("discarding stale message list result");
            return Ok(());
        }
        *self.messages.write().await = messages;
        Ok(())
    }
}
