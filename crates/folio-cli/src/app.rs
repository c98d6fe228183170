//! Dependency wiring for the CLI.

use std::sync::Arc;

use anyhow::{Context, Result};

use folio_core::admin::AdminController;
use folio_core::auth::{AuthController, CredentialSlot};
use folio_core::config::AppConfig;
use folio_core::content::PublicContent;
use folio_core::session::FileSessionStore;
use folio_gateway::{
    ApiClient, HttpAuthGateway, HttpMessageGateway, HttpPostGateway, HttpProjectGateway,
};

/// The assembled application: controllers backed by the HTTP gateways and
/// the file session store.
pub struct App {
    pub auth: Arc<AuthController>,
    pub admin: Arc<AdminController>,
    pub content: PublicContent,
}

impl App {
    pub fn new() -> Result<Self> {
        let config = AppConfig::load().context("failed to load configuration")?;
        let session_dir = config
            .session_dir()
            .context("cannot determine a session directory")?;

        let credential = CredentialSlot::new();
        let client = ApiClient::new(&config, credential.clone())
            .context("failed to build the API client")?;

        let store = Arc::new(
            FileSessionStore::new(session_dir).context("failed to open the session store")?,
        );
        let auth = Arc::new(AuthController::new(
            Arc::new(HttpAuthGateway::new(client.clone())),
            store,
            credential,
        ));

        let posts = Arc::new(HttpPostGateway::new(client.clone()));
        let messages = Arc::new(HttpMessageGateway::new(client.clone()));
        let projects = Arc::new(HttpProjectGateway::new(client));

        let admin = Arc::new(AdminController::new(
            auth.clone(),
            posts.clone(),
            messages.clone(),
        ));
        let content = PublicContent::new(posts, projects, messages);

        Ok(Self {
            auth,
            admin,
            content,
        })
    }
}
