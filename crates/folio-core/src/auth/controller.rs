//! The authentication controller.
//!
//! Owns the `AuthState` machine and the persisted session. Stored
//! credentials are never trusted on their own: startup re-asserts them
//! against the gateway, because a token that expired server-side must not
//! silently present the admin panel as accessible.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::auth::credential::CredentialSlot;
use crate::auth::gateway::AuthGateway;
use crate::auth::model::{AuthState, Identity};
use crate::error::{FolioError, Result};
use crate::session::{Session, SessionStore};

pub struct AuthController {
    gateway: Arc<dyn AuthGateway>,
    store: Arc<dyn SessionStore>,
    credential: CredentialSlot,
    state: RwLock<AuthState>,
}

impl AuthController {
    /// Creates a controller in the `Anonymous` state.
    ///
    /// The credential slot is shared with the gateway clients; this
    /// controller is its only writer.
    pub fn new(
        gateway: Arc<dyn AuthGateway>,
        store: Arc<dyn SessionStore>,
        credential: CredentialSlot,
    ) -> Self {
        Self {
            gateway,
            store,
            credential,
            state: RwLock::new(AuthState::Anonymous),
        }
    }

    /// Attempts to restore a previous session on startup.
    ///
    /// A stored credential is verified silently against the gateway. On
    /// rejection the session is cleared and the machine stays `Anonymous`;
    /// this path never reports an error to the caller.
    pub async fn restore(&self) -> bool {
        let Some(session) = self.store.load().await else {
            debug!("no stored session to restore");
            return false;
        };

        *self.state.write().await = AuthState::Authenticating;
        self.credential.set(session.token.clone()).await;

        match self.gateway.verify().await {
            Ok(identity) => {
                info!(username = %identity.username, "restored session from storage");
                *self.state.write().await = AuthState::Authenticated(identity);
                true
            }
            Err(err) => {
                warn!("stored session failed verification: {err}");
                self.credential.clear().await;
                if let Err(err) = self.store.clear().await {
                    warn!("failed to clear rejected session: {err}");
                }
                *self.state.write().await = AuthState::Anonymous;
                false
            }
        }
    }

    /// Logs in with the given credentials.
    ///
    /// On success the session is persisted and the identity returned. On
    /// rejection or network failure the machine returns to an anonymous
    /// state carrying a displayable message; the user may retry.
    pub async fn login(&self, username: &str, password: &str) -> Result<Identity> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(FolioError::auth("Usuario y contraseña son requeridos"));
        }

        *self.state.write().await = AuthState::Authenticating;

        match self.gateway.login(username, password).await {
            Ok(session) => {
                self.credential.set(session.token.clone()).await;
                // Store failures are swallowed: the login itself succeeded,
                // the session just will not survive a restart.
                if let Err(err) = self.store.save(&session).await {
                    warn!("failed to persist session: {err}");
                }
                info!(username = %session.identity.username, "login succeeded");
                let identity = session.identity.clone();
                *self.state.write().await = AuthState::Authenticated(identity.clone());
                Ok(identity)
            }
            Err(err) => {
                debug!("login rejected: {err}");
                *self.state.write().await = AuthState::Error(err.display_message());
                Err(err)
            }
        }
    }

    /// Logs out.
    ///
    /// Always succeeds locally, whether or not the gateway is reachable.
    /// Callers owning dependent caches must invalidate them afterwards.
    pub async fn logout(&self) {
        self.credential.clear().await;
        if let Err(err) = self.store.clear().await {
            warn!("failed to clear persisted session: {err}");
        }
        *self.state.write().await = AuthState::Anonymous;
        info!("logged out");
    }

    /// The current identity, or `None` while not authenticated.
    pub async fn current_identity(&self) -> Option<Identity> {
        self.state.read().await.identity().cloned()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated()
    }

    /// Snapshot of the state machine.
    pub async fn state(&self) -> AuthState {
        self.state.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::model::LOGIN_FALLBACK_MESSAGE;
    use crate::session::MemorySessionStore;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Accepts exactly admin/admin123 and verifies exactly the token it
    /// issued, like the real backend seed.
    struct FakeAuthGateway {
        credential: CredentialSlot,
        login_calls: AtomicUsize,
        reachable: bool,
    }

    impl FakeAuthGateway {
        fn new(credential: CredentialSlot) -> Self {
            Self {
                credential,
                login_calls: AtomicUsize::new(0),
                reachable: true,
            }
        }

        fn unreachable(credential: CredentialSlot) -> Self {
            Self {
                reachable: false,
                ..Self::new(credential)
            }
        }
    }

    #[async_trait::async_trait]
    impl AuthGateway for FakeAuthGateway {
        async fn login(&self, username: &str, password: &str) -> Result<Session> {
            self.login_calls.fetch_add(1, Ordering::SeqCst);
            if !self.reachable {
                return Err(FolioError::network("connection refused"));
            }
            if username == "admin" && password == "admin123" {
                Ok(Session {
                    token: "tok-valid".to_string(),
                    identity: Identity {
                        username: "admin".to_string(),
                        role: Some("admin".to_string()),
                    },
                })
            } else {
                Err(FolioError::auth(LOGIN_FALLBACK_MESSAGE))
            }
        }

        async fn verify(&self) -> Result<Identity> {
            if !self.reachable {
                return Err(FolioError::network("connection refused"));
            }
            match self.credential.get().await.as_deref() {
                Some("tok-valid") => Ok(Identity::new("admin")),
                _ => Err(FolioError::auth("Invalid token")),
            }
        }
    }

    fn controller_with(
        gateway: FakeAuthGateway,
        store: MemorySessionStore,
        credential: CredentialSlot,
    ) -> AuthController {
        AuthController::new(Arc::new(gateway), Arc::new(store), credential)
    }

    #[tokio::test]
    async fn valid_login_authenticates_and_persists_session() {
        let credential = CredentialSlot::new();
        let store = Arc::new(MemorySessionStore::new());
        let gateway = Arc::new(FakeAuthGateway::new(credential.clone()));
        let controller = AuthController::new(gateway, store.clone(), credential.clone());

        let identity = controller.login("admin", "admin123").await.unwrap();

        assert_eq!(identity.username, "admin");
        assert!(controller.is_authenticated().await);
        assert_eq!(credential.get().await.as_deref(), Some("tok-valid"));
        let stored = store.load().await.unwrap();
        assert_eq!(stored.token, "tok-valid");
        assert_eq!(stored.identity.username, "admin");
    }

    #[tokio::test]
    async fn invalid_login_surfaces_message_and_stays_anonymous() {
        let credential = CredentialSlot::new();
        let controller = controller_with(
            FakeAuthGateway::new(credential.clone()),
            MemorySessionStore::new(),
            credential.clone(),
        );

        let err = controller.login("admin", "wrong").await.unwrap_err();

        assert_eq!(err.display_message(), LOGIN_FALLBACK_MESSAGE);
        let state = controller.state().await;
        assert!(state.is_anonymous());
        assert!(!state.error_message().unwrap().is_empty());
        assert_eq!(credential.get().await, None);
    }

    #[tokio::test]
    async fn empty_credentials_never_reach_the_gateway() {
        let credential = CredentialSlot::new();
        let gateway = Arc::new(FakeAuthGateway::new(credential.clone()));
        let controller = AuthController::new(
            gateway.clone(),
            Arc::new(MemorySessionStore::new()),
            credential,
        );

        assert!(controller.login("", "admin123").await.is_err());
        assert!(controller.login("admin", "").await.is_err());
        assert_eq!(gateway.login_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unreachable_gateway_fails_login_but_allows_retry() {
        let credential = CredentialSlot::new();
        let controller = controller_with(
            FakeAuthGateway::unreachable(credential.clone()),
            MemorySessionStore::new(),
            credential,
        );

        let err = controller.login("admin", "admin123").await.unwrap_err();
        assert!(err.is_network());
        assert!(controller.state().await.is_anonymous());
    }

    #[tokio::test]
    async fn logout_clears_everything_even_without_gateway() {
        let credential = CredentialSlot::new();
        let store = Arc::new(MemorySessionStore::new());
        let gateway = Arc::new(FakeAuthGateway::new(credential.clone()));
        let controller = AuthController::new(gateway, store.clone(), credential.clone());
        controller.login("admin", "admin123").await.unwrap();

        controller.logout().await;

        assert_eq!(controller.state().await, AuthState::Anonymous);
        assert_eq!(controller.current_identity().await, None);
        assert_eq!(credential.get().await, None);
        assert_eq!(store.load().await, None);
    }

    #[tokio::test]
    async fn restore_with_verifying_token_authenticates_silently() {
        let credential = CredentialSlot::new();
        let store = Arc::new(MemorySessionStore::with_session(Session {
            token: "tok-valid".to_string(),
            identity: Identity::new("admin"),
        }));
        let gateway = Arc::new(FakeAuthGateway::new(credential.clone()));
        let controller = AuthController::new(gateway, store, credential);

        assert!(controller.restore().await);
        assert!(controller.is_authenticated().await);
        assert_eq!(
            controller.current_identity().await.unwrap().username,
            "admin"
        );
    }

    #[tokio::test]
    async fn restore_with_rejected_token_clears_the_store() {
        let credential = CredentialSlot::new();
        let store = Arc::new(MemorySessionStore::with_session(Session {
            token: "tok-expired".to_string(),
            identity: Identity::new("admin"),
        }));
        let gateway = Arc::new(FakeAuthGateway::new(credential.clone()));
        let controller = AuthController::new(gateway, store.clone(), credential.clone());

        assert!(!controller.restore().await);
        assert_eq!(controller.state().await, AuthState::Anonymous);
        assert_eq!(store.load().await, None);
        assert_eq!(credential.get().await, None);
    }

    #[tokio::test]
    async fn restore_without_stored_session_is_a_no_op() {
        let credential = CredentialSlot::new();
        let controller = controller_with(
            FakeAuthGateway::new(credential.clone()),
            MemorySessionStore::new(),
            credential,
        );

        assert!(!controller.restore().await);
        assert_eq!(controller.state().await, AuthState::Anonymous);
    }
}
