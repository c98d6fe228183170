//! The shared bearer-credential slot.
//!
//! Every resource client reads this slot when attaching the
//! `Authorization` header; only the auth controller writes it. That single
//! logical writer is what makes the credential safe to share without any
//! further coordination.

use std::sync::Arc;

use tokio::sync::RwLock;

/// Process-wide holder for the current bearer token.
#[derive(Clone, Default)]
pub struct CredentialSlot {
    token: Arc<RwLock<Option<String>>>,
}

impl CredentialSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current token, if a session is active.
    pub async fn get(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    pub async fn set(&self, token: String) {
        *self.token.write().await = Some(token);
    }

    pub async fn clear(&self) {
        *self.token.write().await = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn clones_share_the_same_token() {
        let slot = CredentialSlot::new();
        let reader = slot.clone();

        slot.set("tok-123".to_string()).await;
        assert_eq!(reader.get().await.as_deref(), Some("tok-123"));

        slot.clear().await;
        assert_eq!(reader.get().await, None);
    }
}
