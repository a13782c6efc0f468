//! Authenticated-session state shared between dispatched calls.
//!
//! # Design
//! The bearer token lives in an explicit, cloneable `Session` handle instead
//! of process-global state, so multiple clients with different credentials
//! can coexist and tests never leak tokens into each other. Concurrent
//! dispatches only ever read the token; the authentication flow is the sole
//! writer (`authenticate` after login, `sign_out` on logout or when the
//! caller decides a 401 means the credential is dead).

use std::sync::Arc;

use tokio::sync::RwLock;

/// Shared handle to the current bearer credential. Cheap to clone; all clones
/// observe the same token.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
}

impl Session {
    /// New session with no credential.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session pre-seeded with a token, for callers restoring a persisted
    /// credential.
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(token.to_string()))),
        }
    }

    /// Install the bearer token after a successful login.
    pub async fn authenticate(&self, token: &str) {
        *self.token.write().await = Some(token.to_string());
    }

    /// Drop the credential. Subsequent dispatches go out unauthenticated.
    pub async fn sign_out(&self) {
        *self.token.write().await = None;
    }

    /// Current bearer token, if any.
    pub async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.token.read().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_empty() {
        let session = Session::new();
        assert!(!session.is_authenticated().await);
        assert!(session.token().await.is_none());
    }

    #[tokio::test]
    async fn authenticate_then_sign_out() {
        let session = Session::new();
        session.authenticate("tok_123").await;
        assert_eq!(session.token().await.as_deref(), Some("tok_123"));

        session.sign_out().await;
        assert!(!session.is_authenticated().await);
    }

    #[tokio::test]
    async fn clones_share_the_token() {
        let session = Session::new();
        let clone = session.clone();
        session.authenticate("tok_shared").await;
        assert_eq!(clone.token().await.as_deref(), Some("tok_shared"));
    }
}
