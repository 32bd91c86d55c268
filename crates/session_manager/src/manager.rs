//! Session Manager service

use crate::error::Result;
use crate::state::{SessionPhase, SessionState};
use crate::storage::KeyValueStore;
use std::sync::Arc;
use todo_client::AuthApi;
use tokio::sync::watch;
use tracing::warn;

/// Storage key for the persisted session identifier.
const SESSION_KEY: &str = "userId";

/// Session Manager - drives the authentication lifecycle.
///
/// Constructed once per application lifetime and passed by handle to any
/// component that needs session state or operations. The current state is
/// published through a watch channel; views call [`subscribe`] and render
/// the snapshots they receive.
///
/// [`subscribe`]: SessionManager::subscribe
pub struct SessionManager {
    auth: Arc<dyn AuthApi>,
    store: Arc<dyn KeyValueStore>,
    state_tx: watch::Sender<SessionState>,
}

impl SessionManager {
    /// Create a new SessionManager in the `Loading` phase.
    pub fn new(auth: Arc<dyn AuthApi>, store: Arc<dyn KeyValueStore>) -> Self {
        let (state_tx, _rx) = watch::channel(SessionState::new());
        Self {
            auth,
            store,
            state_tx,
        }
    }

    /// Get the current session state.
    pub fn state(&self) -> SessionState {
        self.state_tx.borrow().clone()
    }

    /// Subscribe to session state changes.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    fn set_phase(&self, phase: SessionPhase) {
        self.state_tx.send_replace(SessionState { phase });
    }

    /// Check for a persisted session identifier.
    ///
    /// Performs exactly one store read and always leaves the `Loading`
    /// phase, whether the read succeeds, fails, or finds nothing. A failed
    /// read is logged and treated as "not authenticated".
    pub async fn restore(&self) {
        let phase = match self.store.get(SESSION_KEY).await {
            Ok(Some(_)) => SessionPhase::Authenticated,
            Ok(None) => SessionPhase::Unauthenticated,
            Err(e) => {
                warn!("session restore failed: {}", e);
                SessionPhase::Unauthenticated
            }
        };
        self.set_phase(phase);
    }

    /// Authenticate with existing credentials.
    ///
    /// On success the returned session identifier is persisted and the
    /// session becomes `Authenticated`. On failure the state is left
    /// unchanged and the error is returned to the caller.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        let response = self.auth.login(username, password).await?;
        self.persist_identifier(&response.user_id).await;
        self.set_phase(SessionPhase::Authenticated);
        Ok(())
    }

    /// Create an account and authenticate. Same contract as [`login`].
    ///
    /// [`login`]: SessionManager::login
    pub async fn register(&self, username: &str, password: &str) -> Result<()> {
        let response = self.auth.register(username, password).await?;
        self.persist_identifier(&response.user_id).await;
        self.set_phase(SessionPhase::Authenticated);
        Ok(())
    }

    /// End the session.
    ///
    /// The remote logout is best-effort: a failure is logged but never
    /// blocks clearing the persisted identifier and moving to
    /// `Unauthenticated`, so the local UI always ends up consistent.
    pub async fn logout(&self) {
        if let Err(e) = self.auth.logout().await {
            warn!("remote logout failed: {}", e);
        }
        if let Err(e) = self.store.remove(SESSION_KEY).await {
            warn!("failed to remove session identifier: {}", e);
        }
        self.set_phase(SessionPhase::Unauthenticated);
    }

    /// Persist failures are logged, never surfaced: the in-memory session
    /// stays authoritative for this process.
    async fn persist_identifier(&self, user_id: &str) {
        if let Err(e) = self.store.set(SESSION_KEY, user_id).await {
            warn!("failed to persist session identifier: {}", e);
        }
    }
}
