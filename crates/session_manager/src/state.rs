//! Session state - observable snapshot of the authentication lifecycle

/// Phase of the session lifecycle.
///
/// `Loading` is entered once at construction and left exactly once when
/// [`restore`](crate::SessionManager::restore) completes. After that the
/// session moves between `Unauthenticated` and `Authenticated` only through
/// login/register/logout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    /// The initial restoration check has not completed yet.
    Loading,
    /// No session identifier is held.
    Unauthenticated,
    /// A session identifier is held.
    Authenticated,
}

/// Snapshot of the session state published to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub phase: SessionPhase,
}

impl SessionState {
    pub(crate) fn new() -> Self {
        Self {
            phase: SessionPhase::Loading,
        }
    }

    pub fn loading(&self) -> bool {
        self.phase == SessionPhase::Loading
    }

    pub fn authenticated(&self) -> bool {
        self.phase == SessionPhase::Authenticated
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
