use std::sync::Arc;

use arc_swap::ArcSwap;
use tintero_core::TokenProvider;

use crate::state::SessionState;

/// Cheap, cloneable handle to the current session state.
///
/// This is the single source of truth for the access token: the API
/// client reads it through [`TokenProvider`], and only the session
/// manager writes it. Reads never block writers.
#[derive(Clone)]
pub struct SharedSession {
    inner: Arc<ArcSwap<SessionState>>,
}

impl SharedSession {
    /// A fresh handle holding the anonymous state.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(SessionState::anonymous())),
        }
    }

    /// The current state.
    pub fn snapshot(&self) -> Arc<SessionState> {
        self.inner.load_full()
    }

    pub(crate) fn replace(&self, state: SessionState) {
        self.inner.store(Arc::new(state));
    }
}

impl Default for SharedSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenProvider for SharedSession {
    fn access_token(&self) -> Option<String> {
        self.inner.load().token.clone()
    }
}
