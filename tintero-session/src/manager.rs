use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;

use tintero_core::{ApiError, AuthGateway, User};

use crate::shared::SharedSession;
use crate::state::{PersistedSession, SessionState, STORAGE_VERSION};
use crate::store::SessionStore;

/// Errors surfaced by session lifecycle operations.
///
/// Each variant names the phase that failed, so a caller can tell a
/// rejected registration apart from an account that was created but
/// could not be signed in.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The registration call itself was rejected.
    #[error("registration failed: {0}")]
    Registration(#[source] ApiError),
    /// The account was created, but the chained sign-in failed. The
    /// session remains anonymous; the account exists server-side.
    #[error("account created but sign-in failed: {0}")]
    PostRegisterLogin(#[source] ApiError),
    /// Sign-in was rejected.
    #[error("sign-in failed: {0}")]
    Login(#[source] ApiError),
    /// The token refresh was rejected.
    #[error("token refresh failed: {0}")]
    Refresh(#[source] ApiError),
    /// The operation needs an authenticated session.
    #[error("no refresh token in the current session")]
    NotAuthenticated,
}

/// Single source of truth for "who is logged in".
///
/// All mutations go through the four lifecycle operations plus
/// [`SessionManager::set_user`]; every mutation is published to
/// subscribers and persisted through the configured [`SessionStore`].
///
/// Overlapping calls are not fenced: if two sign-ins race, whichever
/// response resolves last wins. Callers needing stronger guarantees
/// must serialize their calls.
pub struct SessionManager {
    gateway: Arc<dyn AuthGateway>,
    store: Arc<dyn SessionStore>,
    shared: SharedSession,
    notify: watch::Sender<SessionState>,
}

impl SessionManager {
    /// Build a manager with a fresh anonymous state.
    pub fn new(gateway: Arc<dyn AuthGateway>, store: Arc<dyn SessionStore>) -> Self {
        Self::with_shared(gateway, store, SharedSession::new())
    }

    /// Build a manager around an existing [`SharedSession`] handle.
    ///
    /// Use this when the API client needs the handle as its token
    /// provider before the manager exists.
    pub fn with_shared(
        gateway: Arc<dyn AuthGateway>,
        store: Arc<dyn SessionStore>,
        shared: SharedSession,
    ) -> Self {
        let (notify, _) = watch::channel(shared.snapshot().as_ref().clone());
        Self {
            gateway,
            store,
            shared,
            notify,
        }
    }

    /// Load the persisted session, if any, into memory.
    ///
    /// An envelope with an unknown schema version is discarded (and the
    /// store cleared); a state that violates the authenticated
    /// invariant is ignored. Load failures leave the session anonymous.
    pub async fn restore(&self) {
        match self.store.load().await {
            Ok(Some(persisted)) if persisted.version != STORAGE_VERSION => {
                log::warn!(
                    "discarding persisted session with unknown version {}",
                    persisted.version
                );
                if let Err(e) = self.store.clear().await {
                    log::warn!("failed to clear stale session: {e}");
                }
            }
            Ok(Some(persisted)) if !persisted.state.is_consistent() => {
                log::warn!("persisted session is inconsistent, starting anonymous");
            }
            Ok(Some(persisted)) => self.publish(persisted.state),
            Ok(None) => {}
            Err(e) => log::warn!("failed to load persisted session: {e}"),
        }
    }

    /// The current session state.
    pub fn state(&self) -> Arc<SessionState> {
        self.shared.snapshot()
    }

    /// A cloneable handle to the current state, usable as a
    /// [`tintero_core::TokenProvider`] for the API client.
    pub fn shared(&self) -> SharedSession {
        self.shared.clone()
    }

    /// Watch the session for changes. The receiver always holds the
    /// latest state.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.notify.subscribe()
    }

    /// Sign in with credentials. On success the session becomes
    /// authenticated and is persisted; on failure it is left untouched
    /// and the error propagates for the UI to render.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), SessionError> {
        let granted = self
            .gateway
            .login(email, password)
            .await
            .map_err(SessionError::Login)?;
        self.commit(SessionState::authenticated(
            granted.user,
            granted.access_token,
            granted.refresh_token,
        ))
        .await;
        Ok(())
    }

    /// Create an account and immediately sign in with the same
    /// credentials. Registration alone never authenticates the session:
    /// if the chained sign-in fails the session stays anonymous even
    /// though the account now exists server-side.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), SessionError> {
        self.gateway
            .register(name, email, password)
            .await
            .map_err(SessionError::Registration)?;
        log::debug!("registration succeeded, signing in");
        let granted = self
            .gateway
            .login(email, password)
            .await
            .map_err(SessionError::PostRegisterLogin)?;
        self.commit(SessionState::authenticated(
            granted.user,
            granted.access_token,
            granted.refresh_token,
        ))
        .await;
        Ok(())
    }

    /// Sign out. The backend is notified best-effort with the current
    /// refresh token; regardless of the outcome the local session is
    /// reset to anonymous. This operation always succeeds locally.
    pub async fn logout(&self) {
        if let Some(refresh_token) = self.state().refresh_token.clone() {
            if let Err(e) = self.gateway.logout(&refresh_token).await {
                log::error!("backend logout failed, clearing local session anyway: {e}");
            }
        }
        self.commit(SessionState::anonymous()).await;
        log::info!("signed out");
    }

    /// Replace only the account record, for profile-refresh scenarios.
    /// Tokens and the authenticated flag are untouched.
    pub async fn set_user(&self, user: User) {
        let next = self.state().as_ref().clone().with_user(user);
        self.commit(next).await;
    }

    /// Exchange the stored refresh token for a new access token,
    /// updating the session in place. Fails without touching state when
    /// the session holds no refresh token or the backend rejects it.
    pub async fn refresh(&self) -> Result<(), SessionError> {
        let current = self.state();
        let refresh_token = current
            .refresh_token
            .clone()
            .ok_or(SessionError::NotAuthenticated)?;
        let minted = self
            .gateway
            .refresh(&refresh_token)
            .await
            .map_err(SessionError::Refresh)?;
        self.commit(current.as_ref().clone().with_access_token(minted.access_token))
            .await;
        Ok(())
    }

    fn publish(&self, state: SessionState) {
        self.shared.replace(state.clone());
        self.notify.send_replace(state);
    }

    /// Publish a new state and persist it. A storage failure is logged
    /// and does not roll back the in-memory state.
    async fn commit(&self, state: SessionState) {
        self.publish(state.clone());
        if let Err(e) = self.store.save(&PersistedSession::current(state)).await {
            log::error!("failed to persist session: {e}");
        }
    }
}
