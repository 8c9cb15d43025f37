use serde::{Deserialize, Serialize};
use tintero_core::User;

/// Fixed name under which the session is persisted.
pub const STORAGE_KEY: &str = "auth-storage";

/// Schema version written into the persisted envelope.
pub const STORAGE_VERSION: u32 = 0;

/// The authentication state of this client.
///
/// Invariant: `is_authenticated` is true iff `token` and `user` are both
/// present. All transitions preserve this; [`SessionState::is_consistent`]
/// checks it for state loaded from storage.
///
/// Serde field names match the persisted wire casing (`refreshToken`,
/// `isAuthenticated`) so existing stored sessions keep loading.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// The signed-in account, absent when anonymous.
    pub user: Option<User>,
    /// Current access token.
    pub token: Option<String>,
    /// Current refresh token.
    #[serde(rename = "refreshToken")]
    pub refresh_token: Option<String>,
    /// Whether this session is authenticated.
    #[serde(rename = "isAuthenticated")]
    pub is_authenticated: bool,
}

impl SessionState {
    /// The empty, signed-out state.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// State after a successful sign-in.
    pub fn authenticated(user: User, access_token: String, refresh_token: String) -> Self {
        Self {
            user: Some(user),
            token: Some(access_token),
            refresh_token: Some(refresh_token),
            is_authenticated: true,
        }
    }

    /// Replace only the account record, leaving credentials untouched.
    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    /// Replace only the access token, leaving everything else untouched.
    pub fn with_access_token(mut self, access_token: String) -> Self {
        self.token = Some(access_token);
        self
    }

    /// Whether the authenticated flag agrees with the presence of
    /// credentials.
    pub fn is_consistent(&self) -> bool {
        self.is_authenticated == (self.token.is_some() && self.user.is_some())
    }
}

/// The envelope actually written to storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedSession {
    /// The session state itself.
    pub state: SessionState,
    /// Schema version of `state`.
    pub version: u32,
}

impl PersistedSession {
    /// Wrap a state in the current schema version.
    pub fn current(state: SessionState) -> Self {
        Self {
            state,
            version: STORAGE_VERSION,
        }
    }
}
