use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::User;

/// Payload of a successful `/api/auth/register` call.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// Identifier of the freshly created account.
    pub user_id: String,
    /// Registered email address.
    pub email: String,
    /// Registered display name.
    pub name: String,
}

/// Payload of a successful `/api/auth/login` call.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Short-lived bearer credential for authenticated calls.
    pub access_token: String,
    /// Longer-lived credential used to mint new access tokens.
    pub refresh_token: String,
    /// Token scheme, `"bearer"` in practice.
    pub token_type: String,
    /// Access-token lifetime in seconds.
    pub expires_in: u64,
    /// The account that signed in.
    pub user: User,
}

/// Payload of a successful `/api/auth/refresh` call.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// Replacement access token.
    pub access_token: String,
    /// Lifetime of the replacement token in seconds.
    pub expires_in: u64,
}

/// The authentication operations the session layer needs from the backend.
///
/// `tintero-client` implements this over HTTP; tests implement it with
/// stubs. The session layer never talks to the network directly.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Create a new account. Registration alone does not authenticate.
    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> ApiResult<RegisterResponse>;

    /// Exchange credentials for tokens and the account record.
    async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse>;

    /// Invalidate the given refresh token server-side.
    async fn logout(&self, refresh_token: &str) -> ApiResult<()>;

    /// Mint a new access token from a refresh token.
    async fn refresh(&self, refresh_token: &str) -> ApiResult<RefreshResponse>;
}

/// Source of the current bearer token for outgoing requests.
///
/// The session layer owns the token; the API client only reads it
/// through this trait. There is exactly one source of truth.
pub trait TokenProvider: Send + Sync {
    /// The access token to attach to the next request, if any.
    fn access_token(&self) -> Option<String>;
}
