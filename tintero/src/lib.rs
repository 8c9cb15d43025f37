//! # Tintero
//!
//! Client SDK for the Tintero content platform: a typed HTTP client for
//! the platform's REST backend and a persisted, reactive authentication
//! session.
//!
//! The workspace is modular; this crate re-exports the pieces behind
//! feature flags:
//!
//! - `client` — [`client`] (the reqwest-based [`client::ApiClient`])
//! - `session` — [`session`] (the persisted [`session::SessionManager`])
//! - `full` — everything above
//!
//! The core types (response envelope, error taxonomy, user-message
//! mapping) are always available at the crate root.
//!
//! Typical wiring: create a [`session::SharedSession`], hand it to the
//! client as its token provider, then build the [`session::SessionManager`]
//! around the same handle and a [`session::FileStore`]. From then on every
//! sign-in is persisted and every authenticated request carries the
//! current bearer token automatically.

#![warn(missing_docs)]

pub use tintero_core::{
    envelope, error, gateway, messages, user_message, ApiError, ApiResponse, ApiResult,
    AuthGateway, ErrorBody, LoginResponse, PagedResponse, Pagination, RefreshResponse,
    RegisterResponse, TokenProvider, User,
};

/// The HTTP API client.
#[cfg(feature = "client")]
pub mod client {
    pub use tintero_client::*;
}

/// The persisted authentication session.
#[cfg(feature = "session")]
pub mod session {
    pub use tintero_session::*;
}
