//! # Tintero Core
//!
//! `tintero-core` provides the foundational types for the Tintero platform
//! client: the wire-level response envelope, the error taxonomy shared by
//! every crate in the workspace, and the traits that connect the API client
//! to the session layer without coupling them.

#![warn(missing_docs)]

use serde::{Deserialize, Serialize};

/// Errors produced by the API client and helpers for rendering them.
pub mod error;

/// Wire-level response envelope types.
pub mod envelope;

/// Traits connecting the session layer to the API client.
pub mod gateway;

/// Mapping from API errors to end-user messages.
pub mod messages;

pub use crate::error::{ApiError, ApiResult};
pub use crate::envelope::{ApiResponse, ErrorBody, PagedResponse, Pagination};
pub use crate::gateway::{AuthGateway, LoginResponse, RefreshResponse, RegisterResponse, TokenProvider};
pub use crate::messages::user_message;

/// The authenticated account as the backend reports it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend-assigned identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: String,
}
