//! # Tintero Session
//!
//! Client-side authentication state for the Tintero platform: who is
//! logged in, their tokens, and the durable persistence of all of it.
//!
//! The crate is split along the seams the rest of the workspace relies
//! on: [`SessionState`] is plain data with pure transitions, the
//! [`SessionStore`] trait hides where the session is persisted, and
//! [`SessionManager`] orchestrates the login/register/logout/refresh
//! lifecycle against an [`tintero_core::AuthGateway`], publishing every
//! change to subscribers.

pub mod manager;
pub mod state;
pub mod store;

mod shared;

pub use crate::manager::{SessionError, SessionManager};
pub use crate::shared::SharedSession;
pub use crate::state::{PersistedSession, SessionState, STORAGE_KEY, STORAGE_VERSION};
pub use crate::store::{FileStore, MemoryStore, SessionStore, StoreError};
