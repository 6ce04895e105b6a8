//! Application state management.
//!
//! The state is built once at startup and owns the user directory, so the
//! directory lives exactly as long as the server.

use domain_users::{InMemoryUserRepository, UserService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// The user directory; clones share the same underlying map
    pub users: UserService<InMemoryUserRepository>,
}

impl AppState {
    /// Creates the state with an empty directory.
    pub fn new(config: crate::config::Config) -> Self {
        Self {
            config,
            users: UserService::new(InMemoryUserRepository::new()),
        }
    }
}
