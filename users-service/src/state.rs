//! Application state management

use std::sync::Arc;

use crate::{config::Config, repository::UserRepository};

/// Application state shared across handlers
///
/// Generic over the storage gateway so handlers never reach for a global
/// pool; production uses [`PgUserRepository`](crate::repository::PgUserRepository).
#[derive(Clone)]
pub struct AppState<R: UserRepository> {
    users: R,
    service_name: Arc<str>,
}

impl<R: UserRepository> AppState<R> {
    /// Create state from the loaded configuration and a repository
    pub fn new(config: &Config, users: R) -> Self {
        Self {
            users,
            service_name: Arc::from(config.service.name.as_str()),
        }
    }

    /// Get the user repository
    pub fn users(&self) -> &R {
        &self.users
    }

    /// Get the service name reported by the health probes
    pub fn service_name(&self) -> &str {
        &self.service_name
    }
}
