//! Storage gateway trait
//!
//! Handlers depend on [`UserRepository`] rather than on a concrete pool, so
//! the storage backend is an explicit dependency carried in
//! [`AppState`](crate::state::AppState). Methods use RPITIT (Return Position
//! Impl Trait In Traits) instead of `async_trait`.

use std::future::Future;

use super::error::RepositoryError;
use crate::models::{User, UserId, UserPayload};

/// Result type for repository operations
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// CRUD operations on the `users` table
///
/// Each method is a single independent statement; there are no
/// transactions, existence checks, or retries.
pub trait UserRepository: Clone + Send + Sync + 'static {
    /// Return every user, in storage-default order
    fn list_users(&self) -> impl Future<Output = RepositoryResult<Vec<User>>> + Send;

    /// Fetch one user
    ///
    /// Fails with a `NotFound` error when no row matches `id`.
    fn get_user(&self, id: UserId) -> impl Future<Output = RepositoryResult<User>> + Send;

    /// Insert a user and return it with its storage-assigned id
    fn create_user(
        &self,
        data: UserPayload,
    ) -> impl Future<Output = RepositoryResult<User>> + Send;

    /// Overwrite name and email of the user matching `id`
    ///
    /// Succeeds without effect when no row matches.
    fn update_user(
        &self,
        id: UserId,
        data: UserPayload,
    ) -> impl Future<Output = RepositoryResult<()>> + Send;

    /// Delete the user matching `id`
    ///
    /// Succeeds without effect when no row matches.
    fn delete_user(&self, id: UserId) -> impl Future<Output = RepositoryResult<()>> + Send;

    /// Check that storage answers queries
    fn ping(&self) -> impl Future<Output = RepositoryResult<()>> + Send;
}
