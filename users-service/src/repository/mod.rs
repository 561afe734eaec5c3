//! Storage gateway for user records
//!
//! - [`UserRepository`]: the CRUD interface handlers are written against
//! - [`PgUserRepository`]: PostgreSQL implementation issuing parameterized SQL
//! - [`RepositoryError`]: structured failure with operation context
//!
//! # Example
//!
//! ```rust,no_run
//! use users_service::models::UserPayload;
//! use users_service::repository::{PgUserRepository, UserRepository};
//!
//! # async fn run(pool: sqlx::PgPool) -> Result<(), Box<dyn std::error::Error>> {
//! let users = PgUserRepository::new(pool);
//! users.bootstrap().await?;
//!
//! let alice = users
//!     .create_user(UserPayload::new("Alice", "alice@example.com"))
//!     .await?;
//! assert_eq!(users.get_user(alice.id).await?, alice);
//! # Ok(())
//! # }
//! ```

mod error;
mod postgres;
mod traits;

#[cfg(test)]
pub(crate) mod memory;

// Re-export all public types
pub use error::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
pub use postgres::PgUserRepository;
pub use traits::{RepositoryResult, UserRepository};
