//! # users-service
//!
//! A small HTTP service exposing CRUD operations on user records stored in
//! PostgreSQL. Requests and responses are JSON; every route maps onto a
//! single parameterized SQL statement.
//!
//! ## Routes
//!
//! | Method | Path | Response |
//! |---|---|---|
//! | GET | `/api/users` | JSON array of users |
//! | GET | `/api/users/{id}` | JSON user |
//! | POST | `/api/users` | created JSON user |
//! | PUT | `/api/users/{id}` | empty |
//! | DELETE | `/api/users/{id}` | empty |
//! | GET | `/health`, `/ready` | liveness and readiness probes |
//!
//! Any failure is reported as `500 Internal Server Error` with the raw error
//! message as a plain-text body.
//!
//! ## Example
//!
//! ```rust,no_run
//! use users_service::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config)?;
//!
//!     let pool = create_pool(&config.database).await?;
//!     let users = PgUserRepository::new(pool);
//!     users.bootstrap().await?;
//!
//!     let app = build_router(AppState::new(&config, users));
//!     Server::new(config).serve(app).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod repository;
pub mod router;
pub mod server;
pub mod state;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{Config, DatabaseConfig, ServiceConfig};
    pub use crate::database::create_pool;
    pub use crate::error::{Error, Result};
    pub use crate::models::{User, UserId, UserPayload};
    pub use crate::observability::init_tracing;
    pub use crate::repository::{
        PgUserRepository, RepositoryError, RepositoryErrorKind, RepositoryOperation,
        RepositoryResult, UserRepository,
    };
    pub use crate::router::build_router;
    pub use crate::server::Server;
    pub use crate::state::AppState;
}
