//! Repository error types
//!
//! Every storage gateway failure carries the operation that failed, a
//! coarse category, and the raw driver message.
//!
//! # Example
//!
//! ```rust
//! use users_service::repository::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
//!
//! let error = RepositoryError::not_found(RepositoryOperation::GetUser, 42);
//! assert!(matches!(error.kind, RepositoryErrorKind::NotFound));
//! assert_eq!(error.entity_id.as_deref(), Some("42"));
//! ```

use std::fmt;

/// Operation being performed when the repository error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryOperation {
    /// Opening the connection pool
    Connect,
    /// Ensuring the users table exists
    Bootstrap,
    /// Checking storage connectivity
    Ping,
    /// Listing all users
    ListUsers,
    /// Fetching a single user by id
    GetUser,
    /// Inserting a new user
    CreateUser,
    /// Overwriting an existing user
    UpdateUser,
    /// Deleting a user by id
    DeleteUser,
}

impl fmt::Display for RepositoryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connect => write!(f, "connect"),
            Self::Bootstrap => write!(f, "bootstrap"),
            Self::Ping => write!(f, "ping"),
            Self::ListUsers => write!(f, "list_users"),
            Self::GetUser => write!(f, "get_user"),
            Self::CreateUser => write!(f, "create_user"),
            Self::UpdateUser => write!(f, "update_user"),
            Self::DeleteUser => write!(f, "delete_user"),
        }
    }
}

/// Category of repository error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryErrorKind {
    /// No row matched the requested id
    NotFound,
    /// Database constraint violation
    ConstraintViolation,
    /// Failed to connect to, or acquire a connection from, the database
    ConnectionFailed,
    /// Query failed inside the database
    DatabaseError,
    /// Row could not be decoded into a user
    Decode,
    /// Other unclassified error
    Other,
}

impl fmt::Display for RepositoryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not_found"),
            Self::ConstraintViolation => write!(f, "constraint_violation"),
            Self::ConnectionFailed => write!(f, "connection_failed"),
            Self::DatabaseError => write!(f, "database_error"),
            Self::Decode => write!(f, "decode"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Structured repository error with operation context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryError {
    /// The operation being performed when the error occurred
    pub operation: RepositoryOperation,
    /// The category of error
    pub kind: RepositoryErrorKind,
    /// Raw error message
    pub message: String,
    /// The user id involved, when there is one
    pub entity_id: Option<String>,
}

impl RepositoryError {
    /// Create a new repository error
    pub fn new(
        operation: RepositoryOperation,
        kind: RepositoryErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
            entity_id: None,
        }
    }

    /// Create a "not found" error for the given id
    pub fn not_found(operation: RepositoryOperation, id: impl fmt::Display) -> Self {
        let id = id.to_string();
        Self {
            operation,
            kind: RepositoryErrorKind::NotFound,
            message: format!("user {} not found", id),
            entity_id: Some(id),
        }
    }

    /// Classify a driver error
    pub fn from_sqlx(operation: RepositoryOperation, err: sqlx::Error) -> Self {
        use sqlx::Error as E;

        let kind = match &err {
            E::RowNotFound => RepositoryErrorKind::NotFound,
            E::PoolTimedOut | E::PoolClosed | E::Io(_) | E::Tls(_) | E::WorkerCrashed => {
                RepositoryErrorKind::ConnectionFailed
            }
            E::Database(db_err)
                if db_err.is_unique_violation()
                    || db_err.is_foreign_key_violation()
                    || db_err.is_check_violation() =>
            {
                RepositoryErrorKind::ConstraintViolation
            }
            E::Database(_) => RepositoryErrorKind::DatabaseError,
            E::ColumnDecode { .. } | E::Decode(_) | E::TypeNotFound { .. } => {
                RepositoryErrorKind::Decode
            }
            _ => RepositoryErrorKind::Other,
        };

        Self::new(operation, kind, err.to_string())
    }

    /// Attach the user id involved in the failing operation
    pub fn with_entity_id(mut self, id: impl fmt::Display) -> Self {
        self.entity_id = Some(id.to_string());
        self
    }

    /// Whether no row matched the requested id
    pub fn is_not_found(&self) -> bool {
        self.kind == RepositoryErrorKind::NotFound
    }
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Repository {} error during {}: {}",
            self.kind, self.operation, self.message
        )
    }
}

impl std::error::Error for RepositoryError {}
