//! Database connection pool management

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    config::DatabaseConfig,
    error::Result,
    repository::{RepositoryError, RepositoryErrorKind, RepositoryOperation},
};

/// Create a PostgreSQL connection pool
///
/// Connects once; a failure is returned to the caller rather than retried.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let url_safe = sanitize_connection_url(&config.url);

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to connect to database at '{}' ({}): {}",
                url_safe,
                categorize_db_error(&e),
                e
            );
            RepositoryError::new(
                RepositoryOperation::Connect,
                RepositoryErrorKind::ConnectionFailed,
                e.to_string(),
            )
        })?;

    tracing::info!(
        "Database connected at '{}' (max connections: {})",
        url_safe,
        config.max_connections
    );

    Ok(pool)
}

/// Sanitize connection URL for safe logging (mask password)
fn sanitize_connection_url(url: &str) -> String {
    if let (Some(scheme_end), Some(at_pos)) = (url.find("://"), url.rfind('@')) {
        let credentials_start = scheme_end + 3;
        if at_pos > credentials_start {
            let credentials = &url[credentials_start..at_pos];
            let user = credentials.split(':').next().unwrap_or_default();
            return format!("{}{}:***{}", &url[..credentials_start], user, &url[at_pos..]);
        }
    }
    url.to_string()
}

/// Categorize database error for better operator guidance
fn categorize_db_error(err: &sqlx::Error) -> &'static str {
    use sqlx::Error;
    match err {
        Error::Configuration(_) => "configuration error - check the connection URL",
        Error::Database(_) => "database rejected the connection",
        Error::Io(_) => "network I/O error - check connectivity",
        Error::Tls(_) => "TLS/SSL error - check certificate configuration",
        Error::PoolTimedOut => "connection pool timeout - database may be overloaded",
        _ => "connection error",
    }
}
