//! users-service binary
//!
//! Reads configuration, connects to PostgreSQL, ensures the `users` table
//! exists, and serves the HTTP API until SIGINT/SIGTERM.

use users_service::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    init_tracing(&config)?;
    tracing::debug!(service = ?config.service, "Configuration loaded");

    // Fail before touching the network when no connection string is set
    config.database_url()?;

    let pool = create_pool(&config.database).await?;
    let users = PgUserRepository::new(pool);
    users.bootstrap().await?;

    let app = build_router(AppState::new(&config, users));
    Server::new(config).serve(app).await?;

    Ok(())
}
