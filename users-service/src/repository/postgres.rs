//! PostgreSQL implementation of the storage gateway

use sqlx::PgPool;

use super::error::{RepositoryError, RepositoryOperation};
use super::traits::{RepositoryResult, UserRepository};
use crate::models::{User, UserId, UserPayload};

const CREATE_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS users (id SERIAL PRIMARY KEY, name TEXT, email TEXT)";
const SELECT_ALL: &str = "SELECT id, name, email FROM users";
const SELECT_ONE: &str = "SELECT id, name, email FROM users WHERE id = $1";
const INSERT: &str = "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id";
const UPDATE: &str = "UPDATE users SET name = $1, email = $2 WHERE id = $3";
const DELETE: &str = "DELETE FROM users WHERE id = $1";

/// User repository backed by a `sqlx` connection pool
///
/// `PgPool` is reference counted, so cloning the repository is cheap and
/// every clone shares the same pool.
#[derive(Debug, Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Ensure the `users` table exists
    ///
    /// Idempotent; must complete before the server starts accepting requests.
    pub async fn bootstrap(&self) -> RepositoryResult<()> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx(RepositoryOperation::Bootstrap, e))
            .inspect_err(|e| tracing::error!("Failed to ensure table users: {}", e.message))?;

        tracing::info!("Table users ensured");
        Ok(())
    }
}

impl UserRepository for PgUserRepository {
    async fn list_users(&self) -> RepositoryResult<Vec<User>> {
        sqlx::query_as::<_, User>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx(RepositoryOperation::ListUsers, e))
    }

    async fn get_user(&self, id: UserId) -> RepositoryResult<User> {
        sqlx::query_as::<_, User>(SELECT_ONE)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                RepositoryError::from_sqlx(RepositoryOperation::GetUser, e).with_entity_id(id)
            })?
            .ok_or_else(|| RepositoryError::not_found(RepositoryOperation::GetUser, id))
    }

    async fn create_user(&self, data: UserPayload) -> RepositoryResult<User> {
        let (id,): (UserId,) = sqlx::query_as(INSERT)
            .bind(&data.name)
            .bind(&data.email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx(RepositoryOperation::CreateUser, e))?;

        Ok(User::from_payload(id, data))
    }

    async fn update_user(&self, id: UserId, data: UserPayload) -> RepositoryResult<()> {
        let result = sqlx::query(UPDATE)
            .bind(&data.name)
            .bind(&data.email)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                RepositoryError::from_sqlx(RepositoryOperation::UpdateUser, e).with_entity_id(id)
            })?;

        tracing::debug!(id, rows = result.rows_affected(), "Updated user");
        Ok(())
    }

    async fn delete_user(&self, id: UserId) -> RepositoryResult<()> {
        let result = sqlx::query(DELETE)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                RepositoryError::from_sqlx(RepositoryOperation::DeleteUser, e).with_entity_id(id)
            })?;

        tracing::debug!(id, rows = result.rows_affected(), "Deleted user");
        Ok(())
    }

    async fn ping(&self) -> RepositoryResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx(RepositoryOperation::Ping, e))?;
        Ok(())
    }
}
