//! In-memory user repositories used by the handler and router tests

use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::traits::{RepositoryResult, UserRepository};
use super::error::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
use crate::models::{User, UserId, UserPayload};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<UserId, User>,
    last_id: UserId,
}

/// Mirrors the `users` table semantics: ids start at 1 and are never reused
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    table: Arc<Mutex<Table>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored row, ordered by id
    pub async fn rows(&self) -> Vec<User> {
        self.table.lock().await.rows.values().cloned().collect()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn list_users(&self) -> RepositoryResult<Vec<User>> {
        Ok(self.rows().await)
    }

    async fn get_user(&self, id: UserId) -> RepositoryResult<User> {
        self.table
            .lock()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(RepositoryOperation::GetUser, id))
    }

    async fn create_user(&self, data: UserPayload) -> RepositoryResult<User> {
        let mut table = self.table.lock().await;
        table.last_id += 1;
        let user = User::from_payload(table.last_id, data);
        table.rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: UserId, data: UserPayload) -> RepositoryResult<()> {
        if let Some(row) = self.table.lock().await.rows.get_mut(&id) {
            row.name = data.name;
            row.email = data.email;
        }
        Ok(())
    }

    async fn delete_user(&self, id: UserId) -> RepositoryResult<()> {
        self.table.lock().await.rows.remove(&id);
        Ok(())
    }

    async fn ping(&self) -> RepositoryResult<()> {
        Ok(())
    }
}

/// Fails every call with a database error carrying `message`
#[derive(Debug, Clone)]
pub struct FailingUserRepository {
    message: Arc<str>,
}

impl FailingUserRepository {
    pub fn new(message: &str) -> Self {
        Self {
            message: Arc::from(message),
        }
    }

    fn fail<T>(&self, operation: RepositoryOperation) -> RepositoryResult<T> {
        Err(RepositoryError::new(
            operation,
            RepositoryErrorKind::DatabaseError,
            self.message.as_ref(),
        ))
    }
}

impl UserRepository for FailingUserRepository {
    async fn list_users(&self) -> RepositoryResult<Vec<User>> {
        self.fail(RepositoryOperation::ListUsers)
    }

    async fn get_user(&self, _id: UserId) -> RepositoryResult<User> {
        self.fail(RepositoryOperation::GetUser)
    }

    async fn create_user(&self, _data: UserPayload) -> RepositoryResult<User> {
        self.fail(RepositoryOperation::CreateUser)
    }

    async fn update_user(&self, _id: UserId, _data: UserPayload) -> RepositoryResult<()> {
        self.fail(RepositoryOperation::UpdateUser)
    }

    async fn delete_user(&self, _id: UserId) -> RepositoryResult<()> {
        self.fail(RepositoryOperation::DeleteUser)
    }

    async fn ping(&self) -> RepositoryResult<()> {
        self.fail(RepositoryOperation::Ping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ids_are_assigned_and_not_reused() {
        let repo = InMemoryUserRepository::new();
        let first = repo.create_user(UserPayload::new("a", "a@x")).await.unwrap();
        repo.delete_user(first.id).await.unwrap();
        let second = repo.create_user(UserPayload::new("b", "b@x")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let repo = InMemoryUserRepository::new();
        let err = repo.get_user(9).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
