use chrono::Utc;
use rusqlite::OptionalExtension;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{FromSqliteRow, User};

#[derive(Clone)]
pub struct UserRepository {
    pool: DbPool,
}

impl UserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        let pool = self.pool.clone();
        let id = id.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare("SELECT * FROM users WHERE id = ?")?;
            let result = stmt.query_row([&id], User::from_row).optional()?;
            Ok(result)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn find_all(&self) -> Result<Vec<User>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare("SELECT * FROM users ORDER BY created_at, id")?;
            let users = stmt
                .query_map([], User::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(users)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Persist a new user. The username is stored verbatim; duplicates are
    /// allowed.
    pub async fn create(&self, username: &str) -> Result<User> {
        let user = User {
            id: Uuid::new_v4().to_string(),
            username: username.to_string(),
            created_at: Utc::now(),
        };
        let row = user.clone();

        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<()> {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO users (id, username, created_at) VALUES (?, ?, ?)",
                rusqlite::params![row.id, row.username, row.created_at],
            )?;
            Ok(())
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;
    use crate::migrations::run_migrations_for_tests;

    fn setup_test_db() -> DbPool {
        let pool = create_memory_pool().expect("Failed to create test database");
        run_migrations_for_tests(&pool).expect("Failed to run migrations");
        pool
    }

    #[tokio::test]
    async fn test_create_user() {
        let pool = setup_test_db();
        let repo = UserRepository::new(pool);

        let user = repo.create("alice").await.unwrap();

        assert_eq!(user.username, "alice");
        assert!(!user.id.is_empty());
    }

    #[tokio::test]
    async fn test_find_by_id_exists() {
        let pool = setup_test_db();
        let repo = UserRepository::new(pool);

        let created = repo.create("alice").await.unwrap();
        let found = repo.find_by_id(&created.id).await.unwrap();

        assert!(found.is_some());
        assert_eq!(found.unwrap().username, "alice");
    }

    #[tokio::test]
    async fn test_find_by_id_not_exists() {
        let pool = setup_test_db();
        let repo = UserRepository::new(pool);

        let found = repo.find_by_id("nonexistent").await.unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_find_all_in_insertion_order() {
        let pool = setup_test_db();
        let repo = UserRepository::new(pool);

        repo.create("alice").await.unwrap();
        repo.create("bob").await.unwrap();

        let users = repo.find_all().await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username, "alice");
        assert_eq!(users[1].username, "bob");
    }

    #[tokio::test]
    async fn test_duplicate_usernames_allowed() {
        let pool = setup_test_db();
        let repo = UserRepository::new(pool);

        let first = repo.create("alice").await.unwrap();
        let second = repo.create("alice").await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }
}
