use chrono::{NaiveDate, Utc};
use rusqlite::params_from_iter;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{Exercise, FromSqliteRow, LogEntry, User};
use crate::query::LogQuery;

#[derive(Clone)]
pub struct ExerciseRepository {
    pool: DbPool,
}

impl ExerciseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Insert a new exercise owned by `user`. The owner's username is
    /// copied onto the row at creation time.
    pub async fn create(
        &self,
        user: &User,
        description: &str,
        duration: Option<i64>,
        date: NaiveDate,
    ) -> Result<Exercise> {
        let exercise = Exercise {
            id: Uuid::new_v4().to_string(),
            user_id: user.id.clone(),
            username: user.username.clone(),
            description: description.to_string(),
            duration,
            date,
            created_at: Utc::now(),
        };
        let row = exercise.clone();

        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<()> {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO exercises (id, user_id, username, description, duration, date, created_at)
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
                rusqlite::params![
                    row.id,
                    row.user_id,
                    row.username,
                    row.description,
                    row.duration,
                    row.date,
                    row.created_at
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

        Ok(exercise)
    }

    /// Run a resolved log query, returning the projected entries in
    /// insertion order.
    pub async fn find_logs(&self, query: &LogQuery) -> Result<Vec<LogEntry>> {
        let (sql, params) = query.to_sql();
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(&sql)?;
            let entries = stmt
                .query_map(params_from_iter(params), LogEntry::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(entries)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
