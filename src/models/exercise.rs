use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::Row;
use serde::{Deserialize, Serialize, Serializer};

use super::FromSqliteRow;

/// A logged exercise. `username` is a copy of the owner's username taken at
/// creation time; queries join on `user_id`, the owner's stable identifier.
#[derive(Debug, Clone)]
pub struct Exercise {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub description: String,
    /// Minutes. `None` is the sentinel for non-numeric client input.
    pub duration: Option<i64>,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl FromSqliteRow for Exercise {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            username: row.get("username")?,
            description: row.get("description")?,
            duration: row.get("duration")?,
            date: row.get("date")?,
            created_at: row.get("created_at")?,
        })
    }
}

/// Request body for logging an exercise. `duration` and `date` arrive as
/// raw text and go through lenient coercion.
#[derive(Debug, Deserialize)]
pub struct CreateExercise {
    pub description: String,
    pub duration: String,
    #[serde(default)]
    pub date: Option<String>,
}

/// The projection served by the logs endpoint: exactly these three fields,
/// never the record's own id.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: Option<i64>,
    #[serde(serialize_with = "serialize_date_string")]
    pub date: NaiveDate,
}

impl FromSqliteRow for LogEntry {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            description: row.get("description")?,
            duration: row.get("duration")?,
            date: row.get("date")?,
        })
    }
}

/// Format a date as a human-readable calendar string, e.g. "Sun Jan 15 2023".
pub fn date_string(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

fn serialize_date_string<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&date_string(*date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_string_format() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
        assert_eq!(date_string(date), "Sun Jan 15 2023");
    }

    #[test]
    fn test_date_string_pads_day() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(date_string(date), "Mon Jan 01 2024");
    }

    #[test]
    fn test_log_entry_serialization() {
        let entry = LogEntry {
            description: "run".to_string(),
            duration: Some(30),
            date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
        };
        let value = serde_json::to_value(entry).unwrap();
        assert_eq!(value["description"], "run");
        assert_eq!(value["duration"], 30);
        assert_eq!(value["date"], "Sun Jan 15 2023");
    }

    #[test]
    fn test_log_entry_null_duration() {
        let entry = LogEntry {
            description: "stretch".to_string(),
            duration: None,
            date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
        };
        let value = serde_json::to_value(entry).unwrap();
        assert!(value["duration"].is_null());
    }
}
