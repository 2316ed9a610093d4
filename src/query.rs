//! Log query construction.
//!
//! Translates the raw `from`/`to`/`limit` parameters of the logs endpoint
//! into a filtered, ordered, capped query over the exercises table.

use chrono::NaiveDate;
use rusqlite::types::Value;
use serde::Deserialize;

use crate::coerce;

/// Raw query-string parameters of the logs endpoint, as sent by the client.
#[derive(Debug, Default, Deserialize)]
pub struct LogParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// A resolved log query for one user: coerced date bounds and result cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQuery {
    pub user_id: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<i64>,
}

impl LogQuery {
    /// Resolve raw parameters against an owning user. A bound that fails to
    /// parse is dropped from the filter; a non-numeric or non-positive
    /// limit means "no cap". Neither is an error.
    pub fn new(user_id: &str, params: &LogParams) -> Self {
        Self {
            user_id: user_id.to_string(),
            from: params.from.as_deref().and_then(coerce::date),
            to: params.to.as_deref().and_then(coerce::date),
            limit: params.limit.as_deref().and_then(coerce::limit),
        }
    }

    /// Render the query as SQL plus positional parameters.
    ///
    /// The projection is fixed to the three fields the logs endpoint
    /// exposes. Both date bounds are inclusive. Ordering is insertion
    /// order, made explicit with the id as tiebreaker.
    pub fn to_sql(&self) -> (String, Vec<Value>) {
        let mut sql =
            String::from("SELECT description, duration, date FROM exercises WHERE user_id = ?");
        let mut params: Vec<Value> = vec![Value::Text(self.user_id.clone())];

        if let Some(from) = self.from {
            sql.push_str(" AND date >= ?");
            params.push(Value::Text(from.to_string()));
        }
        if let Some(to) = self.to {
            sql.push_str(" AND date <= ?");
            params.push(Value::Text(to.to_string()));
        }

        sql.push_str(" ORDER BY created_at, id");

        if let Some(limit) = self.limit {
            sql.push_str(" LIMIT ?");
            params.push(Value::Integer(limit));
        }

        (sql, params)
    }
}
