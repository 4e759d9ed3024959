//! Database repository for CRUD operations.
//!
//! Uses prepared statements, with transactions around multi-step mutations.

use sqlx::SqlitePool;

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pub(super) pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Deserialize a JSON-array text column, treating anything unreadable as empty.
pub(super) fn parse_json_array(s: &str) -> Vec<String> {
    serde_json::from_str(s).unwrap_or_default()
}

/// Current timestamp in the format used for created_at/updated_at columns.
pub(super) fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}
