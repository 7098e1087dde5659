//! SQLite schema definitions.

/// Current schema version for migrations.
pub const SCHEMA_VERSION: i32 = 1;

/// Complete schema for the local history database.
pub const SCHEMA: &str = r#"
-- One row per finished quiz
CREATE TABLE IF NOT EXISTS quiz_history (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    taken_at TEXT NOT NULL,
    mode TEXT NOT NULL,
    number_of_questions INTEGER NOT NULL,
    number_of_correct_answers INTEGER NOT NULL,
    score REAL NOT NULL DEFAULT 0
);

-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_quiz_history_taken_at ON quiz_history(taken_at);
"#;

/// Record the schema version if not already present.
pub const INIT_SCHEMA_VERSION: &str =
    "INSERT OR IGNORE INTO schema_version (version) VALUES (?1)";
