//! Repository pattern for database access.

use crate::db::date_utils::parse_timestamp;
use crate::db::error::DbError;
use crate::db::schema::{INIT_SCHEMA_VERSION, SCHEMA, SCHEMA_VERSION};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use std::path::Path;
use terminology_core::session::QuizTally;
use terminology_core::types::StudyMode;

type Result<T> = std::result::Result<T, DbError>;

/// One finished quiz.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizRecord {
    pub taken_at: DateTime<Utc>,
    pub mode: StudyMode,
    pub number_of_questions: usize,
    pub number_of_correct_answers: usize,
    /// Sum of partial credit.
    pub score: f64,
}

impl QuizRecord {
    /// Record a quiz tally taken now.
    pub fn from_tally(mode: StudyMode, tally: &QuizTally) -> Self {
        Self {
            taken_at: Utc::now(),
            mode,
            number_of_questions: tally.total,
            number_of_correct_answers: tally.correct,
            score: tally.score,
        }
    }

    /// Share of correct answers as a percentage, 0 when there were no questions.
    pub fn percentage(&self) -> f64 {
        if self.number_of_questions == 0 {
            0.0
        } else {
            self.number_of_correct_answers as f64 / self.number_of_questions as f64 * 100.0
        }
    }
}

/// Repository for quiz history operations.
pub trait HistoryRepository {
    /// Append a result and return its row id.
    fn record_result(&self, record: &QuizRecord) -> Result<i64>;
    /// All results, oldest first.
    fn load_history(&self) -> Result<Vec<QuizRecord>>;
    /// Up to `limit` results, most recent first.
    fn latest(&self, limit: usize) -> Result<Vec<QuizRecord>>;
}

/// SQLite implementation of repositories.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Open database at path, creating if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        self.conn.execute(INIT_SCHEMA_VERSION, params![SCHEMA_VERSION])?;
        Ok(())
    }

    fn query_records(&self, sql: &str, limit: i64) -> Result<Vec<QuizRecord>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt
            .query_map(params![limit], |row| {
                Ok(HistoryRow {
                    taken_at: row.get(0)?,
                    mode: row.get(1)?,
                    number_of_questions: row.get(2)?,
                    number_of_correct_answers: row.get(3)?,
                    score: row.get(4)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.into_iter().map(QuizRecord::try_from).collect()
    }
}

/// Raw column values, validated into a `QuizRecord`.
struct HistoryRow {
    taken_at: String,
    mode: String,
    number_of_questions: i64,
    number_of_correct_answers: i64,
    score: f64,
}

impl TryFrom<HistoryRow> for QuizRecord {
    type Error = DbError;

    fn try_from(row: HistoryRow) -> Result<Self> {
        let mode = StudyMode::from_str(&row.mode)
            .ok_or_else(|| DbError::InvalidData(format!("unknown mode: {}", row.mode)))?;
        let count = |value: i64| {
            usize::try_from(value)
                .map_err(|_| DbError::InvalidData(format!("negative count: {value}")))
        };

        Ok(QuizRecord {
            taken_at: parse_timestamp(&row.taken_at)?,
            mode,
            number_of_questions: count(row.number_of_questions)?,
            number_of_correct_answers: count(row.number_of_correct_answers)?,
            score: row.score,
        })
    }
}

impl HistoryRepository for SqliteRepository {
    fn record_result(&self, record: &QuizRecord) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO quiz_history (taken_at, mode, number_of_questions, number_of_correct_answers, score)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                record.taken_at.to_rfc3339(),
                record.mode.as_str(),
                record.number_of_questions as i64,
                record.number_of_correct_answers as i64,
                record.score,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn load_history(&self) -> Result<Vec<QuizRecord>> {
        // SQLite treats a negative LIMIT as no limit
        self.query_records(
            "SELECT taken_at, mode, number_of_questions, number_of_correct_answers, score
             FROM quiz_history ORDER BY id ASC LIMIT ?1",
            -1,
        )
    }

    fn latest(&self, limit: usize) -> Result<Vec<QuizRecord>> {
        self.query_records(
            "SELECT taken_at, mode, number_of_questions, number_of_correct_answers, score
             FROM quiz_history ORDER BY id DESC LIMIT ?1",
            i64::try_from(limit).unwrap_or(i64::MAX),
        )
    }
}
