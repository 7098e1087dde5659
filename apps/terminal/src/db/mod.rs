//! Local SQLite quiz history.

pub mod date_utils;
pub mod error;
pub mod repository;
pub mod schema;

pub use error::DbError;
pub use repository::{HistoryRepository, QuizRecord, SqliteRepository};
