//! Error types for terminology-core.

use thiserror::Error;

/// Result type alias using CoreError.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur while preparing a study deck.
///
/// Parsing and scoring never fail; malformed input degrades to fewer cards or a zero score.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("no cards to study")]
    EmptyDeck,

    #[error("unknown section: {name}")]
    UnknownSection { name: String },
}
