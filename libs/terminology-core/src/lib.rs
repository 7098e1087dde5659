//! Core terminology library for the medical terms study aid.
//!
//! Provides:
//! - Markdown table parser for terminology files
//! - Answer scoring for typed quiz mode (normalization and partial credit)
//! - Deck preparation (section filtering, sampling, shuffling)
//! - Flashcard and quiz session state
//! - Shared types (Card, Section, ScoredAnswer, etc.)

pub mod deck;
pub mod error;
pub mod matching;
pub mod parser;
pub mod session;
pub mod types;

pub use deck::{filter_sections, prepare_deck};
pub use error::{CoreError, Result};
pub use matching::{alternatives, normalize, score, Feedback};
pub use parser::{parse, parse_sections};
pub use session::{FlashcardSession, QuizSession, QuizTally};
pub use types::{Card, ScoredAnswer, Section, StudyMode, StudySettings, UNCATEGORIZED_SECTION};
