//! Core types for the terminology study aid.

use serde::{Deserialize, Serialize};

/// Section assigned to cards that appear before any heading.
pub const UNCATEGORIZED_SECTION: &str = "Uncategorized";

/// One vocabulary entry parsed from a terminology table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Source-language word or abbreviation; may hold comma-separated synonyms.
    pub term: String,
    /// Primary translation or definition; may hold comma-separated alternatives.
    pub interpretation: String,
    /// Example or explanatory text, empty when the row has none.
    pub extra: String,
    /// Heading the row appeared under.
    pub section: String,
}

impl Card {
    /// Create a card with no extra text in the uncategorized section.
    pub fn new(term: impl Into<String>, interpretation: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            interpretation: interpretation.into(),
            extra: String::new(),
            section: UNCATEGORIZED_SECTION.to_string(),
        }
    }

    /// Text shown before the card is flipped (or the quiz prompt).
    pub fn front(&self, mode: StudyMode) -> String {
        match mode {
            StudyMode::Simple => self.term.clone(),
            StudyMode::Inverted | StudyMode::Quiz => self.interpretation.clone(),
        }
    }

    /// Text shown after the card is flipped (or the expected quiz answer).
    pub fn back(&self, mode: StudyMode) -> String {
        match mode {
            StudyMode::Simple if self.extra.is_empty() => self.interpretation.clone(),
            StudyMode::Simple => format!("{}\n\n({})", self.interpretation, self.extra),
            StudyMode::Inverted | StudyMode::Quiz => self.term.clone(),
        }
    }
}

/// Named group of cards, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub cards: Vec<Card>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::new(),
        }
    }
}

/// Result of scoring one typed answer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredAnswer {
    /// Fraction of reference alternatives covered, in `[0, 1]`.
    pub score: f64,
    /// True only for full credit.
    pub matched: bool,
}

impl ScoredAnswer {
    pub fn zero() -> Self {
        Self {
            score: 0.0,
            matched: false,
        }
    }
}

/// Study mode options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyMode {
    /// Flashcards showing the term first.
    Simple,
    /// Flashcards showing the interpretation first.
    Inverted,
    /// Type the term for the shown interpretation.
    Quiz,
}

impl Default for StudyMode {
    fn default() -> Self {
        Self::Simple
    }
}

impl StudyMode {
    /// Get the mode name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Inverted => "inverted",
            Self::Quiz => "quiz",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "simple" => Some(Self::Simple),
            "inverted" => Some(Self::Inverted),
            "quiz" => Some(Self::Quiz),
            _ => None,
        }
    }
}

/// Deck size options for a study session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySettings {
    pub card_count: usize,
}

impl StudySettings {
    pub const MIN_CARD_COUNT: usize = 10;
    pub const MAX_CARD_COUNT: usize = 500;
    pub const DEFAULT_CARD_COUNT: usize = 100;

    /// Settings with the card count clamped to the supported range.
    pub fn with_card_count(card_count: usize) -> Self {
        Self {
            card_count: card_count.clamp(Self::MIN_CARD_COUNT, Self::MAX_CARD_COUNT),
        }
    }
}

impl Default for StudySettings {
    fn default() -> Self {
        Self {
            card_count: Self::DEFAULT_CARD_COUNT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn card_with_extra() -> Card {
        Card {
            term: "tachycardia".to_string(),
            interpretation: "דופק מהיר".to_string(),
            extra: "HR > 100".to_string(),
            section: "Cardiology".to_string(),
        }
    }

    #[test]
    fn simple_mode_shows_term_then_interpretation_with_extra() {
        let card = card_with_extra();
        assert_eq!(card.front(StudyMode::Simple), "tachycardia");
        assert_eq!(card.back(StudyMode::Simple), "דופק מהיר\n\n(HR > 100)");
    }

    #[test]
    fn simple_mode_back_without_extra() {
        let card = Card::new("IV", "תוך ורידי");
        assert_eq!(card.back(StudyMode::Simple), "תוך ורידי");
    }

    #[test]
    fn inverted_and_quiz_modes_swap_faces() {
        let card = card_with_extra();
        assert_eq!(card.front(StudyMode::Inverted), "דופק מהיר");
        assert_eq!(card.back(StudyMode::Inverted), "tachycardia");
        assert_eq!(card.front(StudyMode::Quiz), "דופק מהיר");
        assert_eq!(card.back(StudyMode::Quiz), "tachycardia");
    }

    #[test]
    fn study_mode_string_round_trip() {
        for mode in [StudyMode::Simple, StudyMode::Inverted, StudyMode::Quiz] {
            assert_eq!(StudyMode::from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(StudyMode::from_str("scoreboard"), None);
    }

    #[test]
    fn card_count_is_clamped() {
        assert_eq!(StudySettings::with_card_count(3).card_count, 10);
        assert_eq!(StudySettings::with_card_count(42).card_count, 42);
        assert_eq!(StudySettings::with_card_count(9000).card_count, 500);
        assert_eq!(StudySettings::default().card_count, 100);
    }
}
