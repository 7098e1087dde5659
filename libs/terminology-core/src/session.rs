//! Flashcard and quiz session state.

use crate::matching::{score, Feedback};
use crate::types::{Card, ScoredAnswer, StudyMode};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Browsing state for simple and inverted flashcard modes.
#[derive(Debug, Clone)]
pub struct FlashcardSession {
    cards: Vec<Card>,
    original_order: Vec<Card>,
    mode: StudyMode,
    index: usize,
    flipped: bool,
}

impl FlashcardSession {
    pub fn new(cards: Vec<Card>, mode: StudyMode) -> Self {
        Self {
            original_order: cards.clone(),
            cards,
            mode,
            index: 0,
            flipped: false,
        }
    }

    pub fn mode(&self) -> StudyMode {
        self.mode
    }

    pub fn current(&self) -> Option<&Card> {
        self.cards.get(self.index)
    }

    /// Text for the visible face of the current card.
    pub fn visible_text(&self) -> Option<String> {
        self.current().map(|card| {
            if self.flipped {
                card.back(self.mode)
            } else {
                card.front(self.mode)
            }
        })
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// 1-based position and deck length, `(0, 0)` for an empty deck.
    pub fn position(&self) -> (usize, usize) {
        if self.cards.is_empty() {
            (0, 0)
        } else {
            (self.index + 1, self.cards.len())
        }
    }

    pub fn flip(&mut self) {
        if !self.cards.is_empty() {
            self.flipped = !self.flipped;
        }
    }

    /// Move forward; stays on the last card.
    pub fn next(&mut self) -> bool {
        if self.index + 1 < self.cards.len() {
            self.index += 1;
            self.flipped = false;
            true
        } else {
            false
        }
    }

    /// Move back; stays on the first card.
    pub fn prev(&mut self) -> bool {
        if self.index > 0 && !self.cards.is_empty() {
            self.index -= 1;
            self.flipped = false;
            true
        } else {
            false
        }
    }

    /// Shuffle the deck and start over from the first card.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.index = 0;
        self.flipped = false;
    }

    /// Put the deck back in the order it was dealt and start over.
    pub fn restore_order(&mut self) {
        self.cards.clone_from(&self.original_order);
        self.index = 0;
        self.flipped = false;
    }

    /// Deck in the order it was dealt, unaffected by shuffles.
    pub fn original_order(&self) -> &[Card] {
        &self.original_order
    }
}

/// Running totals for a quiz.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizTally {
    /// Questions in the quiz.
    pub total: usize,
    /// Answers that earned full credit.
    pub correct: usize,
    /// Sum of partial credit across answered questions.
    pub score: f64,
}

impl QuizTally {
    /// Share of fully correct answers as a percentage, 0 for an empty quiz.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64 * 100.0
        }
    }

    fn record(&mut self, answer: ScoredAnswer) {
        if answer.matched {
            self.correct += 1;
        }
        self.score += answer.score;
    }
}

/// Question state for quiz mode: the interpretation is shown and the term is typed.
#[derive(Debug, Clone)]
pub struct QuizSession {
    cards: Vec<Card>,
    index: usize,
    answered: bool,
    tally: QuizTally,
}

impl QuizSession {
    pub fn new(cards: Vec<Card>) -> Self {
        let tally = QuizTally {
            total: cards.len(),
            ..QuizTally::default()
        };
        Self {
            cards,
            index: 0,
            answered: false,
            tally,
        }
    }

    pub fn current(&self) -> Option<&Card> {
        self.cards.get(self.index)
    }

    /// 1-based position and quiz length, `(0, 0)` for an empty quiz.
    pub fn position(&self) -> (usize, usize) {
        if self.cards.is_empty() {
            (0, 0)
        } else {
            (self.index + 1, self.cards.len())
        }
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    /// Score an answer for the current question.
    ///
    /// Returns `None` when there is no question or it was already answered.
    pub fn submit(&mut self, answer: &str) -> Option<(ScoredAnswer, Feedback)> {
        if self.answered {
            return None;
        }
        let card = self.cards.get(self.index)?;

        let result = score(answer, &card.back(StudyMode::Quiz));
        self.answered = true;
        self.tally.record(result);

        tracing::debug!(
            question = self.index + 1,
            score = result.score,
            matched = result.matched,
            "scored quiz answer"
        );
        Some((result, Feedback::from(result)))
    }

    /// Move to the next question once the current one is answered.
    pub fn advance(&mut self) -> bool {
        if !self.answered || self.index + 1 >= self.cards.len() {
            return false;
        }
        self.index += 1;
        self.answered = false;
        true
    }

    /// Whether the last question has been answered.
    pub fn is_finished(&self) -> bool {
        self.cards.is_empty() || (self.answered && self.index + 1 == self.cards.len())
    }

    pub fn tally(&self) -> QuizTally {
        self.tally
    }
}
