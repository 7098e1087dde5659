//! Application controller switching between screens.

use crate::db::{HistoryRepository, QuizRecord};
use crate::screens::{self, MenuChoice, Terminal};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{BufRead, Write};
use terminology_core::deck::prepare_deck;
use terminology_core::session::{FlashcardSession, QuizSession};
use terminology_core::types::{Card, StudyMode, StudySettings};

/// Loaded cards, history store and terminal for one run of the program.
pub struct App<R, W, H> {
    cards: Vec<Card>,
    history: H,
    settings: StudySettings,
    terminal: Terminal<R, W>,
    rng: StdRng,
}

impl<R: BufRead, W: Write, H: HistoryRepository> App<R, W, H> {
    pub fn new(cards: Vec<Card>, history: H, settings: StudySettings, terminal: Terminal<R, W>) -> Self {
        Self {
            cards,
            history,
            settings,
            terminal,
            rng: StdRng::from_entropy(),
        }
    }

    /// Use a fixed random source, for reproducible decks.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Give back the history store and terminal once the app is done.
    pub fn into_parts(self) -> (H, Terminal<R, W>) {
        (self.history, self.terminal)
    }

    /// Run the main menu loop until the user quits.
    pub fn run(&mut self) -> screens::Result<()> {
        loop {
            let choice =
                screens::menu::show(&mut self.terminal, self.settings.card_count, self.cards.len())?;
            match choice {
                MenuChoice::Study(mode) => self.study(mode)?,
                MenuChoice::Scoreboard => screens::scoreboard::show(&mut self.terminal, &self.history)?,
                MenuChoice::CardCount(count) => {
                    self.settings = StudySettings::with_card_count(count);
                    self.terminal
                        .say(format!("Number of cards: {}", self.settings.card_count))?;
                }
                MenuChoice::Quit => return Ok(()),
            }
        }
    }

    fn study(&mut self, mode: StudyMode) -> screens::Result<()> {
        // An empty table still opens the screen, which shows its empty state
        let deck = prepare_deck(&self.cards, self.settings.card_count, &mut self.rng)
            .unwrap_or_default();
        tracing::info!(mode = mode.as_str(), cards = deck.len(), "starting session");

        match mode {
            StudyMode::Simple | StudyMode::Inverted => {
                let mut session = FlashcardSession::new(deck, mode);
                screens::flashcard::run(&mut self.terminal, &mut session, &mut self.rng)
            }
            StudyMode::Quiz => {
                let mut session = QuizSession::new(deck);
                if let Some(tally) = screens::quiz::run(&mut self.terminal, &mut session)? {
                    let record = QuizRecord::from_tally(mode, &tally);
                    let id = self.history.record_result(&record)?;
                    tracing::info!(id, total = tally.total, correct = tally.correct, "saved quiz result");
                }
                Ok(())
            }
        }
    }
}
