//! Flashcard screen for simple and inverted modes.

use super::{Result, Terminal};
use rand::Rng;
use std::io::{BufRead, Write};
use terminology_core::session::FlashcardSession;
use terminology_core::types::StudyMode;

const PROMPT: &str = "[f]lip [n]ext [p]rev [s]huffle [o]rder [q]uit > ";

fn title(mode: StudyMode) -> &'static str {
    match mode {
        StudyMode::Inverted => "Inverted Mode",
        StudyMode::Simple | StudyMode::Quiz => "Simple Mode",
    }
}

fn hint(session: &FlashcardSession) -> &'static str {
    match (session.mode(), session.is_flipped()) {
        (_, false) => "(f to flip)",
        (StudyMode::Inverted, true) => "(f to see interpretation)",
        (_, true) => "(f to see term)",
    }
}

fn render<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    session: &FlashcardSession,
) -> Result<()> {
    let Some(text) = session.visible_text() else {
        terminal.say("No cards loaded")?;
        terminal.say("0 / 0")?;
        return Ok(());
    };
    let (position, total) = session.position();

    terminal.say("")?;
    terminal.say(format!("Card {position} of {total}"))?;
    terminal.say(text)?;
    terminal.say(hint(session))?;
    Ok(())
}

/// Browse the deck until the user goes back to the menu.
///
/// Commands: `f` or an empty line flips, `n` next, `p` previous, `s` shuffle,
/// `o` back to the dealt order, `q` menu.
pub fn run<R: BufRead, W: Write, G: Rng + ?Sized>(
    terminal: &mut Terminal<R, W>,
    session: &mut FlashcardSession,
    rng: &mut G,
) -> Result<()> {
    terminal.say(title(session.mode()))?;
    render(terminal, session)?;

    while let Some(line) = terminal.prompt(PROMPT)? {
        match line.trim().to_lowercase().as_str() {
            "" | "f" => session.flip(),
            "n" => {
                if !session.next() {
                    terminal.say("Last card")?;
                    continue;
                }
            }
            "p" => {
                if !session.prev() {
                    terminal.say("First card")?;
                    continue;
                }
            }
            "s" => session.shuffle(rng),
            "o" => session.restore_order(),
            "q" => break,
            other => {
                terminal.say(format!("Unknown command: {other}"))?;
                continue;
            }
        }
        render(terminal, session)?;
    }

    Ok(())
}
