//! Quiz screen: type the term for the shown interpretation.

use super::{Result, Terminal};
use std::io::{BufRead, Write};
use terminology_core::matching::Feedback;
use terminology_core::session::{QuizSession, QuizTally};
use terminology_core::types::{ScoredAnswer, StudyMode};

/// Reply that abandons the quiz without recording it.
pub const QUIT_COMMAND: &str = ":q";

fn feedback_line(result: ScoredAnswer, feedback: Feedback, term: &str) -> String {
    match feedback {
        Feedback::Correct => "Correct!".to_string(),
        Feedback::Partial => format!(
            "Partially correct ({:.0}%). Full answer: {term}",
            result.score * 100.0
        ),
        Feedback::Incorrect => format!("Incorrect. Answer: {term}"),
    }
}

/// Ask every question in the session.
///
/// Returns the final tally, or `None` if the user quit or input ended early.
pub fn run<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    session: &mut QuizSession,
) -> Result<Option<QuizTally>> {
    terminal.say("Quiz Mode")?;

    if session.current().is_none() {
        terminal.say("No cards loaded")?;
        terminal.say("0 / 0")?;
        return Ok(None);
    }

    loop {
        let Some(card) = session.current().cloned() else {
            return Ok(None);
        };
        let (position, total) = session.position();

        terminal.say("")?;
        terminal.say(format!("Card {position} of {total}"))?;
        terminal.say(card.front(StudyMode::Quiz))?;
        terminal.say("(type the medical term)")?;

        let Some(answer) = terminal.prompt("> ")? else {
            return Ok(None);
        };
        if answer.trim() == QUIT_COMMAND {
            return Ok(None);
        }

        if let Some((result, feedback)) = session.submit(&answer) {
            terminal.say(feedback_line(result, feedback, &card.back(StudyMode::Quiz)))?;
        }

        if session.is_finished() {
            break;
        }
        if terminal.prompt("(press Enter for the next card) ")?.is_none() {
            return Ok(None);
        }
        session.advance();
    }

    let tally = session.tally();
    show_results(terminal, &tally)?;
    Ok(Some(tally))
}

/// Quiz completion summary.
pub fn show_results<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    tally: &QuizTally,
) -> Result<()> {
    terminal.say("")?;
    terminal.say("Quiz Complete!")?;
    terminal.say(format!(
        "You got {} out of {} correct ({:.0}%)",
        tally.correct,
        tally.total,
        tally.percentage()
    ))?;
    Ok(())
}
