//! Scoreboard of past quizzes.

use super::{Result, Terminal};
use crate::db::date_utils::format_local;
use crate::db::HistoryRepository;
use std::io::{BufRead, Write};

/// Most quizzes listed at once.
pub const SCOREBOARD_LIMIT: usize = 50;

/// Show recent quiz history, most recent first.
pub fn show<R: BufRead, W: Write, H: HistoryRepository>(
    terminal: &mut Terminal<R, W>,
    history: &H,
) -> Result<()> {
    terminal.say("")?;
    terminal.say("Scoreboard")?;

    let records = history.latest(SCOREBOARD_LIMIT)?;
    if records.is_empty() {
        terminal.say("No quiz history yet")?;
        return Ok(());
    }

    terminal.say(format!(
        "{:<16} | {:>9} | {:>7} | {:>10}",
        "Date/Time", "Questions", "Correct", "Percentage"
    ))?;
    for record in &records {
        terminal.say(format!(
            "{:<16} | {:>9} | {:>7} | {:>9.0}%",
            format_local(&record.taken_at),
            record.number_of_questions,
            record.number_of_correct_answers,
            record.percentage()
        ))?;
    }
    Ok(())
}
