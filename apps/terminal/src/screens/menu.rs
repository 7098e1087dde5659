//! Main menu.

use super::{Result, Terminal};
use std::io::{BufRead, Write};
use terminology_core::types::StudyMode;

/// Action picked from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Study(StudyMode),
    Scoreboard,
    CardCount(usize),
    Quit,
}

impl MenuChoice {
    /// Parse a menu reply such as `1`, `quiz` or `c 50`.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim().to_lowercase();
        let mut words = input.split_whitespace();
        let choice = match (words.next()?, words.next()) {
            ("1" | "simple", None) => Self::Study(StudyMode::Simple),
            ("2" | "inverted", None) => Self::Study(StudyMode::Inverted),
            ("3" | "quiz", None) => Self::Study(StudyMode::Quiz),
            ("4" | "scoreboard", None) => Self::Scoreboard,
            ("c" | "cards", Some(count)) => Self::CardCount(count.parse().ok()?),
            ("q" | "quit", None) => Self::Quit,
            _ => return None,
        };
        if words.next().is_some() {
            return None;
        }
        Some(choice)
    }
}

/// Render the menu and wait for a valid choice. End of input quits.
pub fn show<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    card_count: usize,
    available: usize,
) -> Result<MenuChoice> {
    terminal.say("")?;
    terminal.say("Flash Card Game - Medical Terminology")?;
    terminal.say(format!("{available} cards loaded"))?;
    terminal.say("  1) Simple mode (term first)")?;
    terminal.say("  2) Inverted mode (interpretation first)")?;
    terminal.say("  3) Quiz mode (type the term)")?;
    terminal.say("  4) Scoreboard")?;
    terminal.say(format!("  c <n>) Number of cards (current: {card_count})"))?;
    terminal.say("  q) Quit")?;

    loop {
        let Some(line) = terminal.prompt("> ")? else {
            return Ok(MenuChoice::Quit);
        };
        match MenuChoice::parse(&line) {
            Some(choice) => return Ok(choice),
            None => terminal.say(format!("Unknown choice: {}", line.trim()))?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Study(StudyMode::Simple)));
        assert_eq!(MenuChoice::parse(" Inverted "), Some(MenuChoice::Study(StudyMode::Inverted)));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::Study(StudyMode::Quiz)));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Scoreboard));
        assert_eq!(MenuChoice::parse("c 50"), Some(MenuChoice::CardCount(50)));
        assert_eq!(MenuChoice::parse("q"), Some(MenuChoice::Quit));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(MenuChoice::parse(""), None);
        assert_eq!(MenuChoice::parse("7"), None);
        assert_eq!(MenuChoice::parse("c"), None);
        assert_eq!(MenuChoice::parse("c many"), None);
        assert_eq!(MenuChoice::parse("1 2"), None);
    }

    #[test]
    fn end_of_input_quits() {
        let mut terminal = Terminal::new("".as_bytes(), Vec::new());
        assert_eq!(show(&mut terminal, 100, 3).unwrap(), MenuChoice::Quit);
    }

    #[test]
    fn retries_until_valid() {
        let mut terminal = Terminal::new("nope\n2\n".as_bytes(), Vec::new());
        assert_eq!(
            show(&mut terminal, 100, 3).unwrap(),
            MenuChoice::Study(StudyMode::Inverted)
        );
        let output = String::from_utf8(terminal.into_output()).unwrap();
        assert!(output.contains("Unknown choice: nope"));
    }
}
