//! End-to-end runs of the terminal app with scripted input.

use medterms_terminal::app::App;
use medterms_terminal::db::{HistoryRepository, SqliteRepository};
use medterms_terminal::screens::Terminal;
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use terminology_core::types::{StudyMode, StudySettings};

const TERMS: &str = "\
Cardiology
==========

| Term | Interpretation | Example |
| ---- | -------------- | ------- |
| tachycardia | דופק מהיר | HR > 100 |
";

/// Run the app over `script` and return the history store and everything printed.
fn run_app(script: &str, content: &str) -> (SqliteRepository, String) {
    let cards = terminology_core::parse(content);
    let history = SqliteRepository::open_in_memory().unwrap();
    let terminal = Terminal::new(script.as_bytes(), Vec::new());

    let mut app = App::new(cards, history, StudySettings::with_card_count(10), terminal)
        .with_rng(StdRng::seed_from_u64(42));
    app.run().unwrap();

    let (history, terminal) = app.into_parts();
    (history, String::from_utf8(terminal.into_output()).unwrap())
}

/// Ten correct answers with Enter between them.
fn correct_quiz_script() -> String {
    let mut script = String::from("3\n");
    for i in 0..10 {
        script.push_str("tachy-cardia\n");
        if i < 9 {
            script.push('\n');
        }
    }
    script
}

#[test]
fn quit_immediately() {
    let (history, output) = run_app("q\n", TERMS);
    assert!(output.contains("1 cards loaded"));
    assert!(history.load_history().unwrap().is_empty());
}

#[test]
fn finished_quiz_is_recorded() {
    let script = correct_quiz_script() + "q\n";
    let (history, output) = run_app(&script, TERMS);

    assert!(output.contains("You got 10 out of 10 correct (100%)"));
    let records = history.load_history().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].mode, StudyMode::Quiz);
    assert_eq!(records[0].number_of_questions, 10);
    assert_eq!(records[0].number_of_correct_answers, 10);
    assert_eq!(records[0].score, 10.0);
}

#[test]
fn abandoned_quiz_is_not_recorded() {
    let (history, _) = run_app("3\ntachycardia\n\n:q\nq\n", TERMS);
    assert!(history.load_history().unwrap().is_empty());
}

#[test]
fn scoreboard_lists_recorded_quizzes() {
    let script = correct_quiz_script() + "4\nq\n";
    let (_, output) = run_app(&script, TERMS);
    assert!(output.contains("Date/Time"));
    assert!(output.contains("|        10 |      10 |       100%"));
}

#[test]
fn scoreboard_empty_state() {
    let (_, output) = run_app("4\nq\n", TERMS);
    assert!(output.contains("No quiz history yet"));
}

#[test]
fn flashcards_show_term_then_interpretation() {
    let (_, output) = run_app("1\nf\nq\nq\n", TERMS);
    assert!(output.contains("Card 1 of 10\ntachycardia\n(f to flip)"));
    assert!(output.contains("דופק מהיר\n\n(HR > 100)\n(f to see term)"));
}

#[test]
fn card_count_is_adjustable() {
    let (_, output) = run_app("c 3\n1\nq\nq\n", TERMS);
    assert!(output.contains("Number of cards: 10"));

    let (_, output) = run_app("c 12\n1\nq\nq\n", TERMS);
    assert!(output.contains("Number of cards: 12"));
    assert!(output.contains("Card 1 of 12"));
}

#[test]
fn empty_source_shows_no_cards() {
    let (_, output) = run_app("3\n1\nq\nq\n", "Just prose, no tables.\n");
    assert!(output.contains("0 cards loaded"));
    assert!(output.contains("No cards loaded"));
}
