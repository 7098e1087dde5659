//! Markdown table parser for terminology files.
//!
//! # Format
//! ```markdown
//! Cardiology
//! ==========
//!
//! | Term | Interpretation | Example |
//! | ---- | -------------- | ------- |
//! | tachy- | מהיר | tachycardia |
//! | brady- | איטי |
//! ```
//!
//! A heading is any line whose next non-blank line is made only of `=` characters.
//! Table rows become cards tagged with the most recent heading. Everything else
//! (prose, separators, table headers, rows missing a term or interpretation) is skipped.

use crate::types::{Card, Section, UNCATEGORIZED_SECTION};

/// First-cell labels that mark a table's own header row.
const HEADER_LABELS: &[&str] = &[
    "term",
    "terms",
    "word",
    "words",
    "name",
    "abbreviation",
    "abbreviations",
    "medical term",
];

/// Shortest run of `=` accepted as a heading underline.
const MIN_UNDERLINE_LEN: usize = 3;

/// Parse markdown content into cards, in source order.
pub fn parse(content: &str) -> Vec<Card> {
    parse_sections(content)
        .into_iter()
        .flat_map(|section| section.cards)
        .collect()
}

/// Parse markdown content into sections of cards.
///
/// Every heading produces a section, even if no rows follow it. Cards that appear
/// before the first heading go into the uncategorized section, which is only
/// emitted when it is non-empty.
pub fn parse_sections(content: &str) -> Vec<Section> {
    let mut window = LineWindow::new(content);
    let mut parser = Parser::new();

    while let Some((line_num, line)) = window.next_line() {
        parser.process_line(line, line_num, &mut window);
    }

    let sections = parser.finish();
    tracing::debug!(
        sections = sections.len(),
        cards = sections.iter().map(|s| s.cards.len()).sum::<usize>(),
        "parsed terminology tables"
    );
    sections
}

/// Line cursor with lookahead to the next non-blank line.
///
/// Heading detection needs to see the line after the current one (skipping blanks)
/// before deciding what the current line is.
struct LineWindow<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineWindow<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            lines: content.lines().collect(),
            pos: 0,
        }
    }

    /// Advance and return the next line with its 1-based line number.
    fn next_line(&mut self) -> Option<(usize, &'a str)> {
        let line = *self.lines.get(self.pos)?;
        self.pos += 1;
        Some((self.pos, line))
    }

    /// Look at the next non-blank line without consuming anything.
    fn peek_non_blank(&self) -> Option<&'a str> {
        self.lines[self.pos..]
            .iter()
            .copied()
            .find(|line| !line.trim().is_empty())
    }

    /// Consume lines up to and including the next non-blank line.
    fn consume_non_blank(&mut self) {
        while let Some((_, line)) = self.next_line() {
            if !line.trim().is_empty() {
                break;
            }
        }
    }
}

struct Parser {
    sections: Vec<Section>,
    current: Section,
    named: bool,
}

impl Parser {
    fn new() -> Self {
        Self {
            sections: Vec::new(),
            current: Section::new(UNCATEGORIZED_SECTION),
            named: false,
        }
    }

    fn process_line(&mut self, line: &str, line_num: usize, window: &mut LineWindow<'_>) {
        match Self::classify(line, window) {
            LineType::Heading(title) => {
                window.consume_non_blank();
                self.start_section(title, line_num);
            }
            LineType::Row(cells) => self.handle_row(cells, line_num, window),
            LineType::Prose | LineType::Empty => {}
        }
    }

    fn classify<'a>(line: &'a str, window: &LineWindow<'_>) -> LineType<'a> {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            LineType::Empty
        } else if is_table_row(trimmed) {
            LineType::Row(split_cells(trimmed))
        } else if !is_underline(trimmed) && window.peek_non_blank().is_some_and(is_underline) {
            LineType::Heading(trimmed)
        } else {
            LineType::Prose
        }
    }

    fn start_section(&mut self, title: &str, line_num: usize) {
        tracing::debug!(line = line_num, section = title, "section heading");
        let previous = std::mem::replace(&mut self.current, Section::new(title));
        if self.named || !previous.cards.is_empty() {
            self.sections.push(previous);
        }
        self.named = true;
    }

    fn handle_row(&mut self, cells: Vec<String>, line_num: usize, window: &LineWindow<'_>) {
        if is_separator(&cells) {
            return;
        }
        if is_header(&cells) || window.peek_non_blank().is_some_and(is_separator_line) {
            return;
        }

        let mut cells = cells.into_iter();
        let term = cells.next().unwrap_or_default();
        let interpretation = cells.next().unwrap_or_default();
        let extra = cells.next().unwrap_or_default();

        if term.is_empty() || interpretation.is_empty() {
            tracing::debug!(line = line_num, "dropping row without term or interpretation");
            return;
        }

        self.current.cards.push(Card {
            term,
            interpretation,
            extra,
            section: self.current.name.clone(),
        });
    }

    fn finish(mut self) -> Vec<Section> {
        if self.named || !self.current.cards.is_empty() {
            self.sections.push(self.current);
        }
        self.sections
    }
}

enum LineType<'a> {
    Heading(&'a str),
    Row(Vec<String>),
    Prose,
    Empty,
}

/// Whether a trimmed line is pipe-delimited table content.
///
/// Rows normally start with `|`; a row that lost its leading pipe still counts
/// when it ends with one and has at least two cells.
fn is_table_row(trimmed: &str) -> bool {
    if trimmed.starts_with('|') {
        return true;
    }
    ends_with_pipe(trimmed) && raw_cells(trimmed).len() > 2
}

/// Whether a trimmed line is a heading underline.
fn is_underline(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.chars().count() >= MIN_UNDERLINE_LEN && trimmed.chars().all(|c| c == '=')
}

/// Whether every non-empty cell is a markdown divider such as `---` or `:---:`.
fn is_separator(cells: &[String]) -> bool {
    let mut non_empty = cells.iter().filter(|cell| !cell.is_empty()).peekable();
    non_empty.peek().is_some()
        && non_empty.all(|cell| cell.contains('-') && cell.chars().all(|c| c == '-' || c == ':'))
}

fn is_separator_line(line: &str) -> bool {
    let trimmed = line.trim();
    is_table_row(trimmed) && is_separator(&split_cells(trimmed))
}

fn is_header(cells: &[String]) -> bool {
    cells.first().is_some_and(|first| {
        let first = first.to_lowercase();
        HEADER_LABELS.contains(&first.as_str())
    })
}

fn ends_with_pipe(trimmed: &str) -> bool {
    trimmed.ends_with('|') && !trimmed.ends_with("\\|")
}

/// Split a row on unescaped pipes, trimming each cell and dropping the empty
/// edge cells produced by leading and trailing pipes.
fn split_cells(trimmed: &str) -> Vec<String> {
    let mut cells = raw_cells(trimmed);

    if trimmed.starts_with('|') && cells.first().is_some_and(String::is_empty) {
        cells.remove(0);
    }
    if ends_with_pipe(trimmed) && cells.last().is_some_and(String::is_empty) {
        cells.pop();
    }

    cells
}

/// Split on `|`, keeping `\|` as a literal pipe inside the cell.
fn raw_cells(trimmed: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut chars = trimmed.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'|') => {
                chars.next();
                cell.push('|');
            }
            '|' => cells.push(std::mem::take(&mut cell).trim().to_string()),
            _ => cell.push(c),
        }
    }
    cells.push(cell.trim().to_string());

    cells
}
