//! Extract best hit description of each query from a BLAST pairwise text report.
//!
//! Parser is a two state machine. In [State::Searching] every line is skipped until the
//! `Sequences producing significant alignments` marker, parser then switch to [State::InTable].
//! In this state blank lines and column header rows are skipped, the first data row give the
//! best hit description and parser come back to [State::Searching]. A terminator line (subject
//! definition, alignment details, next query, "no significant similarity found") close the
//! table without hit.
//!
//! Description is the text before the first run of two spaces, BLAST columns separator.

/* crate use */
use memchr::memmem;

/* project use */
use crate::error;
use crate::input;

/// Marker of begin of hit table, compared in lower case
pub const TABLE_MARKER: &str = "sequences producing significant alignments";

/// Line with this content close a table without hit, compared in lower case
pub const NO_HIT_MARKER: &str = "no significant similarity found";

/// First token of table column header rows
pub static HEADER_KEYWORDS: [&str; 13] = [
    "description",
    "scientific",
    "common",
    "taxid",
    "max",
    "total",
    "query",
    "e",
    "per.",
    "ident",
    "len",
    "accession",
    "name",
];

/// Case sensitive prefix of terminator lines
pub static TERMINATOR_PREFIXES: [&str; 2] = [">", "Query="];

/// Lower case prefix of terminator lines
pub static TERMINATOR_LOWER_PREFIXES: [&str; 4] = ["sequence id:", "range ", "score:", "method:"];

/// Lower case terminator lines
pub static TERMINATOR_WORDS: [&str; 2] = ["query", "sbjct"];

/// Parser state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    #[default]
    Searching,
    InTable,
}

/// Role of a line according to parser state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Line isn't relevant in this state
    Ignored,
    /// Begin of hit table
    TableStart,
    /// Empty line in table
    Blank,
    /// Line that close a table
    Terminator,
    /// Column header row
    HeaderRow,
    /// Data row, contains description
    Hit(&'a str),
}

impl<'a> LineKind<'a> {
    /// Classify line in state
    pub fn of(state: State, line: &'a str) -> Self {
        match state {
            State::Searching => {
                if is_table_start(line) {
                    LineKind::TableStart
                } else {
                    LineKind::Ignored
                }
            }
            State::InTable => {
                if line.trim().is_empty() {
                    LineKind::Blank
                } else if is_terminator(line) {
                    LineKind::Terminator
                } else if is_header_row(line) {
                    LineKind::HeaderRow
                } else {
                    LineKind::Hit(description(line))
                }
            }
        }
    }
}

/// Transition table, return next state and description to record if any
pub fn transition(state: State, kind: LineKind<'_>) -> (State, Option<&str>) {
    match (state, kind) {
        (State::Searching, LineKind::TableStart) => (State::InTable, None),
        (State::Searching, _) => (State::Searching, None),
        (State::InTable, LineKind::Blank) | (State::InTable, LineKind::HeaderRow) => {
            (State::InTable, None)
        }
        (State::InTable, LineKind::Terminator) => (State::Searching, None),
        (State::InTable, LineKind::Hit(desc)) => (State::Searching, Some(desc)),
        (State::InTable, LineKind::TableStart) | (State::InTable, LineKind::Ignored) => {
            (State::InTable, None)
        }
    }
}

/// Line begin a hit table
pub fn is_table_start(line: &str) -> bool {
    line.trim().to_ascii_lowercase().starts_with(TABLE_MARKER)
}

/// Line close a hit table
pub fn is_terminator(line: &str) -> bool {
    let line = line.trim();
    let lower = line.to_ascii_lowercase();

    TERMINATOR_PREFIXES
        .iter()
        .any(|prefix| line.starts_with(prefix))
        || TERMINATOR_LOWER_PREFIXES
            .iter()
            .any(|prefix| lower.starts_with(prefix))
        || TERMINATOR_WORDS.iter().any(|word| lower == *word)
        || lower.contains(NO_HIT_MARKER)
}

/// Line is a column header row
pub fn is_header_row(line: &str) -> bool {
    match line.split_whitespace().next() {
        Some(token) => HEADER_KEYWORDS.contains(&token.to_ascii_lowercase().as_str()),
        None => false,
    }
}

/// Text before first double space, trailing whitespace removed
pub fn description(line: &str) -> &str {
    let line = line.trim_start();

    let end = memmem::find(line.as_bytes(), b"  ").unwrap_or(line.len());

    line[..end].trim_end()
}

/// Incremental best hit extractor
#[derive(Debug, Clone, Default)]
pub struct Parser {
    state: State,
    hits: Vec<String>,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Descriptions found until now
    pub fn hits(&self) -> &[String] {
        &self.hits
    }

    /// Process one line, line terminator must be removed
    pub fn feed(&mut self, line: &str) {
        let kind = LineKind::of(self.state, line);
        let (next, hit) = transition(self.state, kind);

        if let Some(desc) = hit {
            log::debug!("best hit {}", desc);
            self.hits.push(desc.to_string());
        }

        self.state = next;
    }

    /// Consume parser and return descriptions in file order, state at end of input doesn't matter
    pub fn finish(self) -> Vec<String> {
        self.hits
    }
}

/// Extract best hit descriptions from report content
pub fn parse_str(text: &str) -> Vec<String> {
    let mut parser = Parser::new();

    for line in text.lines() {
        parser.feed(line);
    }

    parser.finish()
}

/// Extract best hit descriptions from report file indicate by path
pub fn parse<P>(path: P) -> error::Result<Vec<String>>
where
    P: AsRef<std::path::Path>,
{
    let input = input::Input::open(path.as_ref())?;

    let mut parser = Parser::new();
    for line in input.lines() {
        parser.feed(&line);
    }

    let hits = parser.finish();
    log::info!(
        "found {} best hits in {}",
        hits.len(),
        path.as_ref().display()
    );

    Ok(hits)
}
