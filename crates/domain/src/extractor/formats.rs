use crate::date::DateGrammar;
use regex::Regex;
use std::sync::OnceLock;

/// Index based cursor over the trimmed listing lines.
///
/// Formats can look ahead, and report how many lines they own, so a
/// consumed due date line is never looked at again.
pub(super) struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(listing: &'a str) -> Self {
        Self {
            lines: listing.lines().map(str::trim).collect(),
            pos: 0,
        }
    }

    pub fn current(&self) -> Option<&'a str> {
        self.peek(0)
    }

    pub fn peek(&self, offset: usize) -> Option<&'a str> {
        self.lines.get(self.pos + offset).copied()
    }

    pub fn advance(&mut self, count: usize) {
        self.pos += count.max(1);
    }
}

/// State carried between lines of one extraction run
#[derive(Debug, Default)]
pub(super) struct ParserState {
    /// Legacy title line waiting for its due date line
    pub held_title: Option<String>,
}

/// A matched assignment whose date has not been parsed yet
#[derive(Debug, PartialEq)]
pub(super) struct Candidate {
    pub subject_code: Option<String>,
    pub title: String,
    pub raw_date: String,
    /// Lines owned by this candidate, starting at the cursor
    pub consumed: usize,
}

type Matcher = fn(&LineCursor<'_>, &mut ParserState) -> Option<Candidate>;

pub(super) struct LineFormat {
    pub name: &'static str,
    pub grammar: DateGrammar,
    matcher: Matcher,
}

impl LineFormat {
    pub fn try_match(
        &self,
        cursor: &LineCursor<'_>,
        state: &mut ParserState,
    ) -> Option<Candidate> {
        (self.matcher)(cursor, state)
    }
}

/// Tried in this order for every line, first match wins
pub(super) const FORMATS: [LineFormat; 3] = [
    LineFormat {
        name: "inline",
        grammar: DateGrammar::DayMonthName,
        matcher: match_inline,
    },
    LineFormat {
        name: "split",
        grammar: DateGrammar::Iso,
        matcher: match_split,
    },
    LineFormat {
        name: "legacy",
        grammar: DateGrammar::DayMonthYearSlashed,
        matcher: match_legacy,
    },
];

fn inline_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\w+/\w+):\s+(.+?)\s*\(Due\s+(\d{1,2}\s+[A-Za-z]{3}\s+\d{4})\)")
            .expect("Inline assignment pattern to compile")
    })
}

fn subject_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\w+/\w+):\s+(.+?)$").expect("Subject line pattern to compile")
    })
}

fn iso_due_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^Due:\s+(\d{4}-\d{2}-\d{2})$").expect("ISO due pattern to compile")
    })
}

fn legacy_due_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"Due:\s+(\d{1,2}/\d{1,2}/\d{4})").expect("Legacy due pattern to compile")
    })
}

// 7X/Ar: Mask evaluation  (Due 25 Feb 2025)
fn match_inline(cursor: &LineCursor<'_>, _state: &mut ParserState) -> Option<Candidate> {
    let caps = inline_re().captures(cursor.current()?)?;
    Some(Candidate {
        subject_code: Some(caps[1].to_string()),
        title: caps[2].to_string(),
        raw_date: caps[3].to_string(),
        consumed: 1,
    })
}

// 7X/Pc: Spring Term Hmk Project
// Due: 2025-04-03
fn match_split(cursor: &LineCursor<'_>, _state: &mut ParserState) -> Option<Candidate> {
    let subject = subject_line_re().captures(cursor.current()?)?;
    let due = iso_due_re().captures(cursor.peek(1)?)?;
    Some(Candidate {
        subject_code: Some(subject[1].to_string()),
        title: subject[2].to_string(),
        raw_date: due[1].to_string(),
        consumed: 2,
    })
}

// Geography project - build a volcano
// Due: 03/04/2025
fn match_legacy(cursor: &LineCursor<'_>, state: &mut ParserState) -> Option<Candidate> {
    let line = cursor.current()?;
    if line.contains(" - ") && !line.starts_with("Due") && !line.starts_with("Set") {
        state.held_title = Some(line.to_string());
    }

    let due = legacy_due_re().captures(line)?;
    let title = match state.held_title.take() {
        Some(title) => title,
        None => {
            tracing::debug!("Dropping due date line without a held title: {}", line);
            return None;
        }
    };
    Some(Candidate {
        subject_code: None,
        title,
        raw_date: due[1].to_string(),
        consumed: 1,
    })
}
