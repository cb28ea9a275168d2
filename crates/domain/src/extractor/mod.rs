//! Turns the scraped portal page into `AssignmentRecord`s.
//!
//! The page text is loosely structured and has changed layout over time,
//! three line formats are supported:
//!
//! ```text
//! 7X/Ar: Mask evaluation  (Due 25 Feb 2025)
//!
//! 7X/Pc: Spring Term Hmk Project
//! Due: 2025-04-03
//!
//! Geography project - build a volcano
//! Due: 03/04/2025
//! ```
mod formats;
mod section;

use crate::assignment::AssignmentRecord;
use formats::{LineCursor, ParserState, FORMATS};
use tracing::warn;

pub use section::{SectionNotFoundError, END_MARKER, START_MARKER};

/// Extracts every assignment from the raw page text, in page order.
///
/// Only a missing listing section is an error. Lines that look like an
/// assignment but carry an unparseable date are logged and skipped.
pub fn extract(raw_text: &str) -> Result<Vec<AssignmentRecord>, SectionNotFoundError> {
    let section = section::assignment_section(raw_text)?;
    Ok(parse_listing(&section::strip_due_heading(section)))
}

/// Parses an already isolated assignment listing
pub fn parse_listing(listing: &str) -> Vec<AssignmentRecord> {
    let mut cursor = LineCursor::new(listing);
    let mut state = ParserState::default();
    let mut records = Vec::new();

    while let Some(line) = cursor.current() {
        if line.is_empty() {
            cursor.advance(1);
            continue;
        }

        let mut consumed = 1;
        for format in &FORMATS {
            let candidate = match format.try_match(&cursor, &mut state) {
                Some(candidate) => candidate,
                None => continue,
            };
            consumed = candidate.consumed;
            match format.grammar.parse(&candidate.raw_date) {
                Ok(due_date) => records.push(AssignmentRecord {
                    subject_code: candidate.subject_code,
                    title: candidate.title,
                    due_date,
                }),
                Err(e) => warn!("Skipping {} assignment line `{}`: {}", format.name, line, e),
            }
            break;
        }
        cursor.advance(consumed);
    }

    records
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("Valid date")
    }

    fn page(listing: &str) -> String {
        format!(
            "Dashboard\nWelcome back\n{}\n{}\n{}\nEssay - old one\nDue: 01/01/2024",
            START_MARKER, listing, END_MARKER
        )
    }

    #[test]
    fn it_extracts_inline_format() {
        let records = parse_listing("7X/Ar: Mask evaluation  (Due 25 Feb 2025)");
        assert_eq!(
            records,
            vec![AssignmentRecord {
                subject_code: Some("7X/Ar".into()),
                title: "Mask evaluation".into(),
                due_date: ymd(2025, 2, 25),
            }]
        );
    }

    #[test]
    fn it_extracts_split_format_and_consumes_both_lines() {
        let records = parse_listing(
            "7X/Pc: Spring Term Hmk Project\nDue: 2025-04-03\nDue: 2025-05-01",
        );
        assert_eq!(
            records,
            vec![AssignmentRecord {
                subject_code: Some("7X/Pc".into()),
                title: "Spring Term Hmk Project".into(),
                due_date: ymd(2025, 4, 3),
            }]
        );
    }

    #[test]
    fn it_extracts_legacy_format() {
        let records = parse_listing("Geography project - build a volcano\nDue: 03/04/2025");
        assert_eq!(
            records,
            vec![AssignmentRecord {
                subject_code: None,
                title: "Geography project - build a volcano".into(),
                due_date: ymd(2025, 4, 3),
            }]
        );
    }

    #[test]
    fn it_extracts_mixed_listing_in_page_order() {
        let raw = page(
            "7X/Ar: Mask evaluation  (Due 25 Feb 2025)\n\
             Assignments that are due\n\
             \n\
             7X/Pc: Spring Term Hmk Project\n\
             Due: 2025-04-03\n\
             Geography project - build a volcano\n\
             Set: 01/03/2025\n\
             Due: 03/04/2025\n\
             7X/Ma: Algebra worksheet  (Due 4 Mar 2025)",
        );
        let records = extract(&raw).expect("Section to be found");
        let labels = records.iter().map(|r| r.label()).collect::<Vec<_>>();
        assert_eq!(
            labels,
            vec![
                "7X/Ar: Mask evaluation",
                "7X/Pc: Spring Term Hmk Project",
                "Geography project - build a volcano",
                "7X/Ma: Algebra worksheet",
            ]
        );
        assert_eq!(records[3].due_date, ymd(2025, 3, 4));
    }

    #[test]
    fn it_ignores_assignments_outside_the_section() {
        let records = extract(&page("")).expect("Section to be found");
        assert!(records.is_empty());
    }

    #[test]
    fn it_fails_when_start_marker_is_missing() {
        let raw = "Assignments that are due\n7X/Ar: Mask evaluation  (Due 25 Feb 2025)\nSubmitted Assignments";
        assert_eq!(
            extract(raw),
            Err(SectionNotFoundError {
                marker: START_MARKER
            })
        );
    }

    #[test]
    fn bad_dates_only_skip_their_line() {
        let records = parse_listing(
            "7X/Ar: Mask evaluation  (Due 31 Feb 2025)\n\
             7X/Pc: Spring Term Hmk Project\n\
             Due: 2025-13-03\n\
             Geography project - build a volcano\n\
             Due: 31/04/2025\n\
             7X/Ma: Algebra worksheet  (Due 4 Mar 2025)",
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].label(), "7X/Ma: Algebra worksheet");
    }

    #[test]
    fn subject_line_without_due_line_falls_back_to_legacy() {
        let records = parse_listing("7X/Hi: Castles - draw a keep\nDue: 10/03/2025");
        assert_eq!(
            records,
            vec![AssignmentRecord {
                subject_code: None,
                title: "7X/Hi: Castles - draw a keep".into(),
                due_date: ymd(2025, 3, 10),
            }]
        );
    }

    #[test]
    fn stray_legacy_due_line_is_dropped() {
        let records = parse_listing(
            "7X/Ar: Mask evaluation  (Due 25 Feb 2025)\nDue: 03/04/2025",
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].due_date, ymd(2025, 2, 25));
    }
}
