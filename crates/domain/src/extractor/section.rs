use thiserror::Error;

/// Heading printed right above the overdue and due assignments
pub const START_MARKER: &str = "Overdue Assignments";
/// Heading of the section following the listing we care about
pub const END_MARKER: &str = "Submitted Assignments";
/// Sub heading between the overdue and the upcoming assignments
const DUE_HEADING: &str = "Assignments that are due";

#[derive(Error, Debug, PartialEq)]
#[error("Assignment section not found, missing marker: `{marker}`")]
pub struct SectionNotFoundError {
    pub marker: &'static str,
}

/// Cuts the assignment listing out of the full page text.
///
/// The end marker has to come after the start marker, a page where it only
/// appears earlier is treated as if it was missing.
pub fn assignment_section(raw_text: &str) -> Result<&str, SectionNotFoundError> {
    let start = raw_text.find(START_MARKER).ok_or(SectionNotFoundError {
        marker: START_MARKER,
    })?;
    let body_start = start + START_MARKER.len();
    let end = raw_text[body_start..]
        .find(END_MARKER)
        .map(|offset| body_start + offset)
        .ok_or(SectionNotFoundError { marker: END_MARKER })?;

    let section = raw_text[body_start..end].trim();
    Ok(section.strip_prefix(':').unwrap_or(section).trim())
}

/// Drops the first upcoming-assignments sub heading from the listing
pub fn strip_due_heading(section: &str) -> String {
    section.replacen(DUE_HEADING, "", 1).trim().to_string()
}
