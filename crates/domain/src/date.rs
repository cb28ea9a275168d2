use chrono::prelude::*;
use chrono_tz::Tz;
use thiserror::Error;

/// The date layouts the assignment portal has been observed to print.
/// Each grammar is parsed with its own exact format, there is no guessing
/// between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateGrammar {
    /// `25 Feb 2025`
    DayMonthName,
    /// `2025-04-03`
    Iso,
    /// `03/04/2025`, day first
    DayMonthYearSlashed,
}

#[derive(Error, Debug, PartialEq)]
#[error("Could not parse date `{input}` as {grammar:?}")]
pub struct DateParseError {
    pub input: String,
    pub grammar: DateGrammar,
}

impl DateGrammar {
    fn format(&self) -> &'static str {
        match self {
            Self::DayMonthName => "%d %b %Y",
            Self::Iso => "%Y-%m-%d",
            Self::DayMonthYearSlashed => "%d/%m/%Y",
        }
    }

    pub fn parse(&self, datestr: &str) -> Result<NaiveDate, DateParseError> {
        // The portal sometimes pads with more than one space
        let normalized = datestr.split_whitespace().collect::<Vec<_>>().join(" ");
        NaiveDate::parse_from_str(&normalized, self.format()).map_err(|_| DateParseError {
            input: datestr.to_string(),
            grammar: *self,
        })
    }
}

/// Canonical storage form for calendar dates
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// The calendar date in `tz` at the given timestamp
pub fn date_at(timestamp_millis: i64, tz: &Tz) -> NaiveDate {
    let utc = Utc
        .timestamp_millis_opt(timestamp_millis)
        .single()
        .unwrap_or_else(Utc::now);
    utc.with_timezone(tz).date_naive()
}

/// Timestamp of the first moment of `date` in `tz`.
/// Days starting inside a DST gap resolve to the earliest valid instant.
pub fn start_of_day_millis(date: &NaiveDate, tz: &Tz) -> i64 {
    let midnight = date.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&midnight) {
        chrono::LocalResult::Single(dt) => dt.timestamp_millis(),
        chrono::LocalResult::Ambiguous(earliest, _) => earliest.timestamp_millis(),
        chrono::LocalResult::None => (midnight + chrono::Duration::hours(1))
            .and_local_timezone(*tz)
            .earliest()
            .map(|dt| dt.timestamp_millis())
            .unwrap_or_else(|| midnight.and_utc().timestamp_millis()),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("Valid date")
    }

    #[test]
    fn it_parses_each_grammar() {
        assert_eq!(
            DateGrammar::DayMonthName.parse("25 Feb 2025"),
            Ok(ymd(2025, 2, 25))
        );
        assert_eq!(
            DateGrammar::DayMonthName.parse("3  Mar 2025"),
            Ok(ymd(2025, 3, 3))
        );
        assert_eq!(DateGrammar::Iso.parse("2025-04-03"), Ok(ymd(2025, 4, 3)));
        assert_eq!(
            DateGrammar::DayMonthYearSlashed.parse("03/04/2025"),
            Ok(ymd(2025, 4, 3))
        );
        assert_eq!(
            DateGrammar::DayMonthYearSlashed.parse("3/4/2025"),
            Ok(ymd(2025, 4, 3))
        );
    }

    #[test]
    fn it_rejects_invalid_dates() {
        let invalid = vec![
            (DateGrammar::DayMonthName, "30 Feb 2025"),
            (DateGrammar::DayMonthName, "12 Foo 2025"),
            (DateGrammar::Iso, "2025-13-01"),
            (DateGrammar::Iso, "03/04/2025"),
            (DateGrammar::DayMonthYearSlashed, "31/04/2025"),
            (DateGrammar::DayMonthYearSlashed, "2025-04-03"),
        ];

        for (grammar, date) in &invalid {
            assert!(grammar.parse(date).is_err(), "{:?} {}", grammar, date);
        }
    }

    #[test]
    fn it_formats_iso() {
        assert_eq!(format_date(&ymd(2025, 2, 5)), "2025-02-05");
    }

    #[test]
    fn it_computes_local_dates() {
        // 2025-03-01T23:30:00Z
        let ts = 1740871800000;
        assert_eq!(date_at(ts, &Tz::UTC), ymd(2025, 3, 1));
        assert_eq!(date_at(ts, &chrono_tz::Europe::Oslo), ymd(2025, 3, 2));
    }

    #[test]
    fn it_computes_start_of_day() {
        let date = ymd(2025, 3, 2);
        assert_eq!(start_of_day_millis(&date, &Tz::UTC), 1740873600000);
        assert_eq!(
            start_of_day_millis(&date, &chrono_tz::Europe::Oslo),
            1740873600000 - 60 * 60 * 1000
        );
    }
}
