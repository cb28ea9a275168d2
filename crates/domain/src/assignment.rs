use chrono::NaiveDate;

/// An assignment as it was read out of the portal listing.
///
/// Lives only for the duration of one extraction run, it is turned into
/// `Reminder`s right away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentRecord {
    /// Subject path like `7X/Ar`. Absent for the legacy layout where the
    /// whole line is the title.
    pub subject_code: Option<String>,
    pub title: String,
    pub due_date: NaiveDate,
}

impl AssignmentRecord {
    /// The label reminders are stored and delivered under
    pub fn label(&self) -> String {
        match &self.subject_code {
            Some(code) => format!("{}: {}", code, self.title),
            None => self.title.clone(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn record(code: Option<&str>, title: &str) -> AssignmentRecord {
        AssignmentRecord {
            subject_code: code.map(String::from),
            title: title.into(),
            due_date: NaiveDate::from_ymd_opt(2025, 2, 25).expect("Valid date"),
        }
    }

    #[test]
    fn it_labels_records() {
        assert_eq!(
            record(Some("7X/Ar"), "Mask evaluation").label(),
            "7X/Ar: Mask evaluation"
        );
        assert_eq!(
            record(None, "Geography project - build a volcano").label(),
            "Geography project - build a volcano"
        );
    }
}
