use arbor_alert_domain::{NaiveDate, Reminder};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub assignment_label: String,
    pub due_date: NaiveDate,
    pub reminder_date: NaiveDate,
    pub sent: bool,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            assignment_label: reminder.assignment_label,
            due_date: reminder.due_date,
            reminder_date: reminder.reminder_date,
            sent: reminder.sent,
        }
    }
}
