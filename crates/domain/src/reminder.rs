use crate::{assignment::AssignmentRecord, date::start_of_day_millis, shared::entity::ID};
use chrono::{Days, NaiveDate};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// A `Reminder` represents the day on which a `User` should be told about
/// an upcoming assignment deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    /// The `User` which should receive a direct message on `reminder_date`
    pub user_id: ID,
    /// `"<subject code>: <title>"`, or the raw title line for assignments
    /// without a subject code
    pub assignment_label: String,
    pub due_date: NaiveDate,
    /// Always `due_date` minus the users lead days
    pub reminder_date: NaiveDate,
    /// Sent reminders are history and never rescheduled
    pub sent: bool,
}

/// How many days before the deadline a user wants to be reminded
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LeadDays(u32);

impl LeadDays {
    pub fn new(days: u32) -> Self {
        Self(days)
    }

    pub fn days(&self) -> u32 {
        self.0
    }
}

impl Default for LeadDays {
    fn default() -> Self {
        Self(1)
    }
}

impl Reminder {
    /// `None` when the lead time reaches before the start of the calendar
    pub fn for_assignment(
        user_id: &ID,
        assignment: &AssignmentRecord,
        lead_days: LeadDays,
    ) -> Option<Self> {
        let reminder_date = assignment
            .due_date
            .checked_sub_days(Days::new(lead_days.days() as u64))?;
        Some(Self {
            user_id: user_id.clone(),
            assignment_label: assignment.label(),
            due_date: assignment.due_date,
            reminder_date,
            sent: false,
        })
    }

    /// Whether this reminder is the one identified by the sent marking key
    pub fn matches(&self, user_id: &ID, assignment_label: &str, due_date: &NaiveDate) -> bool {
        self.user_id == *user_id
            && self.assignment_label == assignment_label
            && self.due_date == *due_date
    }
}

/// Computes the pending reminders for a fresh batch of assignments.
///
/// Reminders whose day does not start strictly after `now_millis` (in `tz`)
/// are dropped, there is no point in scheduling something that should
/// already have fired.
pub fn plan_reminders(
    user_id: &ID,
    assignments: &[AssignmentRecord],
    lead_days: LeadDays,
    now_millis: i64,
    tz: &Tz,
) -> Vec<Reminder> {
    assignments
        .iter()
        .filter_map(|assignment| Reminder::for_assignment(user_id, assignment, lead_days))
        .filter(|reminder| start_of_day_millis(&reminder.reminder_date, tz) > now_millis)
        .collect()
}
