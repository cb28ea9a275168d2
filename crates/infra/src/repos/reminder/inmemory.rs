use super::IReminderRepo;
use crate::repos::shared::{inmemory_repo::*, repo::DeleteResult};
use arbor_alert_domain::{NaiveDate, Reminder, ID};

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        insert(reminder, &self.reminders);
        Ok(())
    }

    async fn delete_pending_by_user(&self, user_id: &ID) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.reminders, |r| r.user_id == *user_id && !r.sent))
    }

    async fn replace_pending(&self, user_id: &ID, reminders: &[Reminder]) -> anyhow::Result<()> {
        // Single lock scope so nobody sees the emptied set
        let mut collection = self.reminders.lock().unwrap();
        collection.retain(|r| r.user_id != *user_id || r.sent);
        collection.extend(reminders.iter().cloned());
        Ok(())
    }

    async fn find_pending_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Reminder>> {
        let mut reminders = find_by(&self.reminders, |r| r.user_id == *user_id && !r.sent);
        reminders.sort_by(|r1, r2| r1.due_date.cmp(&r2.due_date));
        Ok(reminders)
    }

    async fn find_due(&self, date: &NaiveDate) -> anyhow::Result<Vec<Reminder>> {
        Ok(find_by(&self.reminders, |r| r.reminder_date == *date && !r.sent))
    }

    async fn mark_sent(
        &self,
        user_id: &ID,
        assignment_label: &str,
        due_date: &NaiveDate,
    ) -> anyhow::Result<()> {
        update_many(
            &self.reminders,
            |r| r.matches(user_id, assignment_label, due_date),
            |r| r.sent = true,
        );
        Ok(())
    }

    async fn delete_by_user(&self, user_id: &ID) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.reminders, |r| r.user_id == *user_id))
    }
}
