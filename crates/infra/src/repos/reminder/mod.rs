mod inmemory;
mod postgres;

use crate::repos::shared::repo::DeleteResult;
use arbor_alert_domain::{NaiveDate, Reminder, ID};
pub use inmemory::InMemoryReminderRepo;
pub use postgres::PostgresReminderRepo;

/// Storage of reminders.
///
/// Reconciliation goes through `replace_pending` only. `insert` and
/// `delete_pending_by_user` are the single step building blocks, used for
/// seeding and maintenance.
#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()>;
    /// Removes every reminder of the user that has not been sent yet
    async fn delete_pending_by_user(&self, user_id: &ID) -> anyhow::Result<DeleteResult>;
    /// Swaps the unsent reminders of the user for `reminders` in one go.
    /// Readers never observe the set half replaced, and on failure the
    /// previous set is left in place.
    async fn replace_pending(&self, user_id: &ID, reminders: &[Reminder]) -> anyhow::Result<()>;
    /// Unsent reminders of the user, earliest due date first
    async fn find_pending_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Reminder>>;
    /// Unsent reminders of every user that should fire on `date`
    async fn find_due(&self, date: &NaiveDate) -> anyhow::Result<Vec<Reminder>>;
    async fn mark_sent(
        &self,
        user_id: &ID,
        assignment_label: &str,
        due_date: &NaiveDate,
    ) -> anyhow::Result<()>;
    /// Removes sent and unsent reminders of the user
    async fn delete_by_user(&self, user_id: &ID) -> anyhow::Result<DeleteResult>;
}
