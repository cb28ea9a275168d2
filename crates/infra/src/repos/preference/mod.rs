mod inmemory;
mod postgres;

use arbor_alert_domain::{LeadDays, ID};
pub use inmemory::InMemoryPreferenceRepo;
pub use postgres::PostgresPreferenceRepo;

/// Per user reminder preferences. A user without a stored preference
/// gets the default lead time.
#[async_trait::async_trait]
pub trait IPreferenceRepo: Send + Sync {
    async fn get_lead_days(&self, user_id: &ID) -> anyhow::Result<LeadDays>;
    /// Creates the preference on first use
    async fn set_lead_days(&self, user_id: &ID, lead_days: LeadDays) -> anyhow::Result<()>;
    async fn delete(&self, user_id: &ID) -> anyhow::Result<()>;
}
