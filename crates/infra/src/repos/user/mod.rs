mod inmemory;
mod postgres;

use arbor_alert_domain::{User, ID};
pub use inmemory::InMemoryUserRepo;
pub use postgres::PostgresUserRepo;

#[async_trait::async_trait]
pub trait IUserRepo: Send + Sync {
    async fn insert(&self, user: &User) -> anyhow::Result<()>;
    async fn save(&self, user: &User) -> anyhow::Result<()>;
    async fn delete(&self, user_id: &ID) -> anyhow::Result<Option<User>>;
    async fn find(&self, user_id: &ID) -> anyhow::Result<Option<User>>;
    async fn find_all_ids(&self) -> anyhow::Result<Vec<ID>>;
}
