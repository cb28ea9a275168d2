use super::IUserRepo;
use crate::repos::shared::inmemory_repo::*;
use arbor_alert_domain::{Entity, User, ID};

pub struct InMemoryUserRepo {
    users: std::sync::Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            users: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for InMemoryUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        insert(user, &self.users);
        Ok(())
    }

    async fn save(&self, user: &User) -> anyhow::Result<()> {
        if !save(user, &self.users) {
            anyhow::bail!("No user with id: {} to save", user.id);
        }
        Ok(())
    }

    async fn delete(&self, user_id: &ID) -> anyhow::Result<Option<User>> {
        Ok(delete(user_id, &self.users))
    }

    async fn find(&self, user_id: &ID) -> anyhow::Result<Option<User>> {
        Ok(find(user_id, &self.users))
    }

    async fn find_all_ids(&self) -> anyhow::Result<Vec<ID>> {
        Ok(find_by(&self.users, |_| true)
            .iter()
            .map(|user| user.id().clone())
            .collect())
    }
}
