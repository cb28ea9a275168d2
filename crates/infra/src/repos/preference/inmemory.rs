use super::IPreferenceRepo;
use arbor_alert_domain::{LeadDays, ID};
use std::{collections::HashMap, sync::Mutex};

pub struct InMemoryPreferenceRepo {
    lead_days: Mutex<HashMap<ID, LeadDays>>,
}

impl InMemoryPreferenceRepo {
    pub fn new() -> Self {
        Self {
            lead_days: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait::async_trait]
impl IPreferenceRepo for InMemoryPreferenceRepo {
    async fn get_lead_days(&self, user_id: &ID) -> anyhow::Result<LeadDays> {
        let lead_days = self.lead_days.lock().unwrap();
        Ok(lead_days.get(user_id).copied().unwrap_or_default())
    }

    async fn set_lead_days(&self, user_id: &ID, lead_days: LeadDays) -> anyhow::Result<()> {
        self.lead_days
            .lock()
            .unwrap()
            .insert(user_id.clone(), lead_days);
        Ok(())
    }

    async fn delete(&self, user_id: &ID) -> anyhow::Result<()> {
        self.lead_days.lock().unwrap().remove(user_id);
        Ok(())
    }
}
