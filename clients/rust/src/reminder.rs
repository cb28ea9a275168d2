use crate::{APIResponse, BaseClient};
use arbor_alert_api_structs::get_pending_reminders;
use arbor_alert_domain::ID;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get_pending(
        &self,
        user_id: &ID,
    ) -> APIResponse<get_pending_reminders::APIResponse> {
        self.base
            .get(format!("user/{}/reminders", user_id), StatusCode::OK)
            .await
    }
}
