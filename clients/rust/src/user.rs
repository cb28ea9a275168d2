use crate::{APIResponse, BaseClient};
use arbor_alert_api_structs::*;
use arbor_alert_domain::ID;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct UserClient {
    base: Arc<BaseClient>,
}

pub struct CreateUserInput {
    pub user_id: ID,
    pub username: String,
    pub password: String,
}

impl UserClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Stores the portal login, also used to change the login of a user
    pub async fn create(&self, input: CreateUserInput) -> APIResponse<create_user::APIResponse> {
        let body = create_user::RequestBody {
            user_id: input.user_id,
            username: input.username,
            password: input.password,
        };

        self.base
            .post(body, "user".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get(&self, user_id: &ID) -> APIResponse<get_user::APIResponse> {
        self.base
            .get(format!("user/{}", user_id), StatusCode::OK)
            .await
    }

    pub async fn delete(&self, user_id: &ID) -> APIResponse<delete_user::APIResponse> {
        self.base
            .delete(format!("user/{}", user_id), StatusCode::OK)
            .await
    }

    pub async fn set_lead_days(
        &self,
        user_id: &ID,
        lead_days: i64,
    ) -> APIResponse<set_lead_days::APIResponse> {
        let body = set_lead_days::RequestBody { lead_days };

        self.base
            .put(body, format!("user/{}/lead-days", user_id), StatusCode::OK)
            .await
    }

    /// Starts a fetch of the users assignments, the outcome is sent to the
    /// user as a direct message
    pub async fn fetch_assignments(
        &self,
        user_id: &ID,
    ) -> APIResponse<fetch_assignments::APIResponse> {
        self.base
            .post(
                (),
                format!("user/{}/fetch", user_id),
                StatusCode::ACCEPTED,
            )
            .await
    }
}
