mod base;
mod reminder;
mod status;
mod user;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
use reminder::ReminderClient;
use status::StatusClient;
use std::sync::Arc;
use user::UserClient;
pub use user::CreateUserInput;

pub use arbor_alert_api_structs::dtos::ReminderDTO as Reminder;
pub use arbor_alert_api_structs::dtos::UserDTO as User;
pub use arbor_alert_domain::{NaiveDate, ID};
pub use reqwest::StatusCode;

/// Arbor Alert SDK
///
/// The SDK contains methods for interacting with the Arbor Alert server
/// API. It is what the chat bridge uses to forward commands.
#[derive(Clone)]
pub struct ArborAlertSDK {
    pub reminder: ReminderClient,
    pub status: StatusClient,
    pub user: UserClient,
}

impl ArborAlertSDK {
    pub fn new<T: Into<String>>(address: String, api_key: T) -> Self {
        let mut base = BaseClient::new(address);
        base.set_api_key(api_key.into());
        let base = Arc::new(base);

        Self {
            reminder: ReminderClient::new(base.clone()),
            status: StatusClient::new(base.clone()),
            user: UserClient::new(base),
        }
    }
}
