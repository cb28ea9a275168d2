use arbor_alert_domain::{LeadDays, User, ID};
use serde::{Deserialize, Serialize};

/// A user as shown to the chat bridge, the password never leaves the server
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDTO {
    pub id: ID,
    pub username: String,
    pub lead_days: u32,
}

impl UserDTO {
    pub fn new(user: User, lead_days: LeadDays) -> Self {
        Self {
            id: user.id,
            username: user.username,
            lead_days: lead_days.days(),
        }
    }
}
