use crate::shared::entity::{Entity, ID};

/// A chat platform user that has handed us their portal login
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: ID,
    /// Portal login name, usually an email address
    pub username: String,
    /// Fernet token of the portal password, never stored in plain text
    pub encrypted_password: String,
}

impl User {
    pub fn new(id: ID, username: String, encrypted_password: String) -> Self {
        Self {
            id,
            username,
            encrypted_password,
        }
    }
}

impl Entity for User {
    fn id(&self) -> &ID {
        &self.id
    }
}
