use std::fmt::Debug;
use thiserror::Error;

/// Decrypted portal login, only kept around for a single scrape
#[derive(Clone, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScrapeError {
    #[error("No credentials found for this user")]
    MissingCredentials,
    #[error("Unable to log in to the portal: {0}")]
    Login(String),
    #[error("The portal page did not have the expected structure: {0}")]
    PageStructure(String),
    #[error("Timed out waiting for the portal")]
    Timeout,
    #[error("Network error talking to the portal: {0}")]
    Network(String),
}
