use fernet::Fernet;
use std::sync::Arc;
use tracing::warn;

/// Symmetric encryption of portal passwords at rest.
///
/// Tokens are standard Fernet tokens, so databases written by earlier
/// deployments that used the same `KEY` stay readable.
#[derive(Clone)]
pub struct CredentialCipher {
    fernet: Arc<Fernet>,
}

impl CredentialCipher {
    pub fn new(key: &str) -> anyhow::Result<Self> {
        let fernet = Fernet::new(key)
            .ok_or_else(|| anyhow::anyhow!("The given KEY is not a valid Fernet key"))?;
        Ok(Self {
            fernet: Arc::new(fernet),
        })
    }

    /// Reads the key from the `KEY` environment variable
    pub fn from_env() -> anyhow::Result<Self> {
        match std::env::var("KEY") {
            Ok(key) => Self::new(&key),
            Err(_) => {
                warn!("Did not find KEY environment variable. Stored passwords will not be readable after a restart.");
                Ok(Self::generate())
            }
        }
    }

    pub fn generate() -> Self {
        let fernet = Fernet::new(&Fernet::generate_key())
            .expect("Generated Fernet key to be valid");
        Self {
            fernet: Arc::new(fernet),
        }
    }

    pub fn encrypt(&self, plain: &str) -> String {
        self.fernet.encrypt(plain.as_bytes())
    }

    pub fn decrypt(&self, token: &str) -> anyhow::Result<String> {
        let plain = self
            .fernet
            .decrypt(token)
            .map_err(|_| anyhow::anyhow!("Unable to decrypt stored password"))?;
        Ok(String::from_utf8(plain)?)
    }
}
