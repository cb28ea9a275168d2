mod config;
mod repos;
mod services;
mod system;

pub use config::{Config, NotifierConfig, PortalConfig};
pub use repos::{DeleteResult, IPreferenceRepo, IReminderRepo, IUserRepo, Repos};
pub use services::*;
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};
use tracing::info;

#[derive(Clone)]
pub struct ArborContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub scraper: Arc<dyn IScraper>,
    pub notifier: Arc<dyn INotifier>,
    pub cipher: CredentialCipher,
    pub user_locks: UserLocks,
}

struct ContextParams {
    pub postgres_connection_string: Option<String>,
}

impl ArborContext {
    async fn create(params: ContextParams) -> anyhow::Result<Self> {
        let repos = match params.postgres_connection_string {
            Some(connection_string) => Repos::create_postgres(&connection_string).await?,
            None => {
                info!("DATABASE_URL is not set, users and reminders are only kept in memory.");
                Repos::create_inmemory()
            }
        };
        let config = Config::new();
        Ok(Self {
            repos,
            sys: Arc::new(RealSys {}),
            scraper: Arc::new(HttpScraper::new(config.portal.clone())),
            notifier: Arc::new(WebhookNotifier::new(config.notifier.clone())),
            cipher: CredentialCipher::from_env()?,
            user_locks: UserLocks::new(),
            config,
        })
    }

    /// Context backed by in-memory repos. Collaborators can be swapped out
    /// afterwards since every field is public.
    pub fn create_inmemory() -> Self {
        let config = Config::new();
        Self {
            repos: Repos::create_inmemory(),
            sys: Arc::new(RealSys {}),
            scraper: Arc::new(HttpScraper::new(config.portal.clone())),
            notifier: Arc::new(WebhookNotifier::new(config.notifier.clone())),
            cipher: CredentialCipher::generate(),
            user_locks: UserLocks::new(),
            config,
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<ArborContext> {
    ArborContext::create(ContextParams {
        postgres_connection_string: std::env::var("DATABASE_URL").ok(),
    })
    .await
}
