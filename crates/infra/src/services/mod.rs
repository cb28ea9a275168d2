mod cipher;
mod notifier;
mod scraper;
mod user_locks;

pub use cipher::CredentialCipher;
pub use notifier::{INotifier, WebhookNotifier};
pub use scraper::{HttpScraper, IScraper};
pub use user_locks::UserLocks;
