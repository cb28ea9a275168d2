use arbor_alert_domain::{Credentials, ScrapeError, ID};
use arbor_alert_infra::{INotifier, IScraper};
use std::sync::Mutex;
use std::time::Duration;

/// Serves a fixed portal page instead of logging in anywhere
#[derive(Default)]
pub struct FakeScraper {
    pub page: Mutex<Option<String>>,
}

#[async_trait::async_trait]
impl IScraper for FakeScraper {
    async fn fetch_raw_assignment_text(
        &self,
        _credentials: &Credentials,
    ) -> Result<String, ScrapeError> {
        self.page
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ScrapeError::Login("invalid password".into()))
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: Mutex<Vec<(ID, String)>>,
}

#[async_trait::async_trait]
impl INotifier for RecordingNotifier {
    async fn send_direct_message(&self, user_id: &ID, content: &str) -> anyhow::Result<()> {
        self.messages
            .lock()
            .unwrap()
            .push((user_id.clone(), content.to_string()));
        Ok(())
    }
}

impl RecordingNotifier {
    /// Waits for the background fetch to report back
    pub async fn wait_for_message(&self) -> Option<(ID, String)> {
        for _ in 0..100 {
            if let Some(message) = self.messages.lock().unwrap().last().cloned() {
                return Some(message);
            }
            actix_web::rt::time::sleep(Duration::from_millis(10)).await;
        }
        None
    }
}

pub fn portal_page(listing: &str) -> String {
    format!(
        "Dashboard\nOverdue Assignments\n{}\nSubmitted Assignments",
        listing
    )
}
