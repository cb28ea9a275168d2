use crate::config::PortalConfig;
use arbor_alert_domain::{Credentials, ScrapeError};
use reqwest::{Client, StatusCode};
use tracing::{debug, info};

// Wide enough that html2text never wraps an assignment line
const TEXT_WIDTH: usize = 10_000;

/// Anything that can hand back the visible text of a users assignment page
#[async_trait::async_trait]
pub trait IScraper: Send + Sync {
    async fn fetch_raw_assignment_text(
        &self,
        credentials: &Credentials,
    ) -> Result<String, ScrapeError>;
}

/// Logs in to the school portal with a plain form post and renders the
/// assignment page to text.
///
/// Every fetch gets its own cookie jar so sessions of different users
/// never mix.
pub struct HttpScraper {
    config: PortalConfig,
}

impl HttpScraper {
    pub fn new(config: PortalConfig) -> Self {
        Self { config }
    }

    fn client(&self) -> Result<Client, ScrapeError> {
        Client::builder()
            .cookie_store(true)
            .timeout(self.config.timeout)
            .build()
            .map_err(|e| ScrapeError::Network(format!("failed to build HTTP client: {}", e)))
    }
}

fn map_request_error(e: reqwest::Error) -> ScrapeError {
    if e.is_timeout() {
        ScrapeError::Timeout
    } else {
        ScrapeError::Network(e.to_string())
    }
}

fn is_rejected(status: StatusCode) -> bool {
    status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN
}

#[async_trait::async_trait]
impl IScraper for HttpScraper {
    async fn fetch_raw_assignment_text(
        &self,
        credentials: &Credentials,
    ) -> Result<String, ScrapeError> {
        let (login_url, assignments_url) =
            match (&self.config.login_url, &self.config.assignments_url) {
                (Some(login), Some(assignments)) => (login.clone(), assignments.clone()),
                _ => {
                    return Err(ScrapeError::Network(
                        "the portal urls are not configured".into(),
                    ))
                }
            };
        let client = self.client()?;

        debug!("Logging in to the portal as {}", credentials.username);
        let login = client
            .post(login_url)
            .form(&[
                ("email", credentials.username.as_str()),
                ("password", credentials.password.as_str()),
            ])
            .send()
            .await
            .map_err(map_request_error)?;
        if is_rejected(login.status()) {
            return Err(ScrapeError::Login(format!(
                "portal answered {}",
                login.status()
            )));
        }
        if !login.status().is_success() {
            return Err(ScrapeError::Network(format!(
                "login request failed with {}",
                login.status()
            )));
        }

        let page = client
            .get(assignments_url)
            .send()
            .await
            .map_err(map_request_error)?;
        if is_rejected(page.status()) {
            return Err(ScrapeError::Login(
                "session was not accepted by the assignment page".into(),
            ));
        }
        if !page.status().is_success() {
            return Err(ScrapeError::Network(format!(
                "assignment page request failed with {}",
                page.status()
            )));
        }
        let html = page.text().await.map_err(map_request_error)?;

        let text = html2text::from_read(html.as_bytes(), TEXT_WIDTH)
            .map_err(|e| ScrapeError::PageStructure(e.to_string()))?;
        info!(
            "Fetched assignment page for {} ({} characters)",
            credentials.username,
            text.len()
        );
        Ok(text)
    }
}
