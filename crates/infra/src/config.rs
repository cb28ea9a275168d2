use arbor_alert_utils::create_api_key;
use chrono_tz::Tz;
use std::{str::FromStr, time::Duration};
use tracing::{info, warn};
use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    /// Key the chat bridge has to send in the `x-api-key` header
    pub api_key: String,
    /// Port for the application to run on
    pub port: usize,
    /// Timezone used to decide what "today" is for reminders and
    /// at which moment a reminder day begins
    pub timezone: Tz,
    /// How often due reminders are looked for and delivered
    pub sweep_interval: Duration,
    /// Hour of the day, in `timezone`, at which every users assignments
    /// are fetched again
    pub daily_fetch_hour: u32,
    pub portal: PortalConfig,
    pub notifier: NotifierConfig,
}

#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Page the login form is posted to
    pub login_url: Option<Url>,
    /// Page listing the homework of the logged in pupil
    pub assignments_url: Option<Url>,
    /// Upper bound for every single request against the portal
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// Chat bridge endpoint that turns our messages into direct messages
    pub webhook_url: Option<Url>,
    /// Sent in the `arbor-alert-webhook-key` header
    pub webhook_key: String,
}

fn parse_env<T: FromStr + std::fmt::Display>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(value) => match value.parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    name, value, default
                );
                default
            }
        },
        Err(_) => default,
    }
}

fn parse_url_env(name: &str) -> Option<Url> {
    let value = std::env::var(name).ok()?;
    match Url::parse(&value) {
        Ok(url) => Some(url),
        Err(e) => {
            warn!("The given {}: {} is not a valid url: {}.", name, value, e);
            None
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let api_key = match std::env::var("API_KEY") {
            Ok(key) => key,
            Err(_) => {
                info!("Did not find API_KEY environment variable. Going to create one.");
                let key = create_api_key(24);
                info!("API key for the chat bridge was generated and set to: {}", key);
                key
            }
        };

        let port = parse_env::<usize>("PORT", 5000);
        let timezone = parse_env("TIMEZONE", Tz::UTC);
        let sweep_interval =
            Duration::from_secs(parse_env::<u64>("SWEEP_INTERVAL_SECS", 60 * 60).max(1));
        let mut daily_fetch_hour = parse_env::<u32>("DAILY_FETCH_HOUR", 7);
        if daily_fetch_hour > 23 {
            warn!(
                "DAILY_FETCH_HOUR: {} is not an hour of the day, falling back to 7.",
                daily_fetch_hour
            );
            daily_fetch_hour = 7;
        }

        let portal = PortalConfig {
            login_url: parse_url_env("PORTAL_LOGIN_URL"),
            assignments_url: parse_url_env("PORTAL_ASSIGNMENTS_URL"),
            timeout: Duration::from_secs(parse_env::<u64>("SCRAPE_TIMEOUT_SECS", 10)),
        };
        if portal.login_url.is_none() || portal.assignments_url.is_none() {
            warn!("PORTAL_LOGIN_URL or PORTAL_ASSIGNMENTS_URL is not set, fetching assignments will fail.");
        }

        let notifier = NotifierConfig {
            webhook_url: parse_url_env("NOTIFIER_WEBHOOK_URL"),
            webhook_key: std::env::var("NOTIFIER_WEBHOOK_KEY").unwrap_or_default(),
        };
        if notifier.webhook_url.is_none() {
            warn!("NOTIFIER_WEBHOOK_URL is not set, reminders can not be delivered.");
        }

        Self {
            api_key,
            port,
            timezone,
            sweep_interval,
            daily_fetch_hour,
            portal,
            notifier,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
