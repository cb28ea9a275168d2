use super::utils::{FakeScraper, RecordingNotifier};
use arbor_alert_api::Application;
use arbor_alert_infra::{ArborContext, Config, StaticTimeSys};
use arbor_alert_sdk::ArborAlertSDK;
use std::sync::Arc;

pub struct TestApp {
    pub config: Config,
    pub ctx: ArborContext,
    pub scraper: Arc<FakeScraper>,
    pub notifier: Arc<RecordingNotifier>,
}

// 2025-02-20T12:00:00Z
pub const NOW: i64 = 1740052800000;

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, ArborAlertSDK, String) {
    let scraper = Arc::new(FakeScraper::default());
    let notifier = Arc::new(RecordingNotifier::default());

    let mut ctx = ArborContext::create_inmemory();
    ctx.config.port = 0; // Random port
    ctx.config.timezone = arbor_alert_domain::Tz::UTC;
    ctx.sys = Arc::new(StaticTimeSys {
        timestamp_millis: NOW,
    });
    ctx.scraper = scraper.clone();
    ctx.notifier = notifier.clone();

    let config = ctx.config.clone();
    let application = Application::new(ctx.clone())
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}/api/v1", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let sdk = ArborAlertSDK::new(address.clone(), config.api_key.clone());
    let app = TestApp {
        config,
        ctx,
        scraper,
        notifier,
    };
    (app, sdk, address)
}
