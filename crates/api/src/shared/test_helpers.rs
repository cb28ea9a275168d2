use arbor_alert_domain::{Credentials, ScrapeError, User, ID};
use arbor_alert_infra::{ArborContext, INotifier, IScraper, StaticTimeSys};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

// 2025-02-20T12:00:00Z
pub const NOW: i64 = 1740052800000;

pub struct FakeScraper {
    pub response: Mutex<Result<String, ScrapeError>>,
    /// Answers for single usernames, everyone else gets `response`
    pub responses_by_username: Mutex<HashMap<String, Result<String, ScrapeError>>>,
    pub calls: AtomicUsize,
    pub last_credentials: Mutex<Option<Credentials>>,
    /// Notified once a fetch is waiting on the gate
    pub entered: Notify,
    gate: Mutex<Option<Arc<Notify>>>,
}

impl FakeScraper {
    pub fn new() -> Self {
        Self {
            response: Mutex::new(Err(ScrapeError::Network("no page configured".into()))),
            responses_by_username: Mutex::new(HashMap::new()),
            calls: AtomicUsize::new(0),
            last_credentials: Mutex::new(None),
            entered: Notify::new(),
            gate: Mutex::new(None),
        }
    }

    pub fn set_page(&self, page: &str) {
        *self.response.lock().unwrap() = Ok(page.to_string());
    }

    pub fn set_error(&self, e: ScrapeError) {
        *self.response.lock().unwrap() = Err(e);
    }

    pub fn set_error_for(&self, username: &str, e: ScrapeError) {
        self.responses_by_username
            .lock()
            .unwrap()
            .insert(username.to_string(), Err(e));
    }

    /// Makes every following fetch wait until the returned gate is notified
    pub fn hold(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.lock().unwrap() = Some(gate.clone());
        gate
    }
}

#[async_trait::async_trait]
impl IScraper for FakeScraper {
    async fn fetch_raw_assignment_text(
        &self,
        credentials: &Credentials,
    ) -> Result<String, ScrapeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_credentials.lock().unwrap() = Some(credentials.clone());

        let gate = self.gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            self.entered.notify_one();
            gate.notified().await;
        }

        if let Some(response) = self
            .responses_by_username
            .lock()
            .unwrap()
            .get(&credentials.username)
        {
            return response.clone();
        }
        self.response.lock().unwrap().clone()
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: Mutex<Vec<(ID, String)>>,
    pub failing: AtomicBool,
    failing_users: Mutex<HashSet<ID>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<(ID, String)> {
        self.messages.lock().unwrap().clone()
    }

    /// Deliveries to `user_id` fail, other users are unaffected
    pub fn fail_for(&self, user_id: &ID) {
        self.failing_users.lock().unwrap().insert(user_id.clone());
    }
}

#[async_trait::async_trait]
impl INotifier for RecordingNotifier {
    async fn send_direct_message(&self, user_id: &ID, content: &str) -> anyhow::Result<()> {
        let failing = self.failing.load(Ordering::SeqCst)
            || self.failing_users.lock().unwrap().contains(user_id);
        if failing {
            anyhow::bail!("Chat bridge is down");
        }
        self.messages
            .lock()
            .unwrap()
            .push((user_id.clone(), content.to_string()));
        Ok(())
    }
}

pub struct TestContext {
    pub ctx: ArborContext,
    pub scraper: Arc<FakeScraper>,
    pub notifier: Arc<RecordingNotifier>,
}

pub fn setup() -> TestContext {
    setup_at(NOW)
}

pub fn setup_at(timestamp_millis: i64) -> TestContext {
    let scraper = Arc::new(FakeScraper::new());
    let notifier = Arc::new(RecordingNotifier::default());

    let mut ctx = ArborContext::create_inmemory();
    ctx.config.timezone = arbor_alert_domain::Tz::UTC;
    ctx.sys = Arc::new(StaticTimeSys { timestamp_millis });
    ctx.scraper = scraper.clone();
    ctx.notifier = notifier.clone();

    TestContext {
        ctx,
        scraper,
        notifier,
    }
}

pub fn user_id(id: &str) -> ID {
    id.parse().expect("Valid id")
}

pub async fn insert_user(ctx: &ArborContext, id: &str) -> User {
    insert_user_named(ctx, id, "pupil@school.org").await
}

pub async fn insert_user_named(ctx: &ArborContext, id: &str, username: &str) -> User {
    let user = User::new(user_id(id), username.into(), ctx.cipher.encrypt("hunter2"));
    ctx.repos.users.insert(&user).await.expect("To insert user");
    user
}

/// Portal page with the given listing between the section markers
pub fn portal_page(listing: &str) -> String {
    format!(
        "Dashboard\nOverdue Assignments\n{}\nSubmitted Assignments\nEssay - old one\nDue: 01/01/2024",
        listing
    )
}
