use arbor_alert_domain::{date_at, NaiveDate, Tz};
use chrono::Utc;

// Mocking out time so that it is possible to run tests that depend on time.
pub trait ISys: Send + Sync {
    /// The current timestamp in millis
    fn get_timestamp_millis(&self) -> i64;

    /// The current calendar date in `tz`
    fn today(&self, tz: &Tz) -> NaiveDate {
        date_at(self.get_timestamp_millis(), tz)
    }
}

/// System that gets the real time and is used when not testing
pub struct RealSys {}
impl ISys for RealSys {
    fn get_timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Frozen clock for tests
pub struct StaticTimeSys {
    pub timestamp_millis: i64,
}

impl ISys for StaticTimeSys {
    fn get_timestamp_millis(&self) -> i64 {
        self.timestamp_millis
    }
}
