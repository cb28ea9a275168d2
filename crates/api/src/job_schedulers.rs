use crate::{
    assignment::FetchAllAssignmentsUseCase, reminder::SendDueRemindersUseCase,
    shared::usecase::execute,
};
use actix_web::rt::time::{interval, sleep};
use arbor_alert_infra::ArborContext;
use chrono::{Duration as ChronoDuration, TimeZone, Utc};
use chrono_tz::Tz;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{error, info};

const DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// Time left until the next `hour`:00 in `tz`, strictly after `now_millis`
pub fn get_daily_start_delay(now_millis: i64, tz: &Tz, hour: u32) -> Duration {
    let now = match Utc.timestamp_millis_opt(now_millis).single() {
        Some(now) => now.with_timezone(tz),
        None => return DAY,
    };

    let mut date = now.date_naive();
    loop {
        let naive = match date.and_hms_opt(hour, 0, 0) {
            Some(naive) => naive,
            None => return DAY,
        };
        // An hour skipped by a DST change is taken as UTC wall clock
        let next = tz
            .from_local_datetime(&naive)
            .earliest()
            .unwrap_or_else(|| tz.from_utc_datetime(&naive));
        if next > now {
            return (next - now).to_std().unwrap_or(DAY);
        }
        date = date + ChronoDuration::days(1);
    }
}

/// Delivers due reminders. Every sweep is awaited before the next tick,
/// so two sweeps never run at the same time.
pub fn start_send_reminders_job(ctx: ArborContext) {
    actix_web::rt::spawn(async move {
        let mut sweep_interval = interval(ctx.config.sweep_interval);
        sweep_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            sweep_interval.tick().await;
            if let Err(e) = execute(SendDueRemindersUseCase {}, &ctx).await {
                error!("Reminder sweep failed: {:?}", e);
            }
        }
    });
}

/// Refreshes the assignments of every user once a day at the configured hour
pub fn start_daily_fetch_job(ctx: ArborContext) {
    actix_web::rt::spawn(async move {
        let delay = get_daily_start_delay(
            ctx.sys.get_timestamp_millis(),
            &ctx.config.timezone,
            ctx.config.daily_fetch_hour,
        );
        info!("First daily assignment fetch in {} seconds", delay.as_secs());
        sleep(delay).await;

        let mut daily_interval = interval(DAY);
        daily_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            daily_interval.tick().await;
            if let Err(e) = execute(FetchAllAssignmentsUseCase {}, &ctx).await {
                error!("Daily assignment fetch failed: {:?}", e);
            }
        }
    });
}
