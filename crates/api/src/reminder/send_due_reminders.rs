use crate::shared::usecase::UseCase;
use arbor_alert_domain::{format_date, Reminder};
use arbor_alert_infra::ArborContext;
use tracing::{error, info, warn};

/// One sweep over the reminders that should fire today.
///
/// A reminder is only marked as sent after it was delivered, so a failed
/// delivery is retried on the next sweep.
#[derive(Debug)]
pub struct SendDueRemindersUseCase {}

#[derive(Debug, Default, PartialEq)]
pub struct SweepReport {
    pub sent: usize,
    pub failed: usize,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError,
}

fn reminder_message(reminder: &Reminder) -> String {
    format!(
        "Assignment reminder: {} is due on {}",
        reminder.assignment_label,
        format_date(&reminder.due_date)
    )
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendDueRemindersUseCase {
    type Response = SweepReport;

    type Error = UseCaseError;

    const NAME: &'static str = "SendDueReminders";

    async fn execute(&mut self, ctx: &ArborContext) -> Result<Self::Response, Self::Error> {
        let today = ctx.sys.today(&ctx.config.timezone);
        let due = ctx
            .repos
            .reminders
            .find_due(&today)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let mut report = SweepReport::default();
        for reminder in due {
            if let Err(e) = ctx
                .notifier
                .send_direct_message(&reminder.user_id, &reminder_message(&reminder))
                .await
            {
                warn!(
                    "Unable to deliver reminder for {} to user: {}, retrying next sweep. Error: {:?}",
                    reminder.assignment_label, reminder.user_id, e
                );
                report.failed += 1;
                continue;
            }

            if let Err(e) = ctx
                .repos
                .reminders
                .mark_sent(
                    &reminder.user_id,
                    &reminder.assignment_label,
                    &reminder.due_date,
                )
                .await
            {
                error!(
                    "Delivered reminder for {} to user: {} could not be marked as sent. Error: {:?}",
                    reminder.assignment_label, reminder.user_id, e
                );
                report.failed += 1;
                continue;
            }
            report.sent += 1;
        }

        info!(
            "Reminder sweep for {} done, {} sent and {} failed",
            today, report.sent, report.failed
        );
        Ok(report)
    }
}
