use crate::shared::usecase::UseCase;
use arbor_alert_domain::{plan_reminders, AssignmentRecord, Reminder, ID};
use arbor_alert_infra::ArborContext;
use tracing::info;

/// Reconciles the pending reminders of a user with a fresh list of
/// assignments.
///
/// The pending set is replaced as a whole, so assignments that vanished
/// from the portal lose their reminders and running this twice with the
/// same input leaves the same pending set. Reminders that were already
/// sent are history and stay untouched.
#[derive(Debug)]
pub struct ScheduleRemindersUseCase {
    pub user_id: ID,
    pub assignments: Vec<AssignmentRecord>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError,
    UserNotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for ScheduleRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "ScheduleReminders";

    async fn execute(&mut self, ctx: &ArborContext) -> Result<Self::Response, Self::Error> {
        let _guard = ctx.user_locks.lock(&self.user_id).await;

        // The user may have been deleted while their page was scraped
        if ctx
            .repos
            .users
            .find(&self.user_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .is_none()
        {
            return Err(UseCaseError::UserNotFound(self.user_id.clone()));
        }

        let lead_days = ctx
            .repos
            .preferences
            .get_lead_days(&self.user_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let reminders = plan_reminders(
            &self.user_id,
            &self.assignments,
            lead_days,
            ctx.sys.get_timestamp_millis(),
            &ctx.config.timezone,
        );

        ctx.repos
            .reminders
            .replace_pending(&self.user_id, &reminders)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        info!(
            "Scheduled {} of {} assignments for user: {}",
            reminders.len(),
            self.assignments.len(),
            self.user_id
        );
        Ok(reminders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{insert_user, setup, user_id, NOW};
    use arbor_alert_domain::{start_of_day_millis, LeadDays, NaiveDate, Tz};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("Valid date")
    }

    fn assignment(title: &str, due_date: NaiveDate) -> AssignmentRecord {
        AssignmentRecord {
            subject_code: Some("7X/Ar".into()),
            title: title.into(),
            due_date,
        }
    }

    fn usecase(assignments: Vec<AssignmentRecord>) -> ScheduleRemindersUseCase {
        ScheduleRemindersUseCase {
            user_id: user_id("42"),
            assignments,
        }
    }

    async fn pending(ctx: &ArborContext) -> Vec<Reminder> {
        ctx.repos
            .reminders
            .find_pending_by_user(&user_id("42"))
            .await
            .expect("To find pending reminders")
    }

    #[actix_web::main]
    #[test]
    async fn rescheduling_same_assignments_is_idempotent() {
        let test = setup();
        insert_user(&test.ctx, "42").await;
        let assignments = vec![
            assignment("Mask", ymd(2025, 2, 25)),
            assignment("Poster", ymd(2025, 3, 3)),
        ];

        usecase(assignments.clone())
            .execute(&test.ctx)
            .await
            .expect("To schedule");
        let first = pending(&test.ctx).await;

        usecase(assignments)
            .execute(&test.ctx)
            .await
            .expect("To schedule");
        let second = pending(&test.ctx).await;

        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }

    #[actix_web::main]
    #[test]
    async fn only_future_reminders_are_stored() {
        let test = setup();
        insert_user(&test.ctx, "42").await;
        let reminders = usecase(vec![
            assignment("overdue", ymd(2025, 2, 1)),
            assignment("due tomorrow", ymd(2025, 2, 21)),
            assignment("next week", ymd(2025, 2, 27)),
        ])
        .execute(&test.ctx)
        .await
        .expect("To schedule");

        assert_eq!(reminders.len(), 1);
        for reminder in pending(&test.ctx).await {
            assert!(start_of_day_millis(&reminder.reminder_date, &Tz::UTC) > NOW);
        }
    }

    #[actix_web::main]
    #[test]
    async fn rerun_replaces_stale_pending_reminders() {
        let test = setup();
        insert_user(&test.ctx, "42").await;
        usecase(vec![
            assignment("Mask", ymd(2025, 2, 25)),
            assignment("Poster", ymd(2025, 3, 3)),
            assignment("Essay", ymd(2025, 3, 10)),
        ])
        .execute(&test.ctx)
        .await
        .expect("To schedule");
        assert_eq!(pending(&test.ctx).await.len(), 3);

        usecase(vec![
            assignment("Essay", ymd(2025, 3, 10)),
            assignment("overdue", ymd(2025, 2, 1)),
        ])
        .execute(&test.ctx)
        .await
        .expect("To schedule");

        let pending = pending(&test.ctx).await;
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].assignment_label, "7X/Ar: Essay");
    }

    #[actix_web::main]
    #[test]
    async fn it_uses_stored_lead_days() {
        let test = setup();
        insert_user(&test.ctx, "42").await;
        test.ctx
            .repos
            .preferences
            .set_lead_days(&user_id("42"), LeadDays::new(3))
            .await
            .expect("To set lead days");

        let reminders = usecase(vec![assignment("Mask", ymd(2025, 2, 25))])
            .execute(&test.ctx)
            .await
            .expect("To schedule");
        assert_eq!(reminders[0].reminder_date, ymd(2025, 2, 22));
    }

    #[actix_web::main]
    #[test]
    async fn sent_reminders_survive_rescheduling() {
        let test = setup();
        insert_user(&test.ctx, "42").await;
        let sent = Reminder {
            user_id: user_id("42"),
            assignment_label: "7X/Ar: Old".into(),
            due_date: ymd(2025, 2, 19),
            reminder_date: ymd(2025, 2, 18),
            sent: true,
        };
        test.ctx
            .repos
            .reminders
            .insert(&sent)
            .await
            .expect("To insert reminder");

        usecase(vec![]).execute(&test.ctx).await.expect("To schedule");

        assert!(pending(&test.ctx).await.is_empty());
        assert_eq!(
            test.ctx
                .repos
                .reminders
                .delete_by_user(&user_id("42"))
                .await
                .expect("To delete")
                .deleted_count,
            1
        );
    }

    #[actix_web::main]
    #[test]
    async fn unknown_user_gets_no_reminders() {
        let test = setup();
        let res = usecase(vec![assignment("Mask", ymd(2025, 2, 25))])
            .execute(&test.ctx)
            .await;
        assert_eq!(res.unwrap_err(), UseCaseError::UserNotFound(user_id("42")));
        assert!(pending(&test.ctx).await.is_empty());
    }
}
