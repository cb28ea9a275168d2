use super::schedule_reminders::{self, ScheduleRemindersUseCase};
use crate::shared::usecase::{execute, UseCase};
use arbor_alert_domain::{
    extract, format_date, AssignmentRecord, Credentials, Reminder, ScrapeError,
    SectionNotFoundError, ID,
};
use arbor_alert_infra::ArborContext;
use tracing::error;

/// Fetches the assignment page of a user and reschedules their reminders
/// from what was found on it.
///
/// Nothing is rescheduled when the page can not be fetched or does not
/// contain the assignment listing, the previous reminders stay in place.
#[derive(Debug)]
pub struct SyncAssignmentsUseCase {
    pub user_id: ID,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub assignments: Vec<AssignmentRecord>,
    pub reminders: Vec<Reminder>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    Scrape(ScrapeError),
    SectionNotFound(SectionNotFoundError),
    CredentialsUnreadable,
    StorageError,
}

impl From<schedule_reminders::UseCaseError> for UseCaseError {
    fn from(e: schedule_reminders::UseCaseError) -> Self {
        match e {
            schedule_reminders::UseCaseError::StorageError => Self::StorageError,
            schedule_reminders::UseCaseError::UserNotFound(_) => {
                Self::Scrape(ScrapeError::MissingCredentials)
            }
        }
    }
}

impl UseCaseRes {
    /// Summary sent to the user after a manual fetch
    pub fn message(&self) -> String {
        if self.assignments.is_empty() {
            return "No assignments were found on your homework page.".into();
        }
        let mut message = format!(
            "Found {} assignment(s), {} reminder(s) scheduled:\n",
            self.assignments.len(),
            self.reminders.len()
        );
        for assignment in &self.assignments {
            message.push_str(&format!(
                "\n{}\nDue: {}",
                assignment.label(),
                format_date(&assignment.due_date)
            ));
        }
        message
    }
}

impl UseCaseError {
    /// The one failure message a user gets for a failed fetch
    pub fn message(&self) -> String {
        match self {
            Self::Scrape(ScrapeError::MissingCredentials) => {
                "No login found for you. Please run the setup first.".into()
            }
            Self::Scrape(ScrapeError::Login(_)) => {
                "Logging in to the portal failed. Please check your username and password.".into()
            }
            Self::Scrape(e) => format!("Fetching your homework page failed: {}", e),
            Self::SectionNotFound(_) => {
                "Your homework page did not contain the assignment list, your reminders were left unchanged."
                    .into()
            }
            Self::CredentialsUnreadable | Self::StorageError => {
                "Something went wrong on our side, please try again later.".into()
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SyncAssignmentsUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "SyncAssignments";

    async fn execute(&mut self, ctx: &ArborContext) -> Result<Self::Response, Self::Error> {
        let user = ctx
            .repos
            .users
            .find(&self.user_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .ok_or(UseCaseError::Scrape(ScrapeError::MissingCredentials))?;

        let password = ctx.cipher.decrypt(&user.encrypted_password).map_err(|e| {
            error!("Stored password of user: {} is unreadable: {:?}", user.id, e);
            UseCaseError::CredentialsUnreadable
        })?;
        let credentials = Credentials {
            username: user.username,
            password,
        };

        let raw_text = ctx
            .scraper
            .fetch_raw_assignment_text(&credentials)
            .await
            .map_err(UseCaseError::Scrape)?;
        let assignments = extract(&raw_text).map_err(UseCaseError::SectionNotFound)?;

        let reminders = execute(
            ScheduleRemindersUseCase {
                user_id: self.user_id.clone(),
                assignments: assignments.clone(),
            },
            ctx,
        )
        .await?;

        Ok(UseCaseRes {
            assignments,
            reminders,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{insert_user, portal_page, setup, user_id};
    use crate::user::delete_user::DeleteUserUseCase;
    use arbor_alert_domain::extractor::START_MARKER;

    #[actix_web::main]
    #[test]
    async fn it_extracts_and_schedules() {
        let test = setup();
        insert_user(&test.ctx, "42").await;
        test.scraper.set_page(&portal_page(
            "7X/Ar: Mask evaluation  (Due 25 Feb 2025)\n\
             Assignments that are due\n\
             7X/Pc: Spring Term Hmk Project\n\
             Due: 2025-04-03\n\
             Geography project - build a volcano\n\
             Due: 03/04/2025",
        ));

        let res = SyncAssignmentsUseCase {
            user_id: user_id("42"),
        }
        .execute(&test.ctx)
        .await
        .expect("To sync assignments");
        assert_eq!(res.assignments.len(), 3);
        assert_eq!(res.reminders.len(), 3);

        let credentials = test
            .scraper
            .last_credentials
            .lock()
            .unwrap()
            .clone()
            .expect("Scraper to be called");
        assert_eq!(credentials.username, "pupil@school.org");
        assert_eq!(credentials.password, "hunter2");

        let message = res.message();
        assert!(message.contains("7X/Pc: Spring Term Hmk Project\nDue: 2025-04-03"));
    }

    #[actix_web::main]
    #[test]
    async fn missing_marker_leaves_reminders_alone() {
        let test = setup();
        insert_user(&test.ctx, "42").await;
        test.scraper
            .set_page(&portal_page("7X/Ar: Mask evaluation  (Due 25 Feb 2025)"));
        SyncAssignmentsUseCase {
            user_id: user_id("42"),
        }
        .execute(&test.ctx)
        .await
        .expect("To sync assignments");

        test.scraper
            .set_page("Maintenance\n7X/Ar: Poster  (Due 3 Mar 2025)\nSubmitted Assignments");
        let res = SyncAssignmentsUseCase {
            user_id: user_id("42"),
        }
        .execute(&test.ctx)
        .await;
        assert_eq!(
            res.unwrap_err(),
            UseCaseError::SectionNotFound(SectionNotFoundError {
                marker: START_MARKER
            })
        );

        let pending = test
            .ctx
            .repos
            .reminders
            .find_pending_by_user(&user_id("42"))
            .await
            .expect("To find pending");
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].assignment_label, "7X/Ar: Mask evaluation");
    }

    #[actix_web::main]
    #[test]
    async fn unknown_user_has_no_credentials() {
        let test = setup();
        let res = SyncAssignmentsUseCase {
            user_id: user_id("42"),
        }
        .execute(&test.ctx)
        .await;
        assert_eq!(
            res.unwrap_err(),
            UseCaseError::Scrape(ScrapeError::MissingCredentials)
        );
        assert_eq!(
            test.scraper
                .calls
                .load(std::sync::atomic::Ordering::SeqCst),
            0
        );
    }

    #[actix_web::main]
    #[test]
    async fn scrape_errors_are_propagated() {
        let test = setup();
        insert_user(&test.ctx, "42").await;
        test.scraper.set_error(ScrapeError::Timeout);
        let err = SyncAssignmentsUseCase {
            user_id: user_id("42"),
        }
        .execute(&test.ctx)
        .await
        .unwrap_err();
        assert_eq!(err, UseCaseError::Scrape(ScrapeError::Timeout));
        assert!(err.message().contains("Timed out"));
    }

    #[actix_web::main]
    #[test]
    async fn user_deleted_during_scrape_stays_without_reminders() {
        let test = setup();
        insert_user(&test.ctx, "42").await;
        test.scraper
            .set_page(&portal_page("7X/Ar: Mask evaluation  (Due 25 Feb 2025)"));
        let gate = test.scraper.hold();

        let mut sync = SyncAssignmentsUseCase {
            user_id: user_id("42"),
        };
        let delete_while_scraping = async {
            test.scraper.entered.notified().await;
            let deleted = DeleteUserUseCase {
                user_id: user_id("42"),
            }
            .execute(&test.ctx)
            .await;
            gate.notify_one();
            deleted
        };
        let (synced, deleted) = tokio::join!(sync.execute(&test.ctx), delete_while_scraping);

        assert!(deleted.is_ok());
        assert_eq!(
            synced.unwrap_err(),
            UseCaseError::Scrape(ScrapeError::MissingCredentials)
        );
        let repos = &test.ctx.repos;
        assert!(repos.users.find(&user_id("42")).await.expect("Find to work").is_none());
        assert!(repos
            .reminders
            .find_pending_by_user(&user_id("42"))
            .await
            .expect("To find pending")
            .is_empty());
    }
}
