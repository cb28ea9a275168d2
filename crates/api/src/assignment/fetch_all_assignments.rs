use super::sync_assignments::SyncAssignmentsUseCase;
use crate::shared::usecase::{execute, UseCase};
use arbor_alert_infra::ArborContext;
use tracing::{info, warn};

/// Daily refresh of every users assignments.
///
/// Users are processed one after another and a failure for one user is
/// logged and does not stop the batch.
#[derive(Debug)]
pub struct FetchAllAssignmentsUseCase {}

#[derive(Debug, Default, PartialEq)]
pub struct DailyFetchReport {
    pub synced: usize,
    pub failed: usize,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for FetchAllAssignmentsUseCase {
    type Response = DailyFetchReport;

    type Error = UseCaseError;

    const NAME: &'static str = "FetchAllAssignments";

    async fn execute(&mut self, ctx: &ArborContext) -> Result<Self::Response, Self::Error> {
        let user_ids = ctx
            .repos
            .users
            .find_all_ids()
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let mut report = DailyFetchReport::default();
        for user_id in user_ids {
            let usecase = SyncAssignmentsUseCase {
                user_id: user_id.clone(),
            };
            match execute(usecase, ctx).await {
                Ok(_) => report.synced += 1,
                Err(e) => {
                    warn!("Daily fetch failed for user: {}. Error: {:?}", user_id, e);
                    report.failed += 1;
                }
            }
        }

        info!(
            "Daily fetch done, {} users synced and {} failed",
            report.synced, report.failed
        );
        Ok(report)
    }
}
