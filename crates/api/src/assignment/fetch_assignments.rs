use super::sync_assignments::SyncAssignmentsUseCase;
use crate::error::ArborError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use arbor_alert_api_structs::fetch_assignments::*;
use arbor_alert_domain::ID;
use arbor_alert_infra::ArborContext;
use tracing::error;

pub async fn fetch_assignments_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<ArborContext>,
) -> Result<HttpResponse, ArborError> {
    protect_route(&http_req, &ctx)?;

    let usecase = FetchAssignmentsUseCase {
        user_id: path.user_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|_| {
            HttpResponse::Accepted().json(APIResponse {
                message: "Fetching assignments, the result will be sent as a direct message."
                    .into(),
            })
        })
        .map_err(ArborError::from)
}

/// Manual fetch requested by the user. Scraping is slow, so it runs on a
/// background task and the outcome is reported to the user as one direct
/// message.
#[derive(Debug)]
pub struct FetchAssignmentsUseCase {
    pub user_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError,
    UserNotFound(ID),
}

impl From<UseCaseError> for ArborError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
            UseCaseError::UserNotFound(id) => Self::NotFound(format!(
                "A user with id: {}, was not found. The setup has to be completed first.",
                id
            )),
        }
    }
}

async fn fetch_and_report(user_id: ID, ctx: ArborContext) {
    let message = match execute(
        SyncAssignmentsUseCase {
            user_id: user_id.clone(),
        },
        &ctx,
    )
    .await
    {
        Ok(res) => res.message(),
        Err(e) => e.message(),
    };

    if let Err(e) = ctx.notifier.send_direct_message(&user_id, &message).await {
        error!(
            "Unable to report fetch result to user: {}. Error: {:?}",
            user_id, e
        );
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for FetchAssignmentsUseCase {
    type Response = ();

    type Error = UseCaseError;

    const NAME: &'static str = "FetchAssignments";

    async fn execute(&mut self, ctx: &ArborContext) -> Result<Self::Response, Self::Error> {
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

        actix_web::rt::spawn(fetch_and_report(self.user_id.clone(), ctx.clone()));
        Ok(())
    }
}
