use crate::error::ArborError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use arbor_alert_api_structs::delete_user::*;
use arbor_alert_domain::{LeadDays, User, ID};
use arbor_alert_infra::ArborContext;
use tracing::info;

pub async fn delete_user_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<ArborContext>,
) -> Result<HttpResponse, ArborError> {
    protect_route(&http_req, &ctx)?;

    let usecase = DeleteUserUseCase {
        user_id: path.user_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.user, res.lead_days)))
        .map_err(ArborError::from)
}

/// Forgets everything stored about a user: login, preference and reminders
#[derive(Debug)]
pub struct DeleteUserUseCase {
    pub user_id: ID,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub user: User,
    pub lead_days: LeadDays,
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
            UseCaseError::UserNotFound(id) => {
                Self::NotFound(format!("A user with id: {}, was not found.", id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteUserUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteUser";

    async fn execute(&mut self, ctx: &ArborContext) -> Result<Self::Response, Self::Error> {
        // Reconciliations check for the user under the same lock
        let _guard = ctx.user_locks.lock(&self.user_id).await;

        let user = ctx
            .repos
            .users
            .find(&self.user_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .ok_or_else(|| UseCaseError::UserNotFound(self.user_id.clone()))?;
        let lead_days = ctx
            .repos
            .preferences
            .get_lead_days(&user.id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let deleted = ctx
            .repos
            .reminders
            .delete_by_user(&user.id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        ctx.repos
            .preferences
            .delete(&user.id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        ctx.repos
            .users
            .delete(&user.id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        info!(
            "Deleted user: {} together with {} reminders",
            user.id, deleted.deleted_count
        );

        Ok(UseCaseRes { user, lead_days })
    }
}
