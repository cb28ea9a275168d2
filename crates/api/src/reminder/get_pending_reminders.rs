use crate::error::ArborError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use arbor_alert_api_structs::get_pending_reminders::*;
use arbor_alert_domain::{Reminder, ID};
use arbor_alert_infra::ArborContext;

pub async fn get_pending_reminders_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<ArborContext>,
) -> Result<HttpResponse, ArborError> {
    protect_route(&http_req, &ctx)?;

    let usecase = GetPendingRemindersUseCase {
        user_id: path.user_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(ArborError::from)
}

#[derive(Debug)]
pub struct GetPendingRemindersUseCase {
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
            UseCaseError::UserNotFound(id) => {
                Self::NotFound(format!("A user with id: {}, was not found.", id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetPendingRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetPendingReminders";

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

        ctx.repos
            .reminders
            .find_pending_by_user(&self.user_id)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
