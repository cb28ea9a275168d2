use crate::error::ArborError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use arbor_alert_api_structs::set_lead_days::*;
use arbor_alert_domain::{LeadDays, User, ID};
use arbor_alert_infra::ArborContext;

pub async fn set_lead_days_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<ArborContext>,
) -> Result<HttpResponse, ArborError> {
    protect_route(&http_req, &ctx)?;

    let usecase = SetLeadDaysUseCase {
        user_id: path.user_id.clone(),
        lead_days: body.lead_days,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.user, res.lead_days)))
        .map_err(ArborError::from)
}

/// Changes how many days before the deadline reminders fire. Takes effect
/// on the next fetch of the users assignments.
#[derive(Debug)]
pub struct SetLeadDaysUseCase {
    pub user_id: ID,
    pub lead_days: i64,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub user: User,
    pub lead_days: LeadDays,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidLeadDays(i64),
    StorageError,
    UserNotFound(ID),
}

impl From<UseCaseError> for ArborError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidLeadDays(days) => Self::BadClientData(format!(
                "Lead days must be zero or a positive number of days, got: {}",
                days
            )),
            UseCaseError::StorageError => Self::InternalError,
            UseCaseError::UserNotFound(id) => {
                Self::NotFound(format!("A user with id: {}, was not found.", id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SetLeadDaysUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "SetLeadDays";

    async fn execute(&mut self, ctx: &ArborContext) -> Result<Self::Response, Self::Error> {
        let lead_days = u32::try_from(self.lead_days)
            .map(LeadDays::new)
            .map_err(|_| UseCaseError::InvalidLeadDays(self.lead_days))?;

        let user = ctx
            .repos
            .users
            .find(&self.user_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .ok_or_else(|| UseCaseError::UserNotFound(self.user_id.clone()))?;

        ctx.repos
            .preferences
            .set_lead_days(&user.id, lead_days)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(UseCaseRes { user, lead_days })
    }
}
