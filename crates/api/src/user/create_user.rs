use crate::error::ArborError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use arbor_alert_api_structs::create_user::*;
use arbor_alert_domain::{LeadDays, User, ID};
use arbor_alert_infra::ArborContext;
use tracing::info;

pub async fn create_user_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<ArborContext>,
) -> Result<HttpResponse, ArborError> {
    protect_route(&http_req, &ctx)?;

    let body = body.0;
    let usecase = CreateUserUseCase {
        user_id: body.user_id,
        username: body.username,
        password: body.password,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Created().json(APIResponse::new(res.user, res.lead_days)))
        .map_err(ArborError::from)
}

/// Stores the portal login of a user, replacing the login of a user that
/// already went through setup
pub struct CreateUserUseCase {
    pub user_id: ID,
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for CreateUserUseCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUserUseCase")
            .field("user_id", &self.user_id)
            .field("username", &self.username)
            .finish()
    }
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub user: User,
    pub lead_days: LeadDays,
    /// False when the login of an existing user was updated
    pub created: bool,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    EmptyCredentials,
    StorageError,
}

impl From<UseCaseError> for ArborError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EmptyCredentials => {
                Self::BadClientData("Both username and password must be provided".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateUserUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateUser";

    async fn execute(&mut self, ctx: &ArborContext) -> Result<Self::Response, Self::Error> {
        let username = self.username.trim();
        if username.is_empty() || self.password.is_empty() {
            return Err(UseCaseError::EmptyCredentials);
        }

        let user = User::new(
            self.user_id.clone(),
            username.to_string(),
            ctx.cipher.encrypt(&self.password),
        );

        let existing = ctx
            .repos
            .users
            .find(&user.id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        let created = existing.is_none();
        let res = if created {
            ctx.repos.users.insert(&user).await
        } else {
            ctx.repos.users.save(&user).await
        };
        res.map_err(|_| UseCaseError::StorageError)?;
        info!(
            "Stored portal login for user: {} (new user: {})",
            user.id, created
        );

        let lead_days = ctx
            .repos
            .preferences
            .get_lead_days(&user.id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(UseCaseRes {
            user,
            lead_days,
            created,
        })
    }
}
