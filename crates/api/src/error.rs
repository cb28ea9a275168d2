use actix_web::{
    http::{header, StatusCode},
    HttpResponse,
};
use thiserror::Error;

/// Errors a request to the API can end in. The message is the response body
/// the chat bridge shows, so it never contains storage details.
#[derive(Error, Debug)]
pub enum ArborError {
    #[error("Something went wrong on our side, please try again later")]
    InternalError,
    #[error("The request was rejected: {0}")]
    BadClientData(String),
    #[error("Missing or wrong API key: {0}")]
    Unauthorized(String),
    #[error("Nothing found: {0}")]
    NotFound(String),
}

impl actix_web::error::ResponseError for ArborError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadClientData(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header((header::CONTENT_TYPE, "text/html; charset=utf-8"))
            .body(self.to_string())
    }
}
