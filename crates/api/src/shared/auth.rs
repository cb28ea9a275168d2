use crate::error::ArborError;
use actix_web::HttpRequest;
use arbor_alert_infra::ArborContext;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Only the chat bridge holding the configured api key may call the api
pub fn protect_route(req: &HttpRequest, ctx: &ArborContext) -> Result<(), ArborError> {
    let api_key = match req.headers().get(API_KEY_HEADER) {
        Some(api_key) => match api_key.to_str() {
            Ok(api_key) => api_key,
            Err(_) => {
                return Err(ArborError::Unauthorized(
                    "Malformed api key provided".to_string(),
                ))
            }
        },
        None => {
            return Err(ArborError::Unauthorized(
                "Unable to find api-key in x-api-key header".to_string(),
            ))
        }
    };

    if api_key != ctx.config.api_key {
        return Err(ArborError::Unauthorized(
            "Invalid api-key provided in x-api-key header".to_string(),
        ));
    }
    Ok(())
}
