use actix_web::HttpResponse;
use serde_json::json;

use crate::repository::RepositoryError;
use crate::services::ServiceError;

pub mod catalog;
pub mod products;

/// Translate a service failure into a JSON error response.
///
/// `action` names what was attempted and only appears in the log.
pub(crate) fn error_response(err: ServiceError, action: &str) -> HttpResponse {
    let body = json!({ "error": err.to_string() });

    match err {
        ServiceError::Form(_) | ServiceError::Duplicate { .. } => {
            HttpResponse::UnprocessableEntity().json(body)
        }
        ServiceError::NotFound(_) | ServiceError::Repository(RepositoryError::NotFound) => {
            HttpResponse::NotFound().json(body)
        }
        ServiceError::Conflict(_) => HttpResponse::Conflict().json(body),
        ServiceError::CreateFailed | ServiceError::UpdateFailed(_) => {
            HttpResponse::InternalServerError().json(body)
        }
        ServiceError::Repository(err) => {
            log::error!("Failed to {action}: {err}");
            HttpResponse::InternalServerError().json(json!({ "error": "internal server error" }))
        }
    }
}
