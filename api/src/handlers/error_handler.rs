//! Mapping from domain errors to HTTP responses

use actix_web::HttpResponse;
use std::collections::HashMap;
use validator::ValidationErrors;

use wl_core::errors::DomainError;

use crate::dto::ErrorResponse;

/// Convert a domain error into its HTTP response
///
/// The three terminal outcomes of the error taxonomy map onto 409/401/400;
/// anything internal becomes an opaque 500 so storage details never reach
/// the client.
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Conflict { message } => {
            HttpResponse::Conflict().json(ErrorResponse::new("conflict", message))
        }
        DomainError::Unauthorized { message } => {
            HttpResponse::Unauthorized().json(ErrorResponse::new("unauthorized", message))
        }
        DomainError::BadRequest { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new("bad_request", message))
        }
        DomainError::Internal { message } => {
            tracing::error!(error = %message, "Internal error while handling request");
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "internal_error",
                "An internal error occurred",
            ))
        }
    }
}

/// Convert validator failures into a 400 with field-level details
pub fn handle_validation_errors(errors: &ValidationErrors) -> HttpResponse {
    let mut details: HashMap<String, Vec<String>> = HashMap::new();

    for (field, field_errors) in errors.field_errors() {
        let messages = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        details.insert(field.to_string(), messages);
    }

    HttpResponse::BadRequest().json(
        ErrorResponse::new("validation_failed", "Request validation failed").with_details(details),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_status_codes() {
        let conflict = handle_domain_error(&DomainError::conflict("exists"));
        assert_eq!(conflict.status(), StatusCode::CONFLICT);

        let unauthorized = handle_domain_error(&DomainError::unauthorized("nope"));
        assert_eq!(unauthorized.status(), StatusCode::UNAUTHORIZED);

        let bad_request = handle_domain_error(&DomainError::bad_request("missing"));
        assert_eq!(bad_request.status(), StatusCode::BAD_REQUEST);

        let internal = handle_domain_error(&DomainError::internal("boom"));
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
