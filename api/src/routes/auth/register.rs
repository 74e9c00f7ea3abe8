use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::dto::auth_dto::{AuthResponse, RegisterRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};

use wl_core::repositories::{
    CredentialRepository, OneTimeSecretRepository, SessionRepository, UserRepository,
};
use wl_core::services::otp::CacheServiceTrait;

use super::{extract_client_ip, extract_user_agent, AppState};

/// Handler for POST /api/v1/auth/register
///
/// Registers a new account with email and password and establishes the
/// first session.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "alice@example.com",
///     "password": "Secret123!",
///     "account_type": "WORKER",
///     "first_name": "Alice"
/// }
/// ```
///
/// # Errors
/// - 400 Bad Request: Validation failed
/// - 409 Conflict: An account with this email already exists
pub async fn register<U, C, S, O, K>(
    req: HttpRequest,
    state: web::Data<AppState<U, C, S, O, K>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CredentialRepository + 'static,
    S: SessionRepository + 'static,
    O: OneTimeSecretRepository + 'static,
    K: CacheServiceTrait + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    let result = state
        .auth_service
        .register_with_email(
            &request.email,
            &request.password,
            request.account_type,
            request.first_name.clone(),
            request.last_name.clone(),
            extract_user_agent(&req),
            extract_client_ip(&req),
        )
        .await;

    match result {
        Ok(payload) => HttpResponse::Created().json(AuthResponse::from(payload)),
        Err(error) => handle_domain_error(&error),
    }
}
