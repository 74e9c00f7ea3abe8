use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::dto::auth_dto::{AuthResponse, LoginRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};

use wl_core::repositories::{
    CredentialRepository, OneTimeSecretRepository, SessionRepository, UserRepository,
};
use wl_core::services::otp::CacheServiceTrait;

use super::{extract_client_ip, extract_user_agent, AppState};

/// Handler for POST /api/v1/auth/login
///
/// Authenticates with email and password.
///
/// # Errors
/// - 400 Bad Request: Validation failed
/// - 401 Unauthorized: Unknown user, missing credential, or wrong password,
///   all under the same message
pub async fn login<U, C, S, O, K>(
    req: HttpRequest,
    state: web::Data<AppState<U, C, S, O, K>>,
    request: web::Json<LoginRequest>,
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
        .login_with_email(
            &request.email,
            &request.password,
            extract_user_agent(&req),
            extract_client_ip(&req),
        )
        .await;

    match result {
        Ok(payload) => HttpResponse::Ok().json(AuthResponse::from(payload)),
        Err(error) => handle_domain_error(&error),
    }
}
