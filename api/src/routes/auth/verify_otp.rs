use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::dto::auth_dto::{AuthResponse, VerifyOtpRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};

use wl_core::repositories::{
    CredentialRepository, OneTimeSecretRepository, SessionRepository, UserRepository,
};
use wl_core::services::otp::CacheServiceTrait;

use super::{extract_client_ip, extract_user_agent, AppState};

/// Handler for POST /api/v1/auth/verify-otp
///
/// Verifies a one-time code and establishes a session for its user. The
/// pending code is consumed by this attempt whatever the outcome.
///
/// # Errors
/// - 400 Bad Request: Validation failed or no identifier for the channel
/// - 401 Unauthorized: Expired, missing, or wrong code
pub async fn verify_otp<U, C, S, O, K>(
    req: HttpRequest,
    state: web::Data<AppState<U, C, S, O, K>>,
    request: web::Json<VerifyOtpRequest>,
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
        .verify_otp_and_login(
            request.channel,
            request.email.as_deref(),
            request.phone.as_deref(),
            &request.code,
            extract_user_agent(&req),
            extract_client_ip(&req),
        )
        .await;

    match result {
        Ok(payload) => HttpResponse::Ok().json(AuthResponse::from(payload)),
        Err(error) => handle_domain_error(&error),
    }
}
