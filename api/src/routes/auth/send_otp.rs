use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth_dto::{SendOtpRequest, SendOtpResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};

use wl_core::repositories::{
    CredentialRepository, OneTimeSecretRepository, SessionRepository, UserRepository,
};
use wl_core::services::otp::CacheServiceTrait;

use super::AppState;

/// Handler for POST /api/v1/auth/send-otp
///
/// Issues a one-time login code for an email address or phone number. The
/// response never contains the code; delivery happens out of band.
///
/// # Request Body
///
/// ```json
/// {
///     "channel": "MOBILE",
///     "phone": "+61412345678"
/// }
/// ```
///
/// # Errors
/// - 400 Bad Request: Validation failed or no identifier for the channel
pub async fn send_otp<U, C, S, O, K>(
    state: web::Data<AppState<U, C, S, O, K>>,
    request: web::Json<SendOtpRequest>,
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
        .send_otp(
            request.channel,
            request.email.as_deref(),
            request.phone.as_deref(),
        )
        .await;

    match result {
        Ok(sent) => HttpResponse::Ok().json(SendOtpResponse {
            success: sent.success,
            message: sent.message,
        }),
        Err(error) => handle_domain_error(&error),
    }
}
