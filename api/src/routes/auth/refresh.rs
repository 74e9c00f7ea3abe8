use actix_web::{web, HttpResponse};

use crate::dto::auth_dto::{RefreshResponse, RefreshTokenRequest};
use crate::handlers::handle_domain_error;

use wl_core::repositories::{
    CredentialRepository, OneTimeSecretRepository, SessionRepository, UserRepository,
};
use wl_core::services::otp::CacheServiceTrait;

use super::AppState;

/// Handler for POST /api/v1/auth/refresh
///
/// Exchanges a refresh token for a new session. The presented token is
/// single use: a second exchange with the same token fails.
///
/// # Request Body
///
/// ```json
/// {
///     "refresh_token": "string"
/// }
/// ```
///
/// # Errors
/// - 401 Unauthorized: Invalid, expired, or already-rotated refresh token,
///   all under the same message
pub async fn refresh<U, C, S, O, K>(
    state: web::Data<AppState<U, C, S, O, K>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CredentialRepository + 'static,
    S: SessionRepository + 'static,
    O: OneTimeSecretRepository + 'static,
    K: CacheServiceTrait + 'static,
{
    match state.auth_service.refresh(&request.refresh_token).await {
        Ok(payload) => HttpResponse::Ok().json(RefreshResponse {
            access_token: payload.access_token,
            refresh_token: payload.refresh_token,
            expires_in: payload.expires_in,
        }),
        Err(error) => handle_domain_error(&error),
    }
}
