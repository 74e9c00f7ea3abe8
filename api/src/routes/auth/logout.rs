use actix_web::{web, HttpResponse};

use crate::dto::auth_dto::{LogoutRequest, LogoutResponse};
use crate::handlers::handle_domain_error;

use wl_core::repositories::{
    CredentialRepository, OneTimeSecretRepository, SessionRepository, UserRepository,
};
use wl_core::services::otp::CacheServiceTrait;

use super::AppState;

/// Handler for POST /api/v1/auth/logout
///
/// Revokes the session behind a refresh token. Idempotent: always answers
/// `{"success": true}`, whether or not the token mapped to a live session.
pub async fn logout<U, C, S, O, K>(
    state: web::Data<AppState<U, C, S, O, K>>,
    request: web::Json<LogoutRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CredentialRepository + 'static,
    S: SessionRepository + 'static,
    O: OneTimeSecretRepository + 'static,
    K: CacheServiceTrait + 'static,
{
    match state.auth_service.logout(&request.refresh_token).await {
        Ok(result) => HttpResponse::Ok().json(LogoutResponse {
            success: result.success,
        }),
        Err(error) => handle_domain_error(&error),
    }
}
