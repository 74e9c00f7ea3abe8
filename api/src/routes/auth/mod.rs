//! Authentication route handlers
//!
//! This module contains all authentication-related endpoints:
//! - Registration and password login
//! - OTP send and OTP login
//! - Token refresh and logout
//! - Authenticated identity lookup

pub mod login;
pub mod logout;
pub mod me;
pub mod refresh;
pub mod register;
pub mod send_otp;
pub mod verify_otp;

use actix_web::HttpRequest;
use std::sync::Arc;

use wl_core::repositories::{
    CredentialRepository, OneTimeSecretRepository, SessionRepository, UserRepository,
};
use wl_core::services::auth::AuthService;
use wl_core::services::otp::CacheServiceTrait;

/// Application state that holds shared services
pub struct AppState<U, C, S, O, K>
where
    U: UserRepository,
    C: CredentialRepository,
    S: SessionRepository,
    O: OneTimeSecretRepository,
    K: CacheServiceTrait,
{
    pub auth_service: Arc<AuthService<U, C, S, O, K>>,
}

/// Extract the User-Agent header for session auditing
pub(crate) fn extract_user_agent(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(actix_web::http::header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

/// Extract the client IP, honoring reverse-proxy forwarding headers
pub(crate) fn extract_client_ip(req: &HttpRequest) -> Option<String> {
    req.connection_info()
        .realip_remote_addr()
        .map(|addr| addr.to_string())
}
