//! JWT authentication extractor for protecting API endpoints.
//!
//! Extracts the Bearer token from the Authorization header and verifies it
//! statelessly against the access secret. Verification never consults the
//! session store, so a revoked session does not reject access tokens that
//! are still inside their own TTL.

use actix_web::{
    dev::Payload,
    error::{ErrorInternalServerError, ErrorUnauthorized},
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpRequest,
};
use std::future::{ready, Ready};
use uuid::Uuid;

use wl_core::domain::entities::token::AccessClaims;
use wl_core::services::token::TokenService;

/// User authentication context injected into handlers
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID extracted from the JWT claims
    pub user_id: Uuid,
    /// Email contact carried in the token, if any
    pub email: Option<String>,
    /// Account type carried in the token, if any
    pub account_type: Option<String>,
    /// Session the token was issued under
    pub session_id: String,
}

impl AuthContext {
    /// Creates an authentication context from verified access claims
    pub fn from_claims(claims: AccessClaims) -> Result<Self, Error> {
        let user_id = claims
            .user_id()
            .map_err(|_| ErrorUnauthorized("Invalid access token"))?;
        Ok(Self {
            user_id,
            email: claims.email,
            account_type: claims.account_type,
            session_id: claims.session_id,
        })
    }
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_context(req))
    }
}

fn extract_context(req: &HttpRequest) -> Result<AuthContext, Error> {
    let token_service = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| ErrorInternalServerError("Token service not configured"))?;

    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ErrorUnauthorized("Missing Authorization header"))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ErrorUnauthorized("Invalid Authorization header"))?;

    let claims = token_service
        .verify_access(token)
        .map_err(|_| ErrorUnauthorized("Invalid access token"))?;

    AuthContext::from_claims(claims)
}
