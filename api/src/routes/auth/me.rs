use actix_web::HttpResponse;

use crate::dto::auth_dto::MeResponse;
use crate::middleware::AuthContext;

/// Handler for GET /api/v1/auth/me
///
/// Returns the identity carried by the presented access token. Validation
/// is stateless: the session store is never consulted, so a recently
/// revoked session still answers until its access token expires.
///
/// # Headers
///
/// ```text
/// Authorization: Bearer {access_token}
/// ```
pub async fn me(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(MeResponse {
        user_id: auth.user_id,
        email: auth.email,
        account_type: auth.account_type,
        session_id: auth.session_id,
    })
}
