//! Token service tests

use uuid::Uuid;

use crate::domain::entities::session::SESSION_ID_LENGTH;
use crate::domain::entities::user::{AccountType, User};
use crate::errors::DomainError;
use crate::services::token::{TokenService, TokenServiceConfig};

fn service() -> TokenService {
    TokenService::new(TokenServiceConfig::default()).unwrap()
}

fn sample_user() -> User {
    User::new_with_email(
        "alice@example.com".to_string(),
        AccountType::Worker,
        None,
        None,
    )
}

#[test]
fn test_access_token_round_trip() {
    let service = service();
    let user = sample_user();

    let token = service.sign_access(&user, "session-1").unwrap();
    let claims = service.verify_access(&token).unwrap();

    assert_eq!(claims.sub, user.id.to_string());
    assert_eq!(claims.email.as_deref(), Some("alice@example.com"));
    assert_eq!(claims.account_type.as_deref(), Some("WORKER"));
    assert_eq!(claims.session_id, "session-1");
}

#[test]
fn test_refresh_token_round_trip() {
    let service = service();
    let user_id = Uuid::new_v4();

    let signed = service.sign_refresh(user_id, "session-2").unwrap();
    let claims = service.verify_refresh(&signed.token).unwrap();

    assert_eq!(claims.user_id().unwrap(), user_id);
    assert_eq!(claims.session_id, "session-2");
}

#[test]
fn test_refresh_hash_matches_token() {
    let service = service();
    let signed = service.sign_refresh(Uuid::new_v4(), "session-3").unwrap();

    assert_eq!(signed.token_hash, TokenService::hash_token(&signed.token));
    assert_ne!(signed.token_hash, signed.token);
    // SHA-256 hex digest
    assert_eq!(signed.token_hash.len(), 64);
}

#[test]
fn test_secrets_are_independent() {
    let service = service();
    let user = sample_user();

    // A refresh token must not verify as an access token, and vice versa
    let refresh = service.sign_refresh(user.id, "session-4").unwrap();
    assert!(service.verify_access(&refresh.token).is_err());

    let access = service.sign_access(&user, "session-4").unwrap();
    assert!(service.verify_refresh(&access).is_err());
}

#[test]
fn test_verify_rejects_garbage() {
    let service = service();

    assert!(service.verify_access("not-a-jwt").is_err());
    assert!(service.verify_refresh("").is_err());
}

#[test]
fn test_tampered_token_rejected() {
    let service = service();
    let user = sample_user();

    let token = service.sign_access(&user, "session-5").unwrap();
    let mut tampered = token.clone();
    tampered.pop();
    tampered.push('x');

    assert!(service.verify_access(&tampered).is_err());
}

#[test]
fn test_session_id_shape() {
    let service = service();
    let id = service.generate_session_id();

    assert_eq!(id.len(), SESSION_ID_LENGTH);
    assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two ids should never collide
    assert_ne!(id, service.generate_session_id());
}

#[test]
fn test_access_expiry_must_stay_below_refresh() {
    let config = TokenServiceConfig {
        access_token_expiry_seconds: 31 * 24 * 60 * 60,
        ..Default::default()
    };

    let err = TokenService::new(config).unwrap_err();
    assert!(matches!(err, DomainError::Internal { .. }));
}

#[test]
fn test_verify_failure_is_unauthorized() {
    let service = service();
    let err = service.verify_refresh("bogus").unwrap_err();
    assert!(err.is_unauthorized());
}
