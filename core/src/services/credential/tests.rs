//! Credential service tests

use std::sync::Arc;
use uuid::Uuid;

use crate::errors::DomainError;
use crate::repositories::InMemoryCredentialRepository;

use super::CredentialService;

fn service() -> CredentialService<InMemoryCredentialRepository> {
    CredentialService::new(Arc::new(InMemoryCredentialRepository::new()))
}

#[tokio::test]
async fn test_create_and_verify_password() {
    let service = service();
    let user_id = Uuid::new_v4();

    let credential = service
        .create_password_credential(user_id, "Secret123!")
        .await
        .unwrap();
    assert_eq!(credential.user_id, user_id);

    // The stored hash is never the plaintext
    assert_ne!(credential.password_hash.as_deref(), Some("Secret123!"));

    assert!(service.verify_password(user_id, "Secret123!").await.unwrap());
    assert!(!service.verify_password(user_id, "wrong").await.unwrap());
}

#[tokio::test]
async fn test_duplicate_credential_is_conflict() {
    let service = service();
    let user_id = Uuid::new_v4();

    service
        .create_password_credential(user_id, "Secret123!")
        .await
        .unwrap();

    let err = service
        .create_password_credential(user_id, "Other456!")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict { .. }));
}

#[tokio::test]
async fn test_verify_password_missing_credential_is_false() {
    let service = service();

    // Unknown user yields false, not an error
    let ok = service
        .verify_password(Uuid::new_v4(), "anything")
        .await
        .unwrap();
    assert!(!ok);
}
