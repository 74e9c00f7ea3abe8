//! Repository interfaces for the persistence layer.
//!
//! Concrete implementations live in the infrastructure crate; in-memory
//! implementations suitable for tests and local development live alongside
//! each trait.

pub mod credential;
pub mod one_time_secret;
pub mod session;
pub mod user;

pub use credential::{CredentialRepository, InMemoryCredentialRepository};
pub use one_time_secret::{InMemoryOneTimeSecretRepository, OneTimeSecretRepository};
pub use session::{InMemorySessionRepository, SessionRepository};
pub use user::{InMemoryUserRepository, UserRepository};
