//! Value objects returned by the authentication services.

pub mod auth_payload;

pub use auth_payload::{AccessTokenIntrospection, AuthPayload, LogoutResult};
