//! One-time-secret repository module.

mod r#trait;
pub use r#trait::OneTimeSecretRepository;

mod memory;
pub use memory::InMemoryOneTimeSecretRepository;
