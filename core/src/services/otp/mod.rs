//! One-time-code issuer module
//!
//! This module generates and verifies single-use numeric login codes:
//! - Per-(user, channel) secrets seed deterministic code derivation
//! - Pending codes live only in the external cache under a short TTL
//! - A code is consumed by its first verification attempt, match or not
//!
//! Delivery of the code to the user (SMS, email) is an external concern and
//! is deliberately absent here.

mod config;
mod memory;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::OtpServiceConfig;
pub use memory::MemoryCacheService;
pub use service::OtpService;
pub use traits::CacheServiceTrait;
pub use types::{PendingOtp, SendCodeResult, CODE_LENGTH};
