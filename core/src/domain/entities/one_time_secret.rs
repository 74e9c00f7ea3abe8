//! Per-user secret material seeding one-time-code derivation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Delivery channel for one-time codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OtpChannel {
    /// Code delivered to the user's email address
    Email,
    /// Code delivered to the user's phone via SMS
    Mobile,
}

impl OtpChannel {
    /// Lowercase string form used in storage and cache keys
    pub fn as_str(&self) -> &'static str {
        match self {
            OtpChannel::Email => "email",
            OtpChannel::Mobile => "mobile",
        }
    }
}

impl std::fmt::Display for OtpChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One-time-secret entity, one row per (user, channel)
///
/// The secret seeds code derivation; it is not itself a code. It is created
/// lazily on the first OTP send for that channel and reused on subsequent
/// sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneTimeSecret {
    /// Unique identifier for the secret
    pub id: Uuid,

    /// User this secret belongs to
    pub user_id: Uuid,

    /// Channel the secret derives codes for
    pub channel: OtpChannel,

    /// Random secret material (hex-encoded)
    pub secret: String,

    /// Timestamp when the secret was created
    pub created_at: DateTime<Utc>,
}

impl OneTimeSecret {
    /// Creates a new one-time secret
    pub fn new(user_id: Uuid, channel: OtpChannel, secret: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            channel,
            secret,
            created_at: Utc::now(),
        }
    }
}
