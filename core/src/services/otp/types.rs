//! Types used by the one-time-code issuer

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of a one-time code in digits
pub const CODE_LENGTH: usize = 6;

/// Pending one-time code as stored in the cache
///
/// Cache-resident only: the durable store never sees a code. The entry is
/// keyed by (channel, identifier) and removed by the first verification
/// attempt regardless of outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingOtp {
    /// The 6-digit code
    pub code: String,

    /// User the code authenticates
    pub user_id: Uuid,
}

/// Result of a send-code request
///
/// Never carries the code itself; delivery is out of band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendCodeResult {
    /// Whether the code was issued
    pub success: bool,

    /// Human-readable status message
    pub message: String,
}
