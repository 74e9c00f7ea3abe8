//! User entity representing a registered user in the WorkLine system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::one_time_secret::OtpChannel;

/// Represents the type of account in the marketplace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    /// A tradesperson looking for jobs
    Worker,
    /// A business posting jobs
    Employer,
}

impl AccountType {
    /// String form used in token claims
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Worker => "WORKER",
            AccountType::Employer => "EMPLOYER",
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User entity representing a registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Primary email contact, if known
    pub email: Option<String>,

    /// Primary phone contact (E.164), if known
    pub phone: Option<String>,

    /// Given name
    pub first_name: Option<String>,

    /// Family name
    pub last_name: Option<String>,

    /// Account type, None until the user has chosen one
    pub account_type: Option<AccountType>,

    /// Whether the email contact has been verified via OTP
    pub email_verified: bool,

    /// Whether the phone contact has been verified via OTP
    pub phone_verified: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,

    /// Timestamp of the user's last login
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Creates a new user registering with an email address
    pub fn new_with_email(
        email: String,
        account_type: AccountType,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: Some(email),
            phone: None,
            first_name,
            last_name,
            account_type: Some(account_type),
            email_verified: false,
            phone_verified: false,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        }
    }

    /// Creates a minimal placeholder user for a contact seen for the first
    /// time on an OTP send. Verification flags stay false until the code is
    /// verified; the account type is chosen later.
    pub fn placeholder(channel: OtpChannel, identifier: String) -> Self {
        let now = Utc::now();
        let (email, phone) = match channel {
            OtpChannel::Email => (Some(identifier), None),
            OtpChannel::Mobile => (None, Some(identifier)),
        };
        Self {
            id: Uuid::new_v4(),
            email,
            phone,
            first_name: None,
            last_name: None,
            account_type: None,
            email_verified: false,
            phone_verified: false,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        }
    }

    /// Sets the account type
    pub fn set_account_type(&mut self, account_type: AccountType) {
        self.account_type = Some(account_type);
        self.updated_at = Utc::now();
    }

    /// Marks the email contact as verified
    pub fn verify_email(&mut self) {
        self.email_verified = true;
        self.updated_at = Utc::now();
    }

    /// Marks the phone contact as verified
    pub fn verify_phone(&mut self) {
        self.phone_verified = true;
        self.updated_at = Utc::now();
    }

    /// Marks the contact for the given channel as verified
    pub fn verify_channel(&mut self, channel: OtpChannel) {
        match channel {
            OtpChannel::Email => self.verify_email(),
            OtpChannel::Mobile => self.verify_phone(),
        }
    }

    /// Updates the last login timestamp
    pub fn update_last_login(&mut self) {
        self.last_login_at = Some(Utc::now());
        self.updated_at = Utc::now();
    }

    /// Checks if the user has chosen an account type
    pub fn has_account_type(&self) -> bool {
        self.account_type.is_some()
    }

    /// Checks if the user is a worker
    pub fn is_worker(&self) -> bool {
        matches!(self.account_type, Some(AccountType::Worker))
    }

    /// Checks if the user is an employer
    pub fn is_employer(&self) -> bool {
        matches!(self.account_type, Some(AccountType::Employer))
    }
}
