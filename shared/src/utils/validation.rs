//! Contact identifier validation helpers

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
});

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    // E.164: leading +, 8 to 15 digits total
    Regex::new(r"^\+[1-9]\d{7,14}$").unwrap()
});

/// Check if an email address has a plausible format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Check if a phone number is in E.164 format
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// Mask a contact identifier for logging
///
/// Keeps only the last four characters visible.
pub fn mask_identifier(identifier: &str) -> String {
    if identifier.len() <= 4 {
        "****".to_string()
    } else {
        format!("***{}", &identifier[identifier.len() - 4..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("a.b+tag@sub.domain.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
    }

    #[test]
    fn test_valid_phones() {
        assert!(is_valid_phone("+61412345678"));
        assert!(is_valid_phone("+8613800138000"));
        assert!(!is_valid_phone("0412345678"));
        assert!(!is_valid_phone("+123"));
    }

    #[test]
    fn test_mask_identifier() {
        assert_eq!(mask_identifier("+61412345678"), "***5678");
        assert_eq!(mask_identifier("abc"), "****");
    }
}
