//! Helper functions and utilities
//!
//! Client-side validation helpers used by the services before a request is
//! dispatched, mirroring the required-field checks the Mini App forms perform.

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    email.contains('@') && email.contains('.') && email.len() > 5
}

/// Validate phone number format (basic validation)
pub fn is_valid_phone(phone: &str) -> bool {
    phone
        .chars()
        .all(|c| c.is_ascii_digit() || c == '+' || c == '-' || c == ' ' || c == '(' || c == ')')
        && phone.chars().filter(|c| c.is_ascii_digit()).count() >= 10
}

/// Check that a required text field is non-empty after trimming
pub fn require_field(value: &str, name: &str) -> crate::Result<()> {
    if value.trim().is_empty() {
        return Err(crate::DomovoyError::InvalidInput(format!(
            "{name} is required"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("resident@example.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("no-at-sign.com"));
    }

    #[test]
    fn test_is_valid_phone() {
        assert!(is_valid_phone("+7 (900) 123-45-67"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("not a phone"));
    }

    #[test]
    fn test_require_field() {
        assert!(require_field("Протечка", "title").is_ok());
        assert!(require_field("   ", "title").is_err());
    }

}
