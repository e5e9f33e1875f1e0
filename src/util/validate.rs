//! Client-side form validation for the login and register pages.
//!
//! Mirrors the server's account policy so most mistakes are caught before a
//! round trip. The server remains authoritative; its field errors override
//! anything decided here.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Validate a display name: required, 2-100 characters after trimming.
pub fn name(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some("Name is required".to_owned());
    }
    if trimmed.chars().count() < 2 {
        return Some("Name must be at least 2 characters".to_owned());
    }
    if trimmed.chars().count() > 100 {
        return Some("Name must be at most 100 characters".to_owned());
    }
    None
}

/// Validate an email address: required, structurally plausible, max 254
/// characters. Deliverability is the server's problem.
pub fn email(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some("Email is required".to_owned());
    }
    if trimmed.chars().count() > 254 {
        return Some("Email must be at most 254 characters".to_owned());
    }
    if !looks_like_email(trimmed) {
        return Some("Invalid email".to_owned());
    }
    None
}

/// Validate a new password against the account policy: 8-64 characters with
/// lowercase, uppercase, digit, and special character. Used for registration
/// only; login accepts whatever was valid when the account was created.
pub fn new_password(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Password is required".to_owned());
    }
    if value.chars().count() < 8 {
        return Some("Password must be at least 8 characters".to_owned());
    }
    if value.chars().count() > 64 {
        return Some("Password must be at most 64 characters".to_owned());
    }
    if !value.chars().any(|c| c.is_ascii_lowercase()) {
        return Some("Password must include a lowercase character".to_owned());
    }
    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("Password must include an uppercase character".to_owned());
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Some("Password must include a digit".to_owned());
    }
    if value.chars().all(char::is_alphanumeric) {
        return Some("Password must include a special character".to_owned());
    }
    None
}

/// Validate a password for login: presence only.
pub fn login_password(value: &str) -> Option<String> {
    if value.is_empty() {
        Some("Password is required".to_owned())
    } else {
        None
    }
}

/// Minimal structural check: one `@`, a non-empty local part, and a domain
/// containing an interior dot.
fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.len() < 3 || value.contains(char::is_whitespace) {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}
