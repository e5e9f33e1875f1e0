use super::*;

// =============================================================
// Name
// =============================================================

#[test]
fn name_rules() {
    assert!(name("").is_some());
    assert!(name("   ").is_some());
    assert!(name("A").is_some());
    assert!(name("Al").is_none());
    assert!(name(&"x".repeat(101)).is_some());
    assert!(name(&"x".repeat(100)).is_none());
}

// =============================================================
// Email
// =============================================================

#[test]
fn email_accepts_plausible_addresses() {
    assert!(email("editor@example.com").is_none());
    assert!(email("  a.b+c@sub.domain.org  ").is_none());
}

#[test]
fn email_rejects_structural_garbage() {
    assert_eq!(email("").as_deref(), Some("Email is required"));
    assert_eq!(email("no-at-sign").as_deref(), Some("Invalid email"));
    assert_eq!(email("@example.com").as_deref(), Some("Invalid email"));
    assert_eq!(email("user@nodot").as_deref(), Some("Invalid email"));
    assert_eq!(email("user@.com").as_deref(), Some("Invalid email"));
    assert_eq!(email("user name@example.com").as_deref(), Some("Invalid email"));
}

#[test]
fn email_enforces_max_length() {
    let long = format!("{}@example.com", "x".repeat(250));
    assert!(email(&long).is_some());
}

// =============================================================
// Passwords
// =============================================================

#[test]
fn new_password_enforces_full_policy() {
    assert!(new_password("").is_some());
    assert!(new_password("Sh0rt!").is_some());
    assert!(new_password("alllowercase1!").is_some());
    assert!(new_password("ALLUPPERCASE1!").is_some());
    assert!(new_password("NoDigits!!").is_some());
    assert!(new_password("NoSpecial11").is_some());
    assert!(new_password(&format!("Aa1!{}", "x".repeat(64))).is_some());
    assert!(new_password("Sup3r-secret").is_none());
}

#[test]
fn login_password_only_requires_presence() {
    // Seeded accounts predate the current policy; login must accept them.
    assert!(login_password("editor123").is_none());
    assert!(login_password("").is_some());
}
