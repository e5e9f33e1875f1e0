use super::*;

// CONFIG is thread-local and the test harness may run tests on any thread,
// so each test resets it rather than assuming a fresh instance.
fn reset_config() {
    CONFIG.with(|c| *c.borrow_mut() = Config::default());
}

// =============================================================
// Configuration
// =============================================================

#[test]
fn default_base_url_and_timeout() {
    reset_config();
    assert_eq!(url("/auth/me"), "/api/auth/me");
    CONFIG.with(|c| assert_eq!(c.borrow().timeout_ms, DEFAULT_TIMEOUT_MS));
}

#[test]
fn configure_overrides_base_url_and_strips_trailing_slash() {
    reset_config();
    configure(Some("http://localhost:5000/api/"), None);
    assert_eq!(url("/heroes"), "http://localhost:5000/api/heroes");
}

#[test]
fn configure_overrides_timeout_only() {
    reset_config();
    configure(None, Some(3_000));
    CONFIG.with(|c| assert_eq!(c.borrow().timeout_ms, 3_000));
    assert_eq!(url("/heroes"), "/api/heroes");
}

// =============================================================
// Credential attachment
// =============================================================

#[test]
fn bearer_header_carries_exact_token() {
    assert_eq!(
        bearer_value(Some("tok-abc.123")).as_deref(),
        Some("Bearer tok-abc.123")
    );
}

#[test]
fn no_token_means_no_authorization_header() {
    assert_eq!(bearer_value(None), None);
}

// =============================================================
// Admin listing query
// =============================================================

#[test]
fn admin_query_always_sends_pagination_and_sort() {
    let query = admin_users_query(2, 10, "", "", "createdAt", "desc");
    assert_eq!(
        query,
        vec![
            ("page", "2".to_owned()),
            ("limit", "10".to_owned()),
            ("sortBy", "createdAt".to_owned()),
            ("sortOrder", "desc".to_owned()),
        ]
    );
}

#[test]
fn admin_query_includes_filters_only_when_set() {
    let query = admin_users_query(1, 10, "alice", "editor", "name", "asc");
    assert!(query.contains(&("search", "alice".to_owned())));
    assert!(query.contains(&("role", "editor".to_owned())));
    assert!(query.contains(&("sortBy", "name".to_owned())));
    assert!(query.contains(&("sortOrder", "asc".to_owned())));
}
