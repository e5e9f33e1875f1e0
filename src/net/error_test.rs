use super::*;

// =============================================================
// Structured error bodies
// =============================================================

#[test]
fn status_error_decodes_structured_body() {
    let err = status_error(
        422,
        r#"{"message":"Validation failed","errors":[{"field":"email","message":"Invalid email"}]}"#,
    );
    assert_eq!(err.status(), Some(422));
    assert_eq!(err.message(), "Validation failed");
    assert_eq!(err.field_errors().len(), 1);
    assert_eq!(err.field_errors()[0].field, "email");
}

#[test]
fn status_error_falls_back_to_raw_text() {
    let err = status_error(502, "Bad Gateway\n");
    assert_eq!(err.message(), "Bad Gateway");
    assert!(err.field_errors().is_empty());
}

#[test]
fn status_error_with_empty_body_reports_status() {
    let err = status_error(500, "");
    assert_eq!(err.message(), "request rejected with status 500");
}

#[test]
fn body_with_message_only_has_no_field_errors() {
    let err = status_error(401, r#"{"message":"Invalid credentials"}"#);
    assert_eq!(err.message(), "Invalid credentials");
    assert!(err.field_errors().is_empty());
}

// =============================================================
// Classification
// =============================================================

#[test]
fn auth_and_not_found_classification() {
    assert!(status_error(401, "{}").is_auth());
    assert!(status_error(403, "{}").is_auth());
    assert!(!status_error(404, "{}").is_auth());
    assert!(status_error(404, "{}").is_not_found());
    assert!(!ApiError::Network("boom".to_owned()).is_auth());
}

#[test]
fn network_and_timeout_messages() {
    assert_eq!(
        ApiError::Network("connection reset".to_owned()).message(),
        "request failed: connection reset"
    );
    assert_eq!(
        ApiError::Timeout(15_000).message(),
        "request timed out after 15000 ms"
    );
}
