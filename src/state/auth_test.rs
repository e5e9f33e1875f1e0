use super::*;
use crate::net::error::ApiErrorBody;
use crate::net::types::Role;

fn user(role: Role) -> User {
    User {
        id: "u-1".to_owned(),
        name: "Editor".to_owned(),
        email: "editor@example.com".to_owned(),
        role,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn auth_state_default_is_unauthenticated_and_uninitialized() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert_eq!(state.phase, AuthPhase::Uninitialized);
    assert!(state.error.is_empty());
    assert!(!state.ready());
}

// =============================================================
// Bootstrap lifecycle
// =============================================================

#[test]
fn begin_bootstrap_runs_exactly_once() {
    let mut state = AuthState::default();
    assert!(state.begin_bootstrap());
    assert_eq!(state.phase, AuthPhase::Loading);
    assert!(!state.begin_bootstrap());

    state.apply_bootstrap(state.generation, None);
    assert!(!state.begin_bootstrap());
}

#[test]
fn readiness_is_monotonic_across_all_operations() {
    let mut state = AuthState::default();
    state.begin_bootstrap();
    state.apply_bootstrap(state.generation, Some(user(Role::Viewer)));
    assert!(state.ready());

    let generation = state.begin_attempt();
    assert!(state.ready());
    state.apply_failure("nope".to_owned());
    assert!(state.ready());
    state.apply_login(user(Role::Editor));
    assert!(state.ready());
    state.apply_logout();
    assert!(state.ready());
    state.apply_bootstrap(generation, None);
    assert!(state.ready());
}

#[test]
fn bootstrap_without_user_leaves_error_unchanged() {
    let mut state = AuthState {
        error: "previous failure".to_owned(),
        ..AuthState::default()
    };
    state.begin_bootstrap();
    state.apply_bootstrap(state.generation, None);

    assert!(state.user.is_none());
    assert!(state.ready());
    assert_eq!(state.error, "previous failure");
}

#[test]
fn bootstrap_success_sets_user_and_clears_error() {
    let mut state = AuthState {
        error: "previous failure".to_owned(),
        ..AuthState::default()
    };
    state.begin_bootstrap();
    state.apply_bootstrap(state.generation, Some(user(Role::Admin)));

    assert_eq!(state.user.as_ref().map(|u| u.role), Some(Role::Admin));
    assert!(state.error.is_empty());
}

#[test]
fn stale_bootstrap_still_marks_ready_but_does_not_clobber_login() {
    let mut state = AuthState::default();
    state.begin_bootstrap();
    let bootstrap_generation = state.generation;

    // A login completes while the bootstrap request is still in flight.
    state.begin_attempt();
    state.apply_login(user(Role::Editor));

    // The late bootstrap resolves as "logged out" and must be discarded,
    // except for the readiness flag.
    state.apply_bootstrap(bootstrap_generation, None);
    assert!(state.ready());
    assert_eq!(state.user.as_ref().map(|u| u.role), Some(Role::Editor));
}

// =============================================================
// Login / failure
// =============================================================

#[test]
fn begin_attempt_clears_error_and_bumps_generation() {
    let mut state = AuthState {
        error: "old".to_owned(),
        ..AuthState::default()
    };
    let g1 = state.begin_attempt();
    assert!(state.error.is_empty());
    let g2 = state.begin_attempt();
    assert!(g2 > g1);
}

#[test]
fn failed_login_keeps_existing_session() {
    let mut state = AuthState::default();
    state.apply_login(user(Role::Viewer));

    state.begin_attempt();
    state.apply_failure("Invalid credentials".to_owned());

    assert_eq!(state.error, "Invalid credentials");
    assert!(state.user.is_some());
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_is_idempotent() {
    let mut state = AuthState::default();
    state.begin_bootstrap();
    state.apply_bootstrap(state.generation, Some(user(Role::Viewer)));

    state.apply_logout();
    let after_once = (state.user.clone(), state.phase, state.error.clone());
    state.apply_logout();
    let after_twice = (state.user.clone(), state.phase, state.error.clone());

    assert!(after_once.0.is_none());
    assert_eq!(after_once, after_twice);
}

#[test]
fn logout_invalidates_in_flight_login() {
    let mut state = AuthState::default();
    let generation = state.begin_attempt();
    state.apply_logout();

    // The login response resolves after the logout; the generation check
    // in `login` would see a mismatch and drop it.
    assert_ne!(state.generation, generation);
}

// =============================================================
// AuthFailure mapping
// =============================================================

#[test]
fn auth_failure_carries_server_message_and_fields() {
    let err = ApiError::Status {
        status: 422,
        body: ApiErrorBody {
            message: "Validation failed".to_owned(),
            errors: vec![FieldError {
                field: "password".to_owned(),
                message: "Password too weak".to_owned(),
            }],
        },
    };
    let failure = AuthFailure::from_api(&err, "Login failed");
    assert_eq!(failure.message, "Validation failed");
    assert_eq!(failure.field_message("password"), Some("Password too weak"));
    assert_eq!(failure.field_message("email"), None);
}

#[test]
fn auth_failure_falls_back_to_generic_message() {
    let err = ApiError::Status {
        status: 500,
        body: ApiErrorBody::default(),
    };
    let failure = AuthFailure::from_api(&err, "Login failed");
    // An empty server message falls back to the status line, never empty.
    assert!(!failure.message.is_empty());
    assert!(failure.fields.is_empty());
}
