use super::*;

// =============================================================
// Ordering: not-ready wins over everything
// =============================================================

#[test]
fn not_ready_never_redirects_and_never_renders() {
    for phase in [AuthPhase::Uninitialized, AuthPhase::Loading] {
        for role in [None, Some(Role::Viewer), Some(Role::Admin)] {
            for required in [None, Some(Role::Editor)] {
                assert_eq!(evaluate(phase, role, required), RouteDecision::Loading);
            }
        }
    }
}

#[test]
fn ready_without_user_redirects_to_login() {
    assert_eq!(
        evaluate(AuthPhase::Ready, None, None),
        RouteDecision::Login
    );
    assert_eq!(
        evaluate(AuthPhase::Ready, None, Some(Role::Admin)),
        RouteDecision::Login
    );
}

// =============================================================
// Role ranking
// =============================================================

#[test]
fn no_required_role_allows_any_authenticated_user() {
    for role in [Role::Viewer, Role::Editor, Role::Admin] {
        assert_eq!(
            evaluate(AuthPhase::Ready, Some(role), None),
            RouteDecision::Allow
        );
    }
}

#[test]
fn insufficient_role_is_denied_not_redirected() {
    assert_eq!(
        evaluate(AuthPhase::Ready, Some(Role::Viewer), Some(Role::Editor)),
        RouteDecision::Denied
    );
    assert_eq!(
        evaluate(AuthPhase::Ready, Some(Role::Editor), Some(Role::Admin)),
        RouteDecision::Denied
    );
}

#[test]
fn role_check_is_monotonic_in_rank() {
    let ranked = [Role::Viewer, Role::Editor, Role::Admin];
    for (i, required) in ranked.iter().enumerate() {
        for (j, role) in ranked.iter().enumerate() {
            let decision = evaluate(AuthPhase::Ready, Some(*role), Some(*required));
            if j >= i {
                assert_eq!(decision, RouteDecision::Allow, "{role:?} vs {required:?}");
            } else {
                assert_eq!(decision, RouteDecision::Denied, "{role:?} vs {required:?}");
            }
        }
    }
}

#[test]
fn exact_role_match_is_allowed() {
    assert_eq!(
        evaluate(AuthPhase::Ready, Some(Role::Editor), Some(Role::Editor)),
        RouteDecision::Allow
    );
}
