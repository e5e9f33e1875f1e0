//! Route authorization gate.
//!
//! A pure decision function over the session snapshot; it holds no state and
//! must be re-evaluated on every render so login/logout/role changes take
//! effect without a reload. The rendering half lives in
//! `components::require_auth`.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::net::types::Role;

use super::auth::AuthPhase;

/// What a protected route should do right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Bootstrap has not resolved: show a non-committal loading state.
    /// Never redirect here; `user == None` is not authoritative yet.
    Loading,
    /// Known to be logged out: redirect to the login view, replacing
    /// history so back-navigation does not return to the protected page.
    Login,
    /// Authenticated but under-privileged: render access denied in place.
    /// No redirect; the user is known, just insufficient.
    Denied,
    /// Render the protected content.
    Allow,
}

/// Decide access for a protected route. Evaluated in order, first match
/// wins: not ready, no user, insufficient role, allow.
pub fn evaluate(phase: AuthPhase, role: Option<Role>, required: Option<Role>) -> RouteDecision {
    if phase != AuthPhase::Ready {
        return RouteDecision::Loading;
    }
    let Some(role) = role else {
        return RouteDecision::Login;
    };
    match required {
        Some(required) if role < required => RouteDecision::Denied,
        _ => RouteDecision::Allow,
    }
}
