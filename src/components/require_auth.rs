//! Gate component for protected routes.
//!
//! Wraps a route's content and re-evaluates `state::gate::evaluate` on every
//! render from the latest session snapshot, so login, logout, and role
//! changes take effect without a reload. While the session bootstrap is
//! unresolved it renders a loading placeholder and never redirects; a
//! confirmed logged-out state redirects to `/login` with history replacement.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::state::gate::{self, RouteDecision};

/// Renders its children only when the current session passes the gate.
#[component]
pub fn RequireAuth(
    /// Minimum role required; `None` means any authenticated user.
    #[prop(optional, into)]
    required_role: Option<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let decision = move || {
        let state = auth.get();
        gate::evaluate(state.phase, state.user.as_ref().map(|u| u.role), required_role)
    };

    // Redirect reactively. History is replaced so back-navigation does not
    // land on the protected page again.
    Effect::new(move || {
        if decision() == RouteDecision::Login {
            navigate(
                "/login",
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    view! {
        {move || match decision() {
            RouteDecision::Loading | RouteDecision::Login => view! {
                <p class="route-gate__loading">"Loading..."</p>
            }
                .into_any(),
            RouteDecision::Denied => view! {
                <div class="route-gate__denied card">
                    <h1>"Access denied"</h1>
                    <p>"You do not have permission to view this page."</p>
                </div>
            }
                .into_any(),
            RouteDecision::Allow => children().into_any(),
        }}
    }
}
