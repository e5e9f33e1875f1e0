//! Top navigation bar with session-aware links.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::auth::{self, AuthState};

/// Header navigation. Compare/favourites links appear once logged in, the
/// admin link only for admins.
#[component]
pub fn Nav() -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        auth::logout(auth_state);
        navigate("/", NavigateOptions::default());
    };

    let greeting = move || {
        auth_state
            .get()
            .user
            .map(|u| format!("Hi, {} ({})", u.name, u.role.as_str()))
            .unwrap_or_default()
    };

    let is_admin = move || {
        auth_state
            .get()
            .user
            .is_some_and(|u| u.role == Role::Admin)
    };

    view! {
        <header class="nav">
            <a class="nav__brand" href="/">"SuperTeam"</a>
            <nav class="nav__links">
                <a href="/">"Browse"</a>
                <a href="/team">"Team Builder"</a>
                <Show when=move || auth_state.get().user.is_some()>
                    <a href="/compare">"Compare"</a>
                    <a href="/favorites">"Favourites"</a>
                </Show>
                <Show when=is_admin>
                    <a href="/admin/users">"Admin"</a>
                </Show>
            </nav>
            <div class="nav__session">
                <Show
                    when=move || auth_state.get().user.is_some()
                    fallback=|| view! {
                        <a class="btn" href="/login">"Login"</a>
                        <a class="btn" href="/register">"Register"</a>
                    }
                >
                    <span class="nav__greeting">{greeting}</span>
                    <button class="btn" on:click=on_logout.clone()>"Logout"</button>
                </Show>
            </div>
        </header>
    }
}
