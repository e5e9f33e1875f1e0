//! Login page.
//!
//! Validates presence and email shape client-side, then runs the session
//! store's login operation. Field-level server errors are attached to the
//! matching inputs through an explicit field table; the generic message
//! comes from the session store itself.
//!
//! Honors three query params set by other pages: `redirect` (where to go
//! after login, default `/`), and `action=addfav` + `heroId` (replay a
//! favorite add that was deferred because the user was logged out).

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::error_banner::ErrorBanner;
use crate::state::auth::AuthState;
use crate::util::validate;

/// Login form. Seeded with the demo editor account credentials.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();
    #[cfg(feature = "hydrate")]
    let query = use_query_map();

    let email = RwSignal::new("editor@example.com".to_owned());
    let password = RwSignal::new("editor123".to_owned());
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let show_password = RwSignal::new(false);
    let submitting = RwSignal::new(false);

    let submit = move || {
        if submitting.get_untracked() {
            return;
        }
        email_error.set(validate::email(&email.get_untracked()));
        password_error.set(validate::login_password(&password.get_untracked()));
        if email_error.get_untracked().is_some() || password_error.get_untracked().is_some() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let params = query.get_untracked();
            let redirect = params.get("redirect").unwrap_or_else(|| "/".to_owned());
            let action = params.get("action");
            let hero_id = params.get("heroId");

            submitting.set(true);
            leptos::task::spawn_local(async move {
                let result = crate::state::auth::login(
                    auth,
                    email.get_untracked().trim(),
                    &password.get_untracked(),
                )
                .await;
                submitting.set(false);

                match result {
                    Ok(()) => {
                        // Replay the favorite add the user originally asked
                        // for, then continue to where they came from.
                        if action.as_deref() == Some("addfav") {
                            if let Some(hero_id) = hero_id {
                                if let Err(err) = crate::net::api::add_favorite(&hero_id).await {
                                    leptos::logging::warn!("deferred favorite add failed: {err}");
                                }
                            }
                        }
                        navigate(&redirect, NavigateOptions::default());
                    }
                    Err(failure) => {
                        // Server field -> form input, explicitly.
                        if let Some(msg) = failure.field_message("email") {
                            email_error.set(Some(msg.to_owned()));
                        }
                        if let Some(msg) = failure.field_message("password") {
                            password_error.set(Some(msg.to_owned()));
                        }
                    }
                }
            });
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit();
    };

    view! {
        <form class="auth-form card" on:submit=on_submit>
            <h1>"Login"</h1>
            <ErrorBanner message=Signal::derive(move || auth.get().error)/>

            <input
                class="input"
                type="text"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            {move || email_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })}

            <div class="auth-form__password">
                <input
                    class="input"
                    placeholder="Password"
                    type=move || if show_password.get() { "text" } else { "password" }
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="auth-form__reveal"
                    on:click=move |_| show_password.update(|v| *v = !*v)
                >
                    {move || if show_password.get() { "Hide" } else { "Show" }}
                </button>
            </div>
            {move || password_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })}

            <button class="btn" type="submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Logging in..." } else { "Login" }}
            </button>
        </form>
    }
}
