//! Registration page.
//!
//! Applies the full account policy client-side (name length, email shape,
//! password strength) before the request goes out, then maps server field
//! errors back onto the inputs the same way the login page does.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::state::auth::AuthState;
use crate::util::validate;

/// Registration form. A successful signup logs the user straight in.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let name_error = RwSignal::new(None::<String>);
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let submit = move || {
        if submitting.get_untracked() {
            return;
        }
        name_error.set(validate::name(&name.get_untracked()));
        email_error.set(validate::email(&email.get_untracked()));
        password_error.set(validate::new_password(&password.get_untracked()));
        if name_error.get_untracked().is_some()
            || email_error.get_untracked().is_some()
            || password_error.get_untracked().is_some()
        {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            submitting.set(true);
            leptos::task::spawn_local(async move {
                let result = crate::state::auth::register(
                    auth,
                    name.get_untracked().trim(),
                    email.get_untracked().trim(),
                    &password.get_untracked(),
                )
                .await;
                submitting.set(false);

                match result {
                    Ok(()) => navigate("/", NavigateOptions::default()),
                    Err(failure) => {
                        if let Some(msg) = failure.field_message("name") {
                            name_error.set(Some(msg.to_owned()));
                        }
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
            <h1>"Register"</h1>
            <ErrorBanner message=Signal::derive(move || auth.get().error)/>

            <input
                class="input"
                type="text"
                placeholder="Name"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            {move || name_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })}

            <input
                class="input"
                type="text"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            {move || email_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })}

            <input
                class="input"
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            {move || password_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })}

            <button class="btn" type="submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Creating account..." } else { "Register" }}
            </button>
        </form>
    }
}
