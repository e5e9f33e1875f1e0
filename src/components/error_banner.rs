//! Inline error banner, hidden while the message is empty.

use leptos::prelude::*;

/// Renders a dismissable-looking banner for a reactive error message.
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <div class="error-banner">{move || message.get()}</div>
        </Show>
    }
}
