//! Fallback page for unknown routes and missing heroes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found card">
            <h1>"404"</h1>
            <p>"We could not find that page."</p>
            <a class="btn" href="/">"Back to browsing"</a>
        </section>
    }
}
