//! Reusable card component for hero grid listings.

use leptos::prelude::*;

use crate::net::types::Hero;

/// A clickable card linking to a hero's detail page.
#[component]
pub fn HeroCard(
    hero: Hero,
    /// Optional secondary line (publisher, alignment, ...).
    #[prop(optional, into)]
    subtitle: Option<String>,
) -> impl IntoView {
    let href = format!("/hero/{}", hero.id);

    view! {
        <a class="hero-card" href=href>
            <img class="hero-card__image" src=hero.image_url alt=hero.name.clone()/>
            <span class="hero-card__name">{hero.name}</span>
            <span class="hero-card__subtitle">{subtitle}</span>
        </a>
    }
}
