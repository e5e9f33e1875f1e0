//! Favorites grid. Wrapped in `RequireAuth` at the router level.

use leptos::prelude::*;

use crate::components::hero_card::HeroCard;

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let favorites = LocalResource::new(|| crate::net::api::fetch_favorites());

    view! {
        <section class="favorites">
            <h1>"Your Favourites"</h1>
            <Suspense fallback=|| view! { <p class="muted">"Loading favourites..."</p> }>
                {move || {
                    favorites.get().map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! {
                                <p class="muted">
                                    "Nothing here yet. Browse the catalog and add some heroes."
                                </p>
                            }
                                .into_any()
                        }
                        Ok(list) => {
                            view! {
                                <div class="hero-grid">
                                    {list
                                        .into_iter()
                                        .map(|hero| {
                                            let subtitle = hero.biography.publisher.clone();
                                            view! { <HeroCard hero subtitle/> }
                                        })
                                        .collect_view()}
                                </div>
                            }
                                .into_any()
                        }
                        Err(err) => {
                            view! { <div class="error-banner">{err.message()}</div> }.into_any()
                        }
                    })
                }}
            </Suspense>
        </section>
    }
}
