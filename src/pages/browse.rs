//! Public hero catalog with search and pagination.

use leptos::prelude::*;

use crate::components::hero_card::HeroCard;
use crate::net::types::HeroPage;

const PAGE_SIZE: u32 = 24;

/// Landing page. Anyone can browse and search the catalog.
#[component]
pub fn BrowsePage() -> impl IntoView {
    let search = RwSignal::new(String::new());
    let page = RwSignal::new(1_u32);

    let heroes = LocalResource::new(move || {
        let q = search.get();
        let page = page.get();
        async move { crate::net::api::fetch_heroes(&q, page, PAGE_SIZE).await }
    });

    let on_search = move |ev| {
        search.set(event_target_value(&ev));
        page.set(1);
    };

    view! {
        <section class="browse">
            <h1>"Heroes"</h1>
            <input
                class="input browse__search"
                type="search"
                placeholder="Search heroes..."
                prop:value=move || search.get()
                on:input=on_search
            />
            <Suspense fallback=|| view! { <p class="muted">"Loading heroes..."</p> }>
                {move || {
                    heroes.get().map(|result| match result {
                        Ok(hero_page) => view! { <HeroGrid hero_page page/> }.into_any(),
                        Err(err) => {
                            view! { <div class="error-banner">{err.message()}</div> }.into_any()
                        }
                    })
                }}
            </Suspense>
        </section>
    }
}

#[component]
fn HeroGrid(hero_page: HeroPage, page: RwSignal<u32>) -> impl IntoView {
    let total = hero_page.total;
    let pages = total.div_ceil(u64::from(PAGE_SIZE)).max(1);
    let current = page.get_untracked();

    view! {
        <div class="hero-grid">
            {hero_page
                .items
                .into_iter()
                .map(|hero| {
                    let subtitle = hero.biography.publisher.clone();
                    view! { <HeroCard hero subtitle/> }
                })
                .collect_view()}
        </div>
        <div class="pager">
            <button
                class="btn"
                disabled=current <= 1
                on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
            >
                "Previous"
            </button>
            <span class="pager__status">{format!("Page {current} of {pages} ({total} heroes)")}</span>
            <button
                class="btn"
                disabled=u64::from(current) >= pages
                on:click=move |_| page.update(|p| *p += 1)
            >
                "Next"
            </button>
        </div>
    }
}
