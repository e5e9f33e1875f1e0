//! Team builder: asks the server for a recommended five-hero team by
//! strategy and focus stat.

use leptos::prelude::*;

use crate::components::hero_card::HeroCard;
use crate::net::types::Hero;

const TEAM_SIZE: u32 = 5;

const STRATEGIES: [(&str, &str); 3] = [
    ("balanced", "Balanced"),
    ("power", "Stat focused"),
    ("random", "Random"),
];

const STATS: [(&str, &str); 6] = [
    ("intelligence", "Intelligence"),
    ("strength", "Strength"),
    ("speed", "Speed"),
    ("durability", "Durability"),
    ("power", "Power"),
    ("combat", "Combat"),
];

#[component]
pub fn TeamBuilderPage() -> impl IntoView {
    let strategy = RwSignal::new("balanced".to_owned());
    let stat = RwSignal::new("power".to_owned());
    let team = RwSignal::new(Vec::<Hero>::new());
    let error = RwSignal::new(String::new());
    let loading = RwSignal::new(false);

    let on_recommend = move |_| {
        if loading.get_untracked() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            error.set(String::new());
            leptos::task::spawn_local(async move {
                let result = crate::net::api::recommend_team(
                    &strategy.get_untracked(),
                    &stat.get_untracked(),
                    TEAM_SIZE,
                )
                .await;
                loading.set(false);
                match result {
                    Ok(heroes) => team.set(heroes),
                    Err(err) => error.set(err.message()),
                }
            });
        }
    };

    view! {
        <section class="team-builder">
            <h1>"Team Builder"</h1>
            <div class="team-builder__controls">
                <label>
                    "Strategy"
                    <select
                        class="input"
                        on:change=move |ev| strategy.set(event_target_value(&ev))
                    >
                        {STRATEGIES
                            .into_iter()
                            .map(|(value, label)| {
                                view! {
                                    <option value=value selected=move || strategy.get() == value>
                                        {label}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <Show when=move || strategy.get() == "power">
                    <label>
                        "Focus stat"
                        <select
                            class="input"
                            on:change=move |ev| stat.set(event_target_value(&ev))
                        >
                            {STATS
                                .into_iter()
                                .map(|(value, label)| {
                                    view! {
                                        <option value=value selected=move || stat.get() == value>
                                            {label}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                </Show>
                <button class="btn btn--primary" disabled=move || loading.get() on:click=on_recommend>
                    {move || if loading.get() { "Building..." } else { "Recommend a team" }}
                </button>
            </div>

            <Show when=move || !error.get().is_empty()>
                <div class="error-banner">{move || error.get()}</div>
            </Show>

            <Show when=move || !team.get().is_empty()>
                <div class="hero-grid">
                    {move || {
                        team.get()
                            .into_iter()
                            .map(|hero| {
                                let subtitle = hero.biography.alignment.clone();
                                view! { <HeroCard hero subtitle/> }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </section>
    }
}
