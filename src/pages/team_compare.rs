//! Team comparison: pick up to five heroes per side via a debounced search,
//! then ask the server which side wins.
//!
//! Each picker debounces its search by 300 ms and tags every lookup with a
//! generation number. Results arriving for an older generation are dropped
//! so a slow early query never overwrites a newer one.

use leptos::prelude::*;

use crate::net::types::Hero;

const TEAM_LIMIT: usize = 5;
const SEARCH_PAGE_SIZE: u32 = 8;
#[cfg(feature = "hydrate")]
const SEARCH_DEBOUNCE_MS: u64 = 300;

#[component]
pub fn TeamComparePage() -> impl IntoView {
    let team_a = RwSignal::new(Vec::<Hero>::new());
    let team_b = RwSignal::new(Vec::<Hero>::new());
    let result = RwSignal::new(None::<crate::net::types::CompareResult>);
    let error = RwSignal::new(String::new());
    let comparing = RwSignal::new(false);

    let can_compare = move || {
        !team_a.get().is_empty() && !team_b.get().is_empty() && !comparing.get()
    };

    let on_compare = move |_| {
        if !can_compare() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let ids_a: Vec<String> =
                team_a.get_untracked().iter().map(|h| h.id.clone()).collect();
            let ids_b: Vec<String> =
                team_b.get_untracked().iter().map(|h| h.id.clone()).collect();
            comparing.set(true);
            error.set(String::new());
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::compare_teams(&ids_a, &ids_b).await;
                comparing.set(false);
                match outcome {
                    Ok(verdict) => result.set(Some(verdict)),
                    Err(err) if err.is_auth() => {
                        error.set("Please login to compare teams.".to_owned());
                    }
                    Err(err) => error.set(err.message()),
                }
            });
        }
    };

    view! {
        <section class="compare">
            <h1>"Compare Teams"</h1>
            <div class="compare__sides">
                <TeamPicker label="Team A" team=team_a/>
                <TeamPicker label="Team B" team=team_b/>
            </div>

            <button
                class="btn btn--primary"
                disabled=move || !can_compare()
                on:click=on_compare
            >
                {move || if comparing.get() { "Comparing..." } else { "Compare" }}
            </button>

            <Show when=move || !error.get().is_empty()>
                <div class="error-banner">{move || error.get()}</div>
            </Show>

            {move || {
                result.get().map(|verdict| {
                    view! {
                        <div class="compare__verdict card">
                            <h2>{verdict.winner.unwrap_or_else(|| "Draw".to_owned())}</h2>
                            <p>{verdict.explanation.unwrap_or_default()}</p>
                        </div>
                    }
                })
            }}
        </section>
    }
}

/// One side of the comparison: a debounced hero search plus the picked team.
#[component]
fn TeamPicker(label: &'static str, team: RwSignal<Vec<Hero>>) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let results = RwSignal::new(Vec::<Hero>::new());
    // Bumped on every keystroke; async lookups only commit if still current.
    let search_generation = RwSignal::new(0_u64);

    let on_input = move |ev| {
        let text = event_target_value(&ev);
        query.set(text.clone());
        let generation = search_generation.get_untracked() + 1;
        search_generation.set(generation);

        if text.trim().is_empty() {
            results.set(Vec::new());
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(SEARCH_DEBOUNCE_MS))
                .await;
            if search_generation.get_untracked() != generation {
                return;
            }
            match crate::net::api::fetch_heroes(text.trim(), 1, SEARCH_PAGE_SIZE).await {
                Ok(page) => {
                    if search_generation.get_untracked() == generation {
                        results.set(page.items);
                    }
                }
                Err(err) => {
                    leptos::logging::warn!("hero search failed: {err}");
                }
            }
        });
    };

    let pick = move |hero: Hero| {
        team.update(|members| {
            if members.len() < TEAM_LIMIT && !members.iter().any(|h| h.id == hero.id) {
                members.push(hero);
            }
        });
    };

    let remove = move |id: String| {
        team.update(|members| members.retain(|h| h.id != id));
    };

    view! {
        <div class="compare__picker card">
            <h2>{label}</h2>
            <ul class="compare__team">
                {move || {
                    team.get()
                        .into_iter()
                        .map(|hero| {
                            let id = hero.id.clone();
                            view! {
                                <li class="compare__member">
                                    <span>{hero.name}</span>
                                    <button
                                        class="btn btn--small"
                                        on:click=move |_| remove(id.clone())
                                    >
                                        "Remove"
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <input
                class="input"
                type="search"
                placeholder="Search heroes to add..."
                prop:value=move || query.get()
                on:input=on_input
            />
            <ul class="compare__results">
                {move || {
                    results
                        .get()
                        .into_iter()
                        .map(|hero| {
                            let name = hero.name.clone();
                            let full = team.get().len() >= TEAM_LIMIT;
                            view! {
                                <li>
                                    <button
                                        class="btn btn--small"
                                        disabled=full
                                        on:click=move |_| pick(hero.clone())
                                    >
                                        {name}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
