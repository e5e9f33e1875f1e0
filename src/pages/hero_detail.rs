//! Hero detail page: powerstats, biography, appearance, favorite toggle,
//! and a rename dialog for editor/admin accounts.
//!
//! The favorite button works for everyone: logged-out users are sent to the
//! login page with `redirect`/`action=addfav`/`heroId` query params so the
//! add completes right after they sign in.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::error::ApiError;
use crate::net::types::Hero;
use crate::pages::not_found::NotFoundPage;
use crate::state::auth::AuthState;

/// Detail page for a single hero, keyed by the `:id` route param.
#[component]
pub fn HeroDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let hero_id = move || params.read().get("id").unwrap_or_default();

    let hero = LocalResource::new(move || {
        let id = hero_id();
        async move { crate::net::api::fetch_hero(&id).await }
    });

    // Membership in the favorites list, refetched after every toggle.
    let is_favorite = LocalResource::new(move || {
        let id = hero_id();
        let logged_in = auth.get().user.is_some();
        async move {
            if !logged_in {
                return false;
            }
            match crate::net::api::fetch_favorites().await {
                Ok(list) => list.iter().any(|h| h.id == id),
                Err(err) => {
                    leptos::logging::warn!("favorites lookup failed: {err}");
                    false
                }
            }
        }
    });

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_favorite = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let id = hero_id();
            if id.is_empty() {
                return;
            }
            if auth.get_untracked().user.is_none() {
                let target =
                    format!("/login?redirect=%2Fhero%2F{id}&action=addfav&heroId={id}");
                navigate(&target, NavigateOptions::default());
                return;
            }
            let currently = is_favorite.get_untracked().unwrap_or(false);
            let is_favorite = is_favorite.clone();
            leptos::task::spawn_local(async move {
                let result = if currently {
                    crate::net::api::remove_favorite(&id).await
                } else {
                    crate::net::api::add_favorite(&id).await
                };
                if let Err(err) = result {
                    leptos::logging::warn!("favorite toggle failed: {err}");
                }
                is_favorite.refetch();
            });
        }
    };

    // Rename dialog state.
    let show_rename = RwSignal::new(false);
    let rename_value = RwSignal::new(String::new());
    let on_cancel = Callback::new(move |()| show_rename.set(false));

    let can_edit = move || {
        auth.get()
            .user
            .is_some_and(|u| u.role.can_edit())
    };

    view! {
        <Suspense fallback=|| view! { <p class="muted">"Loading hero..."</p> }>
            {move || {
                hero.get().map(|result| match result {
                    Ok(h) => {
                        let favorite_label = move || {
                            if is_favorite.get().unwrap_or(false) {
                                "Remove from favourites"
                            } else {
                                "Add to favourites"
                            }
                        };
                        let open_rename = {
                            let name = h.name.clone();
                            move |_| {
                                rename_value.set(name.clone());
                                show_rename.set(true);
                            }
                        };
                        view! {
                            <article class="hero-detail">
                                <header class="hero-detail__header">
                                    <img class="hero-detail__image" src=h.image_url.clone() alt=h.name.clone()/>
                                    <div>
                                        <h1>{h.name.clone()}</h1>
                                        <p class="muted">{h.biography.full_name.clone()}</p>
                                        <div class="hero-detail__actions">
                                            <button class="btn" on:click=on_favorite.clone()>
                                                {favorite_label}
                                            </button>
                                            <Show when=can_edit>
                                                <button class="btn" on:click=open_rename.clone()>
                                                    "Rename"
                                                </button>
                                            </Show>
                                        </div>
                                    </div>
                                </header>
                                <HeroFacts hero=h.clone()/>
                            </article>
                            <Show when=move || show_rename.get()>
                                <RenameHeroDialog
                                    hero_id=hero_id()
                                    name=rename_value
                                    on_cancel=on_cancel
                                    hero=hero.clone()
                                />
                            </Show>
                        }
                            .into_any()
                    }
                    Err(err) if err.is_not_found() => view! { <NotFoundPage/> }.into_any(),
                    Err(err) => {
                        view! { <div class="error-banner">{err.message()}</div> }.into_any()
                    }
                })
            }}
        </Suspense>
    }
}

/// Powerstats, biography, and appearance panels.
#[component]
fn HeroFacts(hero: Hero) -> impl IntoView {
    let stats = [
        ("Intelligence", hero.powerstats.intelligence),
        ("Strength", hero.powerstats.strength),
        ("Speed", hero.powerstats.speed),
        ("Durability", hero.powerstats.durability),
        ("Power", hero.powerstats.power),
        ("Combat", hero.powerstats.combat),
    ];

    view! {
        <section class="hero-detail__facts">
            <div class="card">
                <h2>"Powerstats"</h2>
                <ul class="stat-list">
                    {stats
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <li class="stat-list__row">
                                    <span>{label}</span>
                                    <span>{value}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
            <div class="card">
                <h2>"Biography"</h2>
                <p>{format!("Publisher: {}", hero.biography.publisher)}</p>
                <p>{format!("Alignment: {}", hero.biography.alignment)}</p>
            </div>
            <div class="card">
                <h2>"Appearance"</h2>
                <p>{format!("Gender: {}", hero.appearance.gender)}</p>
                <p>{format!("Race: {}", hero.appearance.race)}</p>
            </div>
        </section>
    }
}

/// Modal dialog for renaming a hero. Editor/admin only.
#[component]
fn RenameHeroDialog(
    hero_id: String,
    name: RwSignal<String>,
    on_cancel: Callback<()>,
    hero: LocalResource<Result<Hero, ApiError>>,
) -> impl IntoView {
    let submit = Callback::new(move |()| {
        let new_name = name.get();
        if new_name.trim().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let new_name = new_name.trim().to_owned();
            let hero_id = hero_id.clone();
            let hero = hero.clone();
            leptos::task::spawn_local(async move {
                let patch = serde_json::json!({ "name": new_name });
                match crate::net::api::update_hero(&hero_id, &patch).await {
                    Ok(()) => {
                        hero.refetch();
                        on_cancel.run(());
                    }
                    Err(err) => {
                        leptos::logging::warn!("hero rename failed: {err}");
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &hero_id;
            let _ = &hero;
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Rename Hero"</h2>
                <label class="dialog__label">
                    "Hero Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            name.set(event_target_value(&ev));
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
