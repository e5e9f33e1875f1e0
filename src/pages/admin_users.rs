//! Admin user management: searchable, filterable, paginated user table with
//! role changes and account deletion.
//!
//! The admin's own row is read-only. Deletes go through the browser's
//! confirm dialog. Every mutation refetches the current page so the table
//! always reflects the server.

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::{Role, UserPage};
use crate::state::auth::AuthState;

const PAGE_SIZE: u32 = 10;

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let search = RwSignal::new(String::new());
    let role_filter = RwSignal::new(String::new());
    // Combined "field-order" value, split before it reaches the API.
    let sort = RwSignal::new("createdAt-desc".to_owned());
    let page = RwSignal::new(1_u32);
    let error = RwSignal::new(String::new());
    // Ids with a mutation in flight; their controls are disabled.
    let updating = RwSignal::new(Vec::<String>::new());

    let users = LocalResource::new(move || {
        let search = search.get();
        let role = role_filter.get();
        let sort = sort.get();
        let page = page.get();
        async move {
            let (sort_by, sort_order) = sort.split_once('-').unwrap_or(("createdAt", "desc"));
            crate::net::api::admin_fetch_users(page, PAGE_SIZE, &search, &role, sort_by, sort_order)
                .await
        }
    });

    let self_id = move || auth.get().user.map(|u| u.id);

    let begin_update = move |id: &str| {
        updating.update(|ids| ids.push(id.to_owned()));
    };
    let end_update = move |id: &str| {
        updating.update(|ids| ids.retain(|existing| existing != id));
    };

    let on_role_change = move |user_id: String, value: String| {
        #[cfg(feature = "hydrate")]
        {
            let Ok(role) = value.parse::<Role>() else {
                return;
            };
            begin_update(&user_id);
            let users = users.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::admin_update_role(&user_id, role).await {
                    Ok(()) => error.set(String::new()),
                    Err(err) => error.set(err.message()),
                }
                end_update(&user_id);
                users.refetch();
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, value, &begin_update, &end_update);
        }
    };

    let on_delete = move |user_id: String, name: String| {
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .and_then(|w| {
                    w.confirm_with_message(&format!("Delete account for {name}?"))
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            begin_update(&user_id);
            let users = users.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::admin_delete_user(&user_id).await {
                    Ok(()) => error.set(String::new()),
                    Err(err) => error.set(err.message()),
                }
                end_update(&user_id);
                users.refetch();
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, name);
        }
    };

    view! {
        <section class="admin">
            <h1>"User Management"</h1>
            <div class="admin__filters">
                <input
                    class="input"
                    type="search"
                    placeholder="Search by name or email..."
                    prop:value=move || search.get()
                    on:input=move |ev| {
                        search.set(event_target_value(&ev));
                        page.set(1);
                    }
                />
                <select
                    class="input"
                    on:change=move |ev| {
                        role_filter.set(event_target_value(&ev));
                        page.set(1);
                    }
                >
                    <option value="">"All roles"</option>
                    <option value="viewer">"Viewer"</option>
                    <option value="editor">"Editor"</option>
                    <option value="admin">"Admin"</option>
                </select>
                <select
                    class="input"
                    on:change=move |ev| {
                        sort.set(event_target_value(&ev));
                        page.set(1);
                    }
                >
                    <option value="createdAt-desc">"Newest First"</option>
                    <option value="createdAt-asc">"Oldest First"</option>
                    <option value="name-asc">"Name A-Z"</option>
                    <option value="name-desc">"Name Z-A"</option>
                    <option value="email-asc">"Email A-Z"</option>
                    <option value="email-desc">"Email Z-A"</option>
                    <option value="role-asc">"Role A-Z"</option>
                    <option value="role-desc">"Role Z-A"</option>
                </select>
            </div>

            <Show when=move || !error.get().is_empty()>
                <div class="error-banner">{move || error.get()}</div>
            </Show>

            <Suspense fallback=|| view! { <p class="muted">"Loading users..."</p> }>
                {move || {
                    users.get().map(|result: Result<UserPage, ApiError>| match result {
                        Ok(user_page) => {
                            let pagination = user_page.pagination;
                            view! {
                                <table class="admin__table">
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th>"Email"</th>
                                            <th>"Role"</th>
                                            <th>"Joined"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {user_page
                                            .users
                                            .into_iter()
                                            .map(|user| {
                                                let id = user.id.clone();
                                                let is_self = self_id() == Some(id.clone());
                                                let busy = {
                                                    let id = id.clone();
                                                    move || updating.get().contains(&id)
                                                };
                                                let row_busy = busy.clone();
                                                let change_id = id.clone();
                                                let delete_id = id.clone();
                                                let delete_name = user.name.clone();
                                                view! {
                                                    <tr>
                                                        <td>{user.name.clone()}</td>
                                                        <td>{user.email.clone()}</td>
                                                        <td>
                                                            <select
                                                                class="input"
                                                                disabled=move || is_self || busy()
                                                                on:change=move |ev| {
                                                                    on_role_change(
                                                                        change_id.clone(),
                                                                        event_target_value(&ev),
                                                                    );
                                                                }
                                                            >
                                                                {[Role::Viewer, Role::Editor, Role::Admin]
                                                                    .into_iter()
                                                                    .map(|role| {
                                                                        view! {
                                                                            <option
                                                                                value=role.as_str()
                                                                                selected=user.role == role
                                                                            >
                                                                                {role.as_str()}
                                                                            </option>
                                                                        }
                                                                    })
                                                                    .collect_view()}
                                                            </select>
                                                        </td>
                                                        <td>{user.created_at.clone()}</td>
                                                        <td>
                                                            <button
                                                                class="btn btn--small"
                                                                disabled=move || is_self || row_busy()
                                                                on:click=move |_| {
                                                                    on_delete(
                                                                        delete_id.clone(),
                                                                        delete_name.clone(),
                                                                    );
                                                                }
                                                            >
                                                                "Delete"
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                                <div class="pager">
                                    <button
                                        class="btn"
                                        disabled=pagination.page <= 1
                                        on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
                                    >
                                        "Previous"
                                    </button>
                                    <span class="pager__status">
                                        {format!(
                                            "Page {} of {} ({} users)",
                                            pagination.page,
                                            pagination.pages.max(1),
                                            pagination.total,
                                        )}
                                    </span>
                                    <button
                                        class="btn"
                                        disabled=pagination.page >= pagination.pages
                                        on:click=move |_| page.update(|p| *p += 1)
                                    >
                                        "Next"
                                    </button>
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
