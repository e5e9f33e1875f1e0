//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav::Nav;
use crate::components::require_auth::RequireAuth;
use crate::net::types::Role;
use crate::pages::{
    admin_users::AdminUsersPage, browse::BrowsePage, favorites::FavoritesPage,
    hero_detail::HeroDetailPage, login::LoginPage, not_found::NotFoundPage,
    register::RegisterPage, team_builder::TeamBuilderPage, team_compare::TeamComparePage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context, starts the one-time session bootstrap, and
/// sets up client-side routing. Protected routes are wrapped in
/// `RequireAuth`; the gate waits for the bootstrap before redirecting.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(crate::state::auth::load_me(auth));

    view! {
        <Stylesheet id="leptos" href="/pkg/superteam.css"/>
        <Title text="SuperTeam"/>

        <Router>
            <Nav/>
            <main class="app-main">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=BrowsePage/>
                    <Route
                        path=(StaticSegment("hero"), ParamSegment("id"))
                        view=HeroDetailPage
                    />
                    <Route path=StaticSegment("team") view=TeamBuilderPage/>
                    <Route
                        path=StaticSegment("compare")
                        view=|| view! {
                            <RequireAuth>
                                <TeamComparePage/>
                            </RequireAuth>
                        }
                    />
                    <Route
                        path=StaticSegment("favorites")
                        view=|| view! {
                            <RequireAuth>
                                <FavoritesPage/>
                            </RequireAuth>
                        }
                    />
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("users"))
                        view=|| view! {
                            <RequireAuth required_role=Role::Admin>
                                <AdminUsersPage/>
                            </RequireAuth>
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
