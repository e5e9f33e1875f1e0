//! REST API client for the SuperTeam server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning errors, since these endpoints are only meaningful in the
//! browser.
//!
//! CREDENTIALS
//! ===========
//! Every request passes through `authorized`, which reads the persisted
//! bearer token immediately before send (never cached) and attaches it as an
//! `Authorization: Bearer` header when present. Absence of a token sends the
//! request bare; rejecting it is the server's job.
//!
//! ERROR HANDLING
//! ==============
//! Failures are not retried or transformed. The server's error payload is
//! propagated intact inside `ApiError::Status` so callers can interpret
//! field-level validation detail themselves.

#![allow(clippy::unused_async)]

use std::cell::RefCell;

use super::error::ApiError;
use super::types::{AuthResponse, CompareResult, Hero, HeroPage, Role, User, UserPage};

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

const DEFAULT_BASE_URL: &str = "/api";
const DEFAULT_TIMEOUT_MS: u32 = 15_000;

#[derive(Clone, Debug)]
struct Config {
    base_url: String,
    timeout_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

thread_local! {
    static CONFIG: RefCell<Config> = RefCell::new(Config::default());
}

/// Configure the API client. Call at most once, at application start;
/// `None` keeps the documented default (`/api` base, 15 s timeout).
pub fn configure(base_url: Option<&str>, timeout_ms: Option<u32>) {
    CONFIG.with(|config| {
        let mut config = config.borrow_mut();
        if let Some(base) = base_url {
            config.base_url = base.trim_end_matches('/').to_owned();
        }
        if let Some(ms) = timeout_ms {
            config.timeout_ms = ms;
        }
    });
}

fn url(path: &str) -> String {
    CONFIG.with(|config| format!("{}{path}", config.borrow().base_url))
}

#[cfg(feature = "hydrate")]
fn timeout_ms() -> u32 {
    CONFIG.with(|config| config.borrow().timeout_ms)
}

// ---------------------------------------------------------------
// Request plumbing (browser only)
// ---------------------------------------------------------------

/// `Authorization` header value for a persisted token. `None` means the
/// request goes out bare.
fn bearer_value(token: Option<&str>) -> Option<String> {
    token.map(|token| format!("Bearer {token}"))
}

/// Attach the persisted bearer token, if any, to an outgoing request.
#[cfg(feature = "hydrate")]
fn authorized(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match bearer_value(super::token::read().as_deref()) {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    }
}

/// Send a request, racing it against the configured timeout.
#[cfg(feature = "hydrate")]
async fn send(request: gloo_net::http::Request) -> Result<gloo_net::http::Response, ApiError> {
    use futures::future::{Either, select};

    let limit = timeout_ms();
    let request = request.send();
    let timeout = gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(limit)));
    futures::pin_mut!(request);
    futures::pin_mut!(timeout);

    match select(request, timeout).await {
        Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string())),
        Either::Right(((), _)) => Err(ApiError::Timeout(limit)),
    }
}

#[cfg(feature = "hydrate")]
async fn parse<T: serde::de::DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    } else {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        Err(super::error::status_error(status, &text))
    }
}

/// Like `parse`, for endpoints whose response body the client ignores.
#[cfg(feature = "hydrate")]
async fn expect_ok(response: gloo_net::http::Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        Err(super::error::status_error(status, &text))
    }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(
    path: &str,
    query: &[(&str, String)],
) -> Result<T, ApiError> {
    let mut builder = gloo_net::http::Request::get(&url(path));
    if !query.is_empty() {
        builder = builder.query(query.iter().map(|(k, v)| (*k, v.as_str())));
    }
    let request = authorized(builder)
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;
    parse(send(request).await?).await
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::de::DeserializeOwned>(
    path: &str,
    body: &serde_json::Value,
) -> Result<T, ApiError> {
    let request = authorized(gloo_net::http::Request::post(&url(path)))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    parse(send(request).await?).await
}

#[cfg(feature = "hydrate")]
async fn post_unit(path: &str, body: &serde_json::Value) -> Result<(), ApiError> {
    let request = authorized(gloo_net::http::Request::post(&url(path)))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    expect_ok(send(request).await?).await
}

#[cfg(feature = "hydrate")]
async fn patch_unit(path: &str, body: &serde_json::Value) -> Result<(), ApiError> {
    let request = authorized(gloo_net::http::Request::patch(&url(path)))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    expect_ok(send(request).await?).await
}

#[cfg(feature = "hydrate")]
async fn delete_unit(path: &str) -> Result<(), ApiError> {
    let request = authorized(gloo_net::http::Request::delete(&url(path)))
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;
    expect_ok(send(request).await?).await
}

#[cfg(not(feature = "hydrate"))]
fn server_stub<T>() -> Result<T, ApiError> {
    Err(ApiError::Network("not available on server".to_owned()))
}

// ---------------------------------------------------------------
// Auth
// ---------------------------------------------------------------

/// Resolve the persisted token into a user record via `GET /auth/me`.
pub async fn fetch_me() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/auth/me", &[]).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        server_stub()
    }
}

/// `POST /auth/login` with credentials; returns the token and user record.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(
            "/auth/login",
            &serde_json::json!({ "email": email, "password": password }),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        server_stub()
    }
}

/// `POST /auth/register`; same response shape as login.
pub async fn register(name: &str, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(
            "/auth/register",
            &serde_json::json!({ "name": name, "email": email, "password": password }),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        server_stub()
    }
}

// ---------------------------------------------------------------
// Heroes
// ---------------------------------------------------------------

/// Search the hero catalog.
pub async fn fetch_heroes(q: &str, page: u32, limit: u32) -> Result<HeroPage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(
            "/heroes",
            &[
                ("q", q.to_owned()),
                ("page", page.to_string()),
                ("limit", limit.to_string()),
            ],
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (q, page, limit);
        server_stub()
    }
}

/// Fetch a single hero by id.
pub async fn fetch_hero(id: &str) -> Result<Hero, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&format!("/heroes/{id}"), &[]).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        server_stub()
    }
}

/// Apply a partial update to a hero. Requires editor or admin role
/// (enforced server-side).
pub async fn update_hero(id: &str, patch: &serde_json::Value) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        patch_unit(&format!("/heroes/{id}"), patch).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, patch);
        server_stub()
    }
}

// ---------------------------------------------------------------
// Favorites
// ---------------------------------------------------------------

/// List the current user's favorite heroes.
pub async fn fetch_favorites() -> Result<Vec<Hero>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/favorites", &[]).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        server_stub()
    }
}

/// Add a hero to the current user's favorites.
pub async fn add_favorite(hero_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_unit("/favorites", &serde_json::json!({ "heroId": hero_id })).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = hero_id;
        server_stub()
    }
}

/// Remove a hero from the current user's favorites.
pub async fn remove_favorite(hero_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        delete_unit(&format!("/favorites/{hero_id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = hero_id;
        server_stub()
    }
}

// ---------------------------------------------------------------
// Teams
// ---------------------------------------------------------------

/// Fetch a recommended team. `kind` is balanced/power/random; `stat` only
/// matters for power-focused teams. The `r` param busts intermediary caches
/// so "Refresh" actually produces a new team.
pub async fn recommend_team(kind: &str, stat: &str, size: u32) -> Result<Vec<Hero>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct TeamResponse {
            #[serde(default)]
            team: Vec<Hero>,
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let bust = js_sys::Date::now() as u64;
        let response: TeamResponse = get_json(
            "/teams/recommend",
            &[
                ("type", kind.to_owned()),
                ("stat", stat.to_owned()),
                ("size", size.to_string()),
                ("r", bust.to_string()),
            ],
        )
        .await?;
        Ok(response.team)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (kind, stat, size);
        server_stub()
    }
}

/// Compare two teams of hero ids. Requires authentication.
pub async fn compare_teams(
    team_a: &[String],
    team_b: &[String],
) -> Result<CompareResult, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(
            "/teams/compare",
            &serde_json::json!({ "teamA": team_a, "teamB": team_b }),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (team_a, team_b);
        server_stub()
    }
}

// ---------------------------------------------------------------
// Admin
// ---------------------------------------------------------------

/// List user accounts. Admin only (enforced server-side; the client-side
/// gate is a UX convenience, not a security boundary).
pub async fn admin_fetch_users(
    page: u32,
    limit: u32,
    search: &str,
    role: &str,
    sort_by: &str,
    sort_order: &str,
) -> Result<UserPage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let query = admin_users_query(page, limit, search, role, sort_by, sort_order);
        get_json("/admin/users", &query).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, limit, search, role, sort_by, sort_order);
        server_stub()
    }
}

/// Query string for the admin user listing. Optional filters are omitted
/// when empty rather than sent blank; sort params are always sent.
fn admin_users_query(
    page: u32,
    limit: u32,
    search: &str,
    role: &str,
    sort_by: &str,
    sort_order: &str,
) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("page", page.to_string()),
        ("limit", limit.to_string()),
        ("sortBy", sort_by.to_owned()),
        ("sortOrder", sort_order.to_owned()),
    ];
    if !search.is_empty() {
        query.push(("search", search.to_owned()));
    }
    if !role.is_empty() {
        query.push(("role", role.to_owned()));
    }
    query
}

/// Change a user's role.
pub async fn admin_update_role(user_id: &str, role: Role) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        patch_unit(
            &format!("/admin/users/{user_id}/role"),
            &serde_json::json!({ "role": role.as_str() }),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, role);
        server_stub()
    }
}

/// Delete a user account.
pub async fn admin_delete_user(user_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        delete_unit(&format!("/admin/users/{user_id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        server_stub()
    }
}
