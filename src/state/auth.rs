//! Session store: the single source of truth for "who is logged in".
//!
//! DESIGN
//! ======
//! The session is owned by one `RwSignal<AuthState>` provided via context;
//! views never write it directly. All mutation goes through the four
//! operations here (`load_me`, `login`, `register`, `logout`), each of which
//! replaces state atomically through pure `apply_*` transitions so the
//! lifecycle invariants are unit-testable without a browser.
//!
//! Every auth mutation bumps a generation counter and async resolutions are
//! applied only while their generation is still current. A slow login
//! response arriving after a logout is discarded instead of silently
//! resurrecting the session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::RwSignal;
use leptos::prelude::Update;

use crate::net::error::{ApiError, FieldError};
use crate::net::types::User;
use crate::net::{api, token};

/// Session bootstrap lifecycle. Moves forward only: `Uninitialized` at
/// process start, `Loading` while the one-time bootstrap is in flight,
/// `Ready` forever after.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    Uninitialized,
    Loading,
    Ready,
}

/// Authentication state tracking the current user and bootstrap phase.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub phase: AuthPhase,
    /// Last login/register failure message; empty when none.
    pub error: String,
    /// Monotonic counter bumped by every auth mutation; stale async
    /// resolutions compare against it and are dropped.
    pub generation: u64,
}

impl AuthState {
    /// Whether the one-time bootstrap has resolved (successfully or not).
    /// Route decisions must not be trusted before this is true.
    pub fn ready(&self) -> bool {
        self.phase == AuthPhase::Ready
    }

    /// Enter the bootstrap. Returns `false` if it already started, which
    /// makes the bootstrap a once-per-lifetime operation.
    pub(crate) fn begin_bootstrap(&mut self) -> bool {
        if self.phase != AuthPhase::Uninitialized {
            return false;
        }
        self.phase = AuthPhase::Loading;
        true
    }

    /// Resolve the bootstrap. The phase becomes `Ready` unconditionally;
    /// the user record is applied only if `generation` is still current,
    /// so a login that raced ahead of a slow bootstrap wins.
    ///
    /// A failed bootstrap passes `None`: it degrades to "not logged in"
    /// without touching `error`.
    pub(crate) fn apply_bootstrap(&mut self, generation: u64, user: Option<User>) {
        self.phase = AuthPhase::Ready;
        if self.generation != generation {
            return;
        }
        match user {
            Some(user) => {
                self.user = Some(user);
                self.error.clear();
            }
            None => self.user = None,
        }
    }

    /// Begin a login/register attempt: clear the previous failure message
    /// and claim a new generation.
    pub(crate) fn begin_attempt(&mut self) -> u64 {
        self.error.clear();
        self.generation += 1;
        self.generation
    }

    /// Successful login/register. Does not alter the phase.
    pub(crate) fn apply_login(&mut self, user: User) {
        self.user = Some(user);
        self.error.clear();
    }

    /// Failed login/register: record the message, keep any existing session.
    pub(crate) fn apply_failure(&mut self, message: String) {
        self.error = message;
    }

    /// Logout. Idempotent; does not alter phase or error.
    pub(crate) fn apply_logout(&mut self) {
        self.generation += 1;
        self.user = None;
    }
}

/// Outcome of a failed login/register attempt, surfaced to the form.
///
/// `message` is the generic banner text; `fields` carries the server's
/// per-field validation detail when present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthFailure {
    pub message: String,
    pub fields: Vec<FieldError>,
}

impl AuthFailure {
    pub(crate) fn from_api(err: &ApiError, fallback: &str) -> Self {
        let message = err.message();
        Self {
            message: if message.is_empty() { fallback.to_owned() } else { message },
            fields: err.field_errors().to_vec(),
        }
    }

    /// Look up the server message for a named form field. The lookup is an
    /// explicit per-field table on the caller side; this is just the scan.
    pub fn field_message(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|fe| fe.field == field)
            .map(|fe| fe.message.as_str())
    }
}

/// One-time session bootstrap.
///
/// With no persisted token this resolves immediately, no network call. With
/// one, it asks `/auth/me`; any failure (expired token, network, 5xx)
/// degrades silently to "not logged in". Either way the session ends up
/// ready, never stuck.
pub async fn load_me(auth: RwSignal<AuthState>) {
    let mut started = false;
    let mut generation = 0;
    auth.update(|s| {
        started = s.begin_bootstrap();
        generation = s.generation;
    });
    if !started {
        return;
    }

    if token::read().is_none() {
        auth.update(|s| s.apply_bootstrap(generation, None));
        return;
    }

    let result = api::fetch_me().await;
    if let Err(err) = &result {
        leptos::logging::warn!("session bootstrap failed, continuing logged out: {err}");
    }
    auth.update(|s| s.apply_bootstrap(generation, result.ok()));
}

/// Log in with credentials. On success the token is persisted before the
/// user record becomes visible. On failure the existing session (if any)
/// is left untouched and the failure is both recorded in `AuthState::error`
/// and returned for per-field display.
pub async fn login(auth: RwSignal<AuthState>, email: &str, password: &str) -> Result<(), AuthFailure> {
    let mut generation = 0;
    auth.update(|s| generation = s.begin_attempt());

    match api::login(email, password).await {
        Ok(resp) => {
            auth.update(|s| {
                if s.generation == generation {
                    token::write(&resp.token);
                    s.apply_login(resp.user);
                }
            });
            Ok(())
        }
        Err(err) => {
            let failure = AuthFailure::from_api(&err, "Login failed");
            auth.update(|s| {
                if s.generation == generation {
                    s.apply_failure(failure.message.clone());
                }
            });
            Err(failure)
        }
    }
}

/// Create an account. Same contract as `login`; a successful registration
/// logs the user in immediately.
pub async fn register(
    auth: RwSignal<AuthState>,
    name: &str,
    email: &str,
    password: &str,
) -> Result<(), AuthFailure> {
    let mut generation = 0;
    auth.update(|s| generation = s.begin_attempt());

    match api::register(name, email, password).await {
        Ok(resp) => {
            auth.update(|s| {
                if s.generation == generation {
                    token::write(&resp.token);
                    s.apply_login(resp.user);
                }
            });
            Ok(())
        }
        Err(err) => {
            let failure = AuthFailure::from_api(&err, "Registration failed");
            auth.update(|s| {
                if s.generation == generation {
                    s.apply_failure(failure.message.clone());
                }
            });
            Err(failure)
        }
    }
}

/// Log out: drop the persisted token and the in-memory user together.
/// Idempotent, synchronous, no network call.
pub fn logout(auth: RwSignal<AuthState>) {
    token::clear();
    auth.update(AuthState::apply_logout);
}
