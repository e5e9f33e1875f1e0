//! Bearer token persistence.
//!
//! The token is the only durable client-side state. It lives in
//! `localStorage` under a fixed key and is read fresh before every request,
//! never cached. Only this module touches the storage key; the session store
//! writes through `write`/`clear` and the API client reads through `read`.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "token";

/// Read the persisted bearer token. `None` means "logged out".
pub fn read() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        storage
            .get_item(STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a bearer token, replacing any previous one.
pub fn write(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the persisted token. A no-op when none is stored.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
