//! Shared client-side state.
//!
//! The session (`auth`) is the only application-wide state; everything else
//! is page-local. `gate` is the pure route-authorization decision consulted
//! by protected routes.

pub mod auth;
pub mod gate;
