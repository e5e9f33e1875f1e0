//! Reusable UI components.

pub mod error_banner;
pub mod hero_card;
pub mod nav;
pub mod require_auth;
