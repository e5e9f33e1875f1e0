//! Page components, one per route.

pub mod admin_users;
pub mod browse;
pub mod favorites;
pub mod hero_detail;
pub mod login;
pub mod not_found;
pub mod register;
pub mod team_builder;
pub mod team_compare;
