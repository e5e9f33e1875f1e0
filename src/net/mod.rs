//! Network layer: wire types, bearer token storage, and the REST client.

pub mod api;
pub mod error;
pub mod token;
pub mod types;
