//! Wire models of the object-storage management API.
//!
//! Field names follow the API's snake_case JSON contract, so every type
//! serializes as the real service would send it.

pub mod account;
pub mod api_error;
pub mod bucket;
pub mod cluster;
pub mod envelope;
pub mod permission;
pub mod status;
