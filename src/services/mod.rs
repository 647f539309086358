//! The simulation engine and its per-resource operations.

pub mod engine;
pub mod error;

mod account_keys;
mod accounts;
mod buckets;
mod clusters;
mod permission_keys;
mod permissions;
mod site_status;
