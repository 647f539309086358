//! In-memory fake of the object storage management API.
//!
//! [`services::engine::Engine`] simulates sites, the site account, buckets,
//! permissions and their access keys; [`routes::routes::routes`] exposes it
//! over HTTP with the same paths and envelopes as the real service.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
