//! # paquexpress_core
//!
//! Core domain logic for Paquexpress: agent credentials and tokens,
//! package lookup, delivery records, and photo storage.

pub mod auth;
pub mod deliveries;
pub mod media;
pub mod migrate;
pub mod models;
pub mod packages;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
