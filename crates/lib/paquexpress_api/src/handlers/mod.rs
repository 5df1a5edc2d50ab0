//! Request handlers.

pub mod auth;
pub mod deliveries;
pub mod packages;
pub mod photos;
pub mod status;
