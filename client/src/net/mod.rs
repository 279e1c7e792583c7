//! Networking: the classification submission path.
//!
//! `api` issues the single HTTP call, `types` defines the response schema.

pub mod api;
pub mod types;
