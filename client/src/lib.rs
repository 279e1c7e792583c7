//! # client
//!
//! Leptos + WASM frontend for the digit drawing pad.
//!
//! This crate contains the page shell, the pad host component that bridges
//! DOM pointer events to the `surface` crate, application state, and the
//! submission path that sends the drawn image to the classifier endpoint.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;
