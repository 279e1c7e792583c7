//! Stroke capture surface for the drawing pad.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of the pad canvas: translating pointer events into stroke
//! segments, rendering them to the 2D context, clearing the surface, and
//! exporting the raster as a JPEG data URI for classification. The host
//! Leptos layer is responsible only for wiring DOM events to the surface.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | The [`engine::Surface`] and its testable [`engine::PadCore`] |
//! | [`gesture`] | Gesture state machine data |
//! | [`geom`] | Surface-relative points |
//! | [`render`] | Context configuration and pixel output |
//! | [`error`] | Surface error taxonomy |
//! | [`consts`] | Stroke, background, and pad-size constants |

pub mod consts;
pub mod engine;
pub mod error;
pub mod geom;
pub mod gesture;
pub mod render;
