//! Surface error taxonomy.
//!
//! Initialization is the only operation expected to fail under normal host
//! conditions; without a 2D context no drawing is possible, so construction
//! fails fast and the caller decides how loudly to report it.

use wasm_bindgen::JsValue;

/// Errors raised while acquiring or using the drawing surface.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    /// The canvas element returned no `2d` rendering context.
    #[error("canvas 2d context unavailable")]
    ContextUnavailable,

    /// The canvas returned a context object of an unexpected type.
    #[error("canvas returned a non-2d rendering context")]
    NotA2dContext,

    /// A canvas call failed on the JS side.
    #[error("canvas call failed: {0}")]
    Js(String),
}

impl From<JsValue> for SurfaceError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}
