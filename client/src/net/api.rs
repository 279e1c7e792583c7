//! HTTP helper for the classification endpoint.
//!
//! ERROR HANDLING
//! ==============
//! Callers get an `Option` instead of an error type: the pad has no retry or
//! error UI, so any failure (network, non-2xx, malformed JSON) collapses to
//! `None` and the caller decides what, if anything, to log.

use gloo_net::http::Request;

use super::types::ClassifyResponse;

/// Fixed classification endpoint; the model server binds here.
const CLASSIFY_URL: &str = "http://localhost:5000/mnist";

/// Submit a JPEG data URI for classification.
///
/// Issues a single `POST` with an `application/x-www-form-urlencoded` body
/// carrying the image in the `img` field. Returns `None` on any failure.
pub async fn classify(image_data_url: &str) -> Option<ClassifyResponse> {
    let encoded = String::from(js_sys::encode_uri_component(image_data_url));
    let resp = Request::post(CLASSIFY_URL)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(format!("img={encoded}"))
        .ok()?
        .send()
        .await
        .ok()?;
    if !resp.ok() {
        return None;
    }
    resp.json::<ClassifyResponse>().await.ok()
}
