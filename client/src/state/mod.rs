//! Application state shared via Leptos contexts.
//!
//! `ui` carries transient control requests (clear/classify counters) so the
//! toolbar never has to reach into the imperative surface; `classifier`
//! carries the submission outcome for the answer readout.

pub mod classifier;
pub mod ui;
