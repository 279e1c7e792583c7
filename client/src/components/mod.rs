//! UI components for the pad page.

pub mod answer_readout;
pub mod pad_host;
pub mod toolbar;
