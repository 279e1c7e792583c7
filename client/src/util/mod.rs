//! Small client-side helpers.

pub mod pointer;
