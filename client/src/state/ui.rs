//! Control requests from the toolbar to the pad host.
//!
//! DESIGN
//! ======
//! The `Surface` is owned imperatively by the pad host, so buttons elsewhere
//! in the tree request work through monotonic sequence counters: bump the
//! counter, and a host effect watching it performs the operation once.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Pending control requests for the pad host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Bumped when the user asks to wipe the pad.
    pub clear_seq: u64,
    /// Bumped when the user asks to classify the current drawing.
    pub classify_seq: u64,
}

impl UiState {
    /// Request that the pad be cleared.
    pub fn request_clear(&mut self) {
        self.clear_seq = self.clear_seq.saturating_add(1);
    }

    /// Request that the current drawing be classified.
    pub fn request_classify(&mut self) {
        self.classify_seq = self.classify_seq.saturating_add(1);
    }
}
