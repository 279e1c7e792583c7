//! Classification outcome shown in the answer readout.

#[cfg(test)]
#[path = "classifier_test.rs"]
mod classifier_test;

/// Where the current drawing stands with the classifier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ClassifierState {
    /// Nothing submitted yet (or the last submission failed).
    #[default]
    Idle,
    /// A request is in flight.
    Pending,
    /// The endpoint returned a label for the drawing.
    Classified(String),
}

impl ClassifierState {
    /// Readout text for the current state.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Idle => "Draw a digit, then ask.".to_owned(),
            Self::Pending => "Thinking...".to_owned(),
            Self::Classified(label) => format!("I think it's {label}."),
        }
    }
}
