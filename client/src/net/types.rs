//! Wire schema for the classification endpoint.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// JSON body returned by the classifier on success.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifyResponse {
    /// The predicted label. Model servers disagree on whether this is a JSON
    /// number or a string, so it is decoded as a raw value.
    pub ans: serde_json::Value,
}

impl ClassifyResponse {
    /// The label as display text.
    #[must_use]
    pub fn label(&self) -> String {
        match &self.ans {
            serde_json::Value::String(label) => label.clone(),
            other => other.to_string(),
        }
    }
}
