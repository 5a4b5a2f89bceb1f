//! Operation outcomes returned by the contact manager.
//!
//! Every core operation returns a single human-readable message tagged as
//! success or error, so the presentation layer can render it without
//! inspecting manager internals.

use std::fmt;

/// Tag distinguishing a successful operation from a failed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Success,
    Error,
}

/// The result message of a manager operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    kind: OutcomeKind,
    text: String,
}

impl Outcome {
    /// Create a success-tagged outcome.
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Success,
            text: text.into(),
        }
    }

    /// Create an error-tagged outcome.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Error,
            text: text.into(),
        }
    }

    pub fn kind(&self) -> OutcomeKind {
        self.kind
    }

    pub fn is_success(&self) -> bool {
        self.kind == OutcomeKind::Success
    }

    /// The message text, without the success/error marker.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            OutcomeKind::Success => write!(f, "✓ {}", self.text),
            OutcomeKind::Error => write!(f, "✗ {}", self.text),
        }
    }
}
