//! Error types.
//!
//! Ordinary mismatches are never errors; they are `MismatchRecord`s. The
//! types here cover the few genuinely exceptional paths: a user-supplied
//! validator reporting failure, and inputs the JSON bridge cannot represent.

use std::any::Any;

use thiserror::Error;

/// Failure reported by a user-supplied schema or fallible predicate.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    /// Individual issues, for schemas that report more than one.
    pub issues: Vec<String>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        ValidationError {
            message: message.into(),
            issues: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_issue(mut self, issue: impl Into<String>) -> Self {
        self.issues.push(issue.into());
        self
    }

    /// Message with issues appended, for mismatch records.
    pub fn describe(&self) -> String {
        if self.issues.is_empty() {
            self.message.clone()
        } else {
            format!("{} ({})", self.message, self.issues.join("; "))
        }
    }
}

/// Input the JSON bridge cannot convert.
#[derive(Debug, Error)]
pub enum JsonError {
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Extract the message carried by a caught panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "validator panicked".to_string()
    }
}

#[cfg(test)]
mod tests;
