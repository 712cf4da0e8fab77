//! # Diagnostic Report
//!
//! A validation run owns one [`Diagnostics`] buffer. It starts with the
//! structural errors handed over by the schema collaborator and every rule
//! appends to it. Finishing the run turns the buffer into a
//! [`ValidationReport`], which applies the `"OK"` sentinel.

use std::fmt;

use serde::Serialize;

/// The single message of a report with no findings.
pub const OK_SENTINEL: &str = "OK";

/// Accumulating, ordered list of diagnostic messages for one run.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    messages: Vec<String>,
}

impl Diagnostics {
    /// Start a buffer from errors reported before semantic validation.
    pub fn from_prior(prior: Vec<String>) -> Self {
        Self { messages: prior }
    }

    /// Append one finding.
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages accumulated so far.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Close the run.
    pub fn into_report(self) -> ValidationReport {
        ValidationReport::from_diagnostics(self)
    }
}

/// Final outcome of a validation run.
///
/// Serializes as a plain JSON array of strings: `["OK"]` for a valid
/// descriptor, otherwise the findings in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    messages: Vec<String>,
}

impl ValidationReport {
    /// Build the report. An empty buffer becomes exactly `["OK"]`; a
    /// non-empty buffer is kept as-is and never gets the sentinel.
    pub fn from_diagnostics(diagnostics: Diagnostics) -> Self {
        let mut messages = diagnostics.messages;
        if messages.is_empty() {
            messages.push(OK_SENTINEL.to_string());
        }
        Self { messages }
    }

    /// True when the report is the `["OK"]` sentinel.
    pub fn is_ok(&self) -> bool {
        self.violations().is_empty()
    }

    /// All messages, including the sentinel for a valid descriptor.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Findings only; empty for a valid descriptor.
    pub fn violations(&self) -> &[String] {
        if self.messages.len() == 1 && self.messages[0] == OK_SENTINEL {
            &[]
        } else {
            &self.messages[..]
        }
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, m) in self.messages.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{m}")?;
        }
        Ok(())
    }
}
