//! # Error Types
//!
//! Errors raised while turning raw documents into the typed descriptor
//! model. Semantic findings are *not* errors: they are diagnostics
//! accumulated by `bosh-validate`. Everything here means the document
//! could not be read as a descriptor at all.

use thiserror::Error;

/// Top-level error type for descriptor ingestion.
#[derive(Error, Debug)]
pub enum BoshError {
    /// The text is not well-formed JSON or YAML.
    #[error("parse error ({format}): {reason}")]
    Parse {
        /// Source format that was attempted ("json" or "yaml").
        format: &'static str,
        /// Parser message.
        reason: String,
    },

    /// The document parsed, but does not have the shape of a descriptor
    /// (missing `command-line`, `inputs` is not an array, ...).
    #[error("descriptor shape error: {0}")]
    Shape(String),

    /// A YAML construct has no JSON equivalent.
    #[error("yaml conversion error: {0}")]
    YamlConversion(String),

    /// Configuration file problem.
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl BoshError {
    /// Build a JSON parse error.
    pub fn json(err: &serde_json::Error) -> Self {
        Self::Parse {
            format: "json",
            reason: err.to_string(),
        }
    }

    /// Build a YAML parse error.
    pub fn yaml(err: &serde_yaml::Error) -> Self {
        Self::Parse {
            format: "yaml",
            reason: err.to_string(),
        }
    }
}
