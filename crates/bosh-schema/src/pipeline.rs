//! # Descriptor Validation Pipeline
//!
//! Loads a descriptor document, checks it against the descriptor schema,
//! materializes the typed model and hands both to the semantic validator.
//!
//! ## Stages
//!
//! 1. **Load.** JSON or YAML by file extension. A document that does not
//!    parse is an error and nothing else runs.
//! 2. **Structure.** Schema violations become the prior errors, rendered
//!    as `<json pointer>: <message>`.
//! 3. **Semantics.** The typed descriptor goes through
//!    [`DescriptorValidator`]. If the document is so far off the schema
//!    that it cannot be materialized, the materialization error is the
//!    last diagnostic and the semantic rules are skipped.

use std::path::Path;

use bosh_core::{yaml_to_json_value, Descriptor};
use bosh_validate::{DescriptorValidator, RuleProfile, ValidationReport};
use serde_json::Value;

use crate::validate::{SchemaValidationError, SchemaValidator, DESCRIPTOR_SCHEMA};

/// Read a JSON or YAML document into a JSON value tree.
///
/// `.yaml` / `.yml` files are read as YAML, everything else as JSON.
///
/// # Errors
///
/// `DocumentLoadError` if the file cannot be read or parsed.
pub fn load_document(path: &Path) -> Result<Value, SchemaValidationError> {
    let load_error = |reason: String| SchemaValidationError::DocumentLoadError {
        path: path.display().to_string(),
        reason,
    };

    let content = std::fs::read_to_string(path).map_err(|e| load_error(format!("cannot read file: {e}")))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext {
        "yaml" | "yml" => {
            let yaml: serde_yaml::Value =
                serde_yaml::from_str(&content).map_err(|e| load_error(format!("invalid YAML: {e}")))?;
            yaml_to_json_value(&yaml).map_err(|e| load_error(e.to_string()))
        }
        _ => serde_json::from_str(&content).map_err(|e| load_error(format!("invalid JSON: {e}"))),
    }
}

/// Validate an already-loaded descriptor document.
///
/// # Errors
///
/// Only when the descriptor schema itself is missing or does not compile.
/// Problems with the document are diagnostics in the returned report.
pub fn validate_descriptor_value(
    schemas: &SchemaValidator,
    document: &Value,
    profile: RuleProfile,
) -> Result<ValidationReport, SchemaValidationError> {
    let structural = schemas.violations(document, DESCRIPTOR_SCHEMA)?;
    let prior: Vec<String> = structural.violations().iter().map(|v| v.to_string()).collect();

    if !prior.is_empty() {
        tracing::debug!(violations = prior.len(), "descriptor failed structural validation");
    }

    let validator = DescriptorValidator::new(profile);
    match Descriptor::from_value(document) {
        Ok(descriptor) => Ok(validator.validate(&descriptor, prior)),
        Err(e) => {
            tracing::warn!(error = %e, "descriptor could not be materialized; semantic rules skipped");
            let mut messages = prior;
            messages.push(e.to_string());
            Ok(bosh_validate::Diagnostics::from_prior(messages).into_report())
        }
    }
}

/// Load and validate a descriptor file.
///
/// # Errors
///
/// `DocumentLoadError` if the file cannot be read or parsed, or a schema
/// error as for [`validate_descriptor_value`].
pub fn validate_descriptor_file(
    schemas: &SchemaValidator,
    path: &Path,
    profile: RuleProfile,
) -> Result<ValidationReport, SchemaValidationError> {
    let document = load_document(path)?;
    let report = validate_descriptor_value(schemas, &document, profile)?;
    tracing::info!(
        path = %path.display(),
        ok = report.is_ok(),
        violations = report.violations().len(),
        "validated descriptor"
    );
    Ok(report)
}
