//! # bosh-schema — Structural Validation & Pipeline
//!
//! Runs the structural half of descriptor validation and wires it to the
//! semantic half.
//!
//! ## Structural Validation (`validate`)
//!
//! [`SchemaValidator`] loads JSON Schemas (a directory, a single file, or
//! the bundled `descriptor.schema.json`), resolves cross-schema `$ref`s
//! locally, and reports structured [`Violation`]s.
//!
//! ## Pipeline (`pipeline`)
//!
//! [`validate_descriptor_file`] loads a JSON or YAML descriptor, collects
//! its schema violations, and passes them as prior errors to
//! `bosh_validate::DescriptorValidator`, yielding one combined report.
//!
//! ## Crate Policy
//!
//! - Schema validation never touches the network.
//! - Document problems are diagnostics in the report; only an unreadable
//!   document or an unusable schema is an `Err`.

pub mod pipeline;
pub mod validate;

pub use pipeline::{load_document, validate_descriptor_file, validate_descriptor_value};
pub use validate::{
    SchemaValidationError, SchemaValidator, ValidationViolations, Violation, DESCRIPTOR_SCHEMA,
};
