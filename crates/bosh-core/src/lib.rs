//! # bosh-core — Foundational Types for the bosh Toolchain
//!
//! Defines the statically-typed Boutiques tool descriptor model that every
//! other crate in the workspace consumes, and the ingestion path from JSON
//! or YAML text into it.
//!
//! ## Key Design Principles
//!
//! 1. **One typed model.** Rules never index into raw JSON maps. Optional
//!    collections (`groups`, `requires-inputs`, ...) become empty `Vec`s
//!    once, at ingestion, so downstream code has no `null` handling.
//!
//! 2. **Presence is preserved.** Optional scalars stay `Option` where the
//!    difference between "absent" and "declared" matters to a rule.
//!
//! 3. **Ingestion errors are not findings.** A document that cannot be
//!    read as a descriptor yields a [`BoshError`]; semantic findings are
//!    diagnostics produced by `bosh-validate`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `bosh-*` crates (leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod descriptor;
pub mod error;
pub mod yaml;

pub use descriptor::{Descriptor, Group, Input, InputType, OutputFile};
pub use error::BoshError;
pub use yaml::yaml_to_json_value;
