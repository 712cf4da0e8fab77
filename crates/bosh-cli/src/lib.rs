//! # bosh-cli — Command-Line Interface
//!
//! The `bosh` binary: validates Boutiques tool descriptors and prints the
//! combined structural and semantic report.
//!
//! ## Subcommands
//!
//! - `bosh validate` — validate one or more descriptor files.
//! - `bosh rules` — list the rules of a profile.
//!
//! ```bash
//! bosh validate tool.json
//! bosh validate --profile extended --format json a.json b.yaml
//! bosh --config bosh.yaml validate tool.json
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing and rendering live here; validation logic lives in
//!   `bosh-schema` and `bosh-validate`.
//! - Reports go to stdout, logs to stderr.

pub mod config;
pub mod rules;
pub mod validate;
