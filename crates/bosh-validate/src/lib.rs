//! # bosh-validate — Semantic Descriptor Validation
//!
//! Checks a parsed Boutiques tool descriptor for the consistency rules a
//! JSON Schema cannot express, after structural validation has run.
//!
//! ## Contract
//!
//! [`validate`] takes the descriptor and the structural error list and
//! returns that list with every semantic finding appended, in rule order
//! and then document order. When nothing was found at all the result is
//! exactly `["OK"]`.
//!
//! ```
//! use bosh_core::Descriptor;
//!
//! let d = Descriptor::from_json_str(
//!     r#"{"command-line": "tool -x VALUE",
//!         "inputs": [{"id": "x", "type": "String", "command-line-key": "-xyz"}]}"#,
//! ).unwrap();
//! assert_eq!(bosh_validate::validate(&d, vec![]), ["-xyz not in cmd line"]);
//! ```
//!
//! ## Rule Profiles
//!
//! - [`RuleProfile::Classic`] — the thirteen core rules ([`CLASSIC_RULES`]).
//! - [`RuleProfile::Extended`] — core rules, then [`EXTENDED_RULES`].
//!
//! ## Crate Policy
//!
//! - Pure: no I/O, no mutation of the descriptor, no shared state.
//! - Findings are diagnostics, never errors; a run cannot fail.

pub mod extended;
pub mod report;
pub mod rules;

pub use extended::EXTENDED_RULES;
pub use report::{Diagnostics, ValidationReport, OK_SENTINEL};
pub use rules::{validate, DescriptorValidator, Rule, RuleProfile, CLASSIC_RULES};
