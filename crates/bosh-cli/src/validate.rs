//! # Validate Subcommand
//!
//! `bosh validate [--schema FILE] [--profile P] [--format F] DESCRIPTOR...`
//!
//! Runs the full pipeline over each descriptor and prints one report per
//! file. A descriptor that cannot be parsed counts as invalid; the others
//! are still validated.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bosh_schema::{validate_descriptor_file, SchemaValidationError, SchemaValidator};
use bosh_validate::RuleProfile;
use clap::Args;
use serde::Serialize;

use crate::config::{CliConfig, OutputFormat};

/// Arguments for the `bosh validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Descriptor JSON Schema to validate against (default: bundled schema).
    #[arg(long, value_name = "FILE")]
    pub schema: Option<PathBuf>,

    /// Rule profile: classic or extended.
    #[arg(long)]
    pub profile: Option<RuleProfile>,

    /// Output format: text or json.
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Descriptor files (.json, .yaml or .yml).
    #[arg(value_name = "DESCRIPTOR", required = true)]
    pub descriptors: Vec<PathBuf>,
}

/// Outcome for one descriptor, as rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptorOutcome {
    pub descriptor: String,
    pub ok: bool,
    pub messages: Vec<String>,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when every descriptor is valid, 1 otherwise.
/// Errors (exit code 2 in `main`) mean the schema itself is unusable.
pub fn run_validate(args: &ValidateArgs, config: &CliConfig) -> Result<u8> {
    let profile = args.profile.unwrap_or(config.profile);
    let format = args.format.unwrap_or(config.format);
    let schemas = load_schemas(args.schema.as_deref().or(config.schema.as_deref()))?;

    tracing::info!(
        %profile,
        %format,
        descriptors = args.descriptors.len(),
        "validating descriptors"
    );

    let outcomes = args
        .descriptors
        .iter()
        .map(|path| validate_one(&schemas, path, profile))
        .collect::<Result<Vec<_>>>()?;

    println!("{}", render(&outcomes, format)?);

    if outcomes.iter().all(|o| o.ok) {
        Ok(0)
    } else {
        Ok(1)
    }
}

fn load_schemas(schema: Option<&Path>) -> Result<SchemaValidator> {
    match schema {
        Some(path) => SchemaValidator::from_schema_file(path)
            .with_context(|| format!("failed to load descriptor schema {}", path.display())),
        None => SchemaValidator::bundled().context("failed to load bundled descriptor schema"),
    }
}

/// Validate one file. A document that does not load becomes a failed
/// outcome carrying the load error; schema problems are propagated.
fn validate_one(schemas: &SchemaValidator, path: &Path, profile: RuleProfile) -> Result<DescriptorOutcome> {
    let descriptor = path.display().to_string();
    match validate_descriptor_file(schemas, path, profile) {
        Ok(report) => Ok(DescriptorOutcome {
            descriptor,
            ok: report.is_ok(),
            messages: report.into_messages(),
        }),
        Err(e @ SchemaValidationError::DocumentLoadError { .. }) => {
            tracing::warn!(path = %path.display(), error = %e, "descriptor not loaded");
            Ok(DescriptorOutcome {
                descriptor,
                ok: false,
                messages: vec![e.to_string()],
            })
        }
        Err(e) => Err(e).context("descriptor schema is unusable"),
    }
}

/// Render outcomes in the requested format.
pub fn render(outcomes: &[DescriptorOutcome], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(outcomes).context("failed to serialize report")
        }
        OutputFormat::Text => Ok(outcomes
            .iter()
            .map(render_text)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn render_text(outcome: &DescriptorOutcome) -> String {
    if outcome.ok {
        return format!("{}: OK", outcome.descriptor);
    }
    let mut out = format!("{}:", outcome.descriptor);
    for m in &outcome.messages {
        out.push_str("\n  ");
        out.push_str(m);
    }
    out
}
