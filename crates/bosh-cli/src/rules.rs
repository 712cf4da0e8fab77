//! # Rules Subcommand
//!
//! Prints the rule catalogue of a profile, one rule per line.

use anyhow::Result;
use bosh_validate::RuleProfile;
use clap::Args;

use crate::config::CliConfig;

/// Arguments for the `bosh rules` subcommand.
#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Rule profile to list: classic or extended.
    #[arg(long)]
    pub profile: Option<RuleProfile>,
}

/// Execute the rules subcommand.
pub fn run_rules(args: &RulesArgs, config: &CliConfig) -> Result<u8> {
    let profile = args.profile.unwrap_or(config.profile);
    println!("{}", catalogue(profile));
    Ok(0)
}

/// The catalogue of `profile` as `<code>  <summary>` lines.
pub fn catalogue(profile: RuleProfile) -> String {
    profile
        .rules()
        .map(|r| format!("{}  {}", r.code, r.summary))
        .collect::<Vec<_>>()
        .join("\n")
}
