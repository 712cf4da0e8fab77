//! # CLI Configuration
//!
//! Optional YAML file passed with `--config`. Every key is optional and
//! command-line flags win over file values.
//!
//! ```yaml
//! schema: schemas/descriptor.schema.json
//! profile: extended
//! format: json
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use bosh_core::BoshError;
use bosh_validate::RuleProfile;
use serde::Deserialize;

/// How reports are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<path>: OK`, or `<path>:` followed by indented findings.
    #[default]
    Text,
    /// A JSON array with one outcome object per descriptor.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown output format '{other}' (expected 'text' or 'json')"
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Settings read from the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Descriptor schema file; the bundled schema when unset.
    pub schema: Option<PathBuf>,
    pub profile: RuleProfile,
    pub format: OutputFormat,
}

impl CliConfig {
    /// Read a configuration file.
    ///
    /// A relative `schema` path is resolved against the directory holding
    /// the configuration file.
    ///
    /// # Errors
    ///
    /// [`BoshError::Io`] if the file cannot be read, [`BoshError::Config`]
    /// if it is not a valid configuration.
    pub fn load(path: &Path) -> Result<Self, BoshError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yaml::from_str(&content)
            .map_err(|e| BoshError::Config(format!("{}: {e}", path.display())))?;

        if let (Some(schema), Some(parent)) = (&config.schema, path.parent()) {
            if schema.is_relative() {
                config.schema = Some(parent.join(schema));
            }
        }

        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Configuration from `path`, or defaults when no file was given.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, BoshError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}
