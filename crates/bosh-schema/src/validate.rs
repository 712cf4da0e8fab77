//! # Schema Validation
//!
//! Structural validation of descriptor documents against JSON Schema
//! definitions (Draft 2020-12). This is the first stage of the pipeline:
//! its violations become the prior errors of the semantic stage.
//!
//! ## Schema Resolution
//!
//! Schemas use `$id` URIs of the form
//! `https://schemas.boutiques.dev/bosh/<filename>`. Cross-schema `$ref`s
//! resolve against the schemas loaded into the registry; nothing is ever
//! fetched over the network. Internal `#/$defs/<name>` references are
//! resolved by the jsonschema crate natively.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use jsonschema::{Retrieve, Uri, ValidationOptions, Validator};
use serde_json::Value;
use thiserror::Error;

/// URI prefix used by the bundled schemas.
const SCHEMA_URI_PREFIX: &str = "https://schemas.boutiques.dev/bosh/";

/// Filename of the descriptor schema.
pub const DESCRIPTOR_SCHEMA: &str = "descriptor.schema.json";

/// Descriptor schema compiled into the binary.
const BUNDLED_DESCRIPTOR_SCHEMA: &str = include_str!("../../../schemas/descriptor.schema.json");

/// Resolves `$ref` URIs from the in-memory registry.
struct LocalSchemaRetriever {
    schemas_by_uri: HashMap<String, Value>,
}

impl Retrieve for LocalSchemaRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let uri_str = uri.as_str();

        if let Some(value) = self.schemas_by_uri.get(uri_str) {
            return Ok(value.clone());
        }

        let filename = uri_str.rsplit('/').next().unwrap_or(uri_str);
        if let Some(value) = self.schemas_by_uri.get(filename) {
            return Ok(value.clone());
        }

        // Metaschemas and anything else unknown resolve to a permissive
        // schema instead of a network request.
        Ok(serde_json::json!({}))
    }
}

/// Error during schema validation.
#[derive(Error, Debug)]
pub enum SchemaValidationError {
    /// The document did not conform to the schema.
    #[error("validation failed against schema '{schema_name}':\n{violations}")]
    ValidationFailed {
        schema_name: String,
        violations: ValidationViolations,
    },

    /// The schema file could not be loaded.
    #[error("schema load error for '{schema_name}': {reason}")]
    SchemaLoadError { schema_name: String, reason: String },

    /// The document file could not be read or parsed.
    #[error("document load error for '{path}': {reason}")]
    DocumentLoadError { path: String, reason: String },

    /// The compiled validator could not be built (invalid schema).
    #[error("validator build error for schema '{schema_name}': {reason}")]
    ValidatorBuildError { schema_name: String, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single structural violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer to the violating field in the document.
    pub instance_path: String,
    /// JSON Pointer to the schema keyword that failed.
    pub schema_path: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.instance_path, self.message)
        }
    }
}

/// Collection of violations, displayed one per indented line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {v}")?;
        }
        Ok(())
    }
}

/// A schema registry backed by the `jsonschema` crate.
///
/// ## Thread Safety
///
/// `SchemaValidator` is `Send + Sync`; schemas are loaded once at
/// construction and only read afterwards.
#[derive(Debug)]
pub struct SchemaValidator {
    /// Where the schemas came from (`None` for the bundled schema).
    source: Option<PathBuf>,
    /// Schema filename -> parsed schema.
    schemas: HashMap<String, Value>,
}

impl SchemaValidator {
    /// Load every `*.schema.json` file in `schema_dir`.
    ///
    /// # Errors
    ///
    /// Returns `SchemaLoadError` if the directory cannot be read or any
    /// schema file is not valid JSON.
    pub fn new(schema_dir: impl AsRef<Path>) -> Result<Self, SchemaValidationError> {
        let schema_dir = schema_dir.as_ref().to_path_buf();
        let mut schemas = HashMap::new();

        let entries = std::fs::read_dir(&schema_dir).map_err(|e| {
            SchemaValidationError::SchemaLoadError {
                schema_name: schema_dir.display().to_string(),
                reason: format!("cannot read schema directory: {e}"),
            }
        })?;

        for entry in entries {
            let path = entry?.path();
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if name.ends_with(".schema.json") {
                    let content = std::fs::read_to_string(&path)?;
                    schemas.insert(name.to_string(), parse_schema(name, &content)?);
                }
            }
        }

        tracing::debug!(
            dir = %schema_dir.display(),
            count = schemas.len(),
            "loaded schema directory"
        );

        Ok(Self {
            source: Some(schema_dir),
            schemas,
        })
    }

    /// Load a single schema file and register it as the descriptor schema.
    pub fn from_schema_file(path: impl AsRef<Path>) -> Result<Self, SchemaValidationError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SchemaValidationError::SchemaLoadError {
                schema_name: path.display().to_string(),
                reason: format!("cannot read file: {e}"),
            }
        })?;
        let value = parse_schema(&path.display().to_string(), &content)?;

        let mut schemas = HashMap::new();
        schemas.insert(DESCRIPTOR_SCHEMA.to_string(), value);
        Ok(Self {
            source: Some(path.to_path_buf()),
            schemas,
        })
    }

    /// Registry holding only the descriptor schema shipped with this crate.
    pub fn bundled() -> Result<Self, SchemaValidationError> {
        let mut schemas = HashMap::new();
        schemas.insert(
            DESCRIPTOR_SCHEMA.to_string(),
            parse_schema(DESCRIPTOR_SCHEMA, BUNDLED_DESCRIPTOR_SCHEMA)?,
        );
        Ok(Self {
            source: None,
            schemas,
        })
    }

    /// Directory or file the schemas were loaded from.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }

    /// Names of all loaded schemas, sorted.
    pub fn schema_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    pub fn get_schema(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    /// Options with every loaded schema reachable through the retriever,
    /// under its canonical URI, its own `$id`, and its bare filename.
    fn build_options(&self) -> ValidationOptions {
        let mut opts = jsonschema::options();
        opts.with_draft(jsonschema::Draft::Draft202012);

        let mut schemas_by_uri: HashMap<String, Value> = HashMap::new();
        for (filename, value) in &self.schemas {
            schemas_by_uri.insert(format!("{SCHEMA_URI_PREFIX}{filename}"), value.clone());
            if let Some(id_str) = value.get("$id").and_then(|v| v.as_str()) {
                schemas_by_uri.insert(id_str.to_string(), value.clone());
            }
            schemas_by_uri.insert(filename.clone(), value.clone());
        }

        opts.with_retriever(LocalSchemaRetriever { schemas_by_uri });
        opts
    }

    /// Compile the named schema.
    ///
    /// # Errors
    ///
    /// `SchemaLoadError` if the schema is not loaded, `ValidatorBuildError`
    /// if it does not compile.
    pub fn build_validator(&self, schema_name: &str) -> Result<Validator, SchemaValidationError> {
        let schema_value = self.schemas.get(schema_name).ok_or_else(|| {
            SchemaValidationError::SchemaLoadError {
                schema_name: schema_name.to_string(),
                reason: match &self.source {
                    Some(source) => format!("schema not found in {}", source.display()),
                    None => "schema not bundled".to_string(),
                },
            }
        })?;

        self.build_options().build(schema_value).map_err(|e| {
            SchemaValidationError::ValidatorBuildError {
                schema_name: schema_name.to_string(),
                reason: e.to_string(),
            }
        })
    }

    /// Every structural violation of `instance` against the named schema,
    /// in the order the validator reports them.
    pub fn violations(
        &self,
        instance: &Value,
        schema_name: &str,
    ) -> Result<ValidationViolations, SchemaValidationError> {
        let validator = self.build_validator(schema_name)?;
        let violations = validator
            .iter_errors(instance)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect();
        Ok(ValidationViolations { violations })
    }

    /// Validate a parsed JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// `ValidationFailed` with structured details if the document is invalid.
    pub fn validate_value(&self, instance: &Value, schema_name: &str) -> Result<(), SchemaValidationError> {
        let violations = self.violations(instance, schema_name)?;
        if violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaValidationError::ValidationFailed {
                schema_name: schema_name.to_string(),
                violations,
            })
        }
    }
}

fn parse_schema(name: &str, content: &str) -> Result<Value, SchemaValidationError> {
    serde_json::from_str(content).map_err(|e| SchemaValidationError::SchemaLoadError {
        schema_name: name.to_string(),
        reason: format!("invalid JSON: {e}"),
    })
}
