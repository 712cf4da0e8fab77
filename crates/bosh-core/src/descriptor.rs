//! # Tool Descriptor Model
//!
//! Statically-typed view of a Boutiques tool descriptor. Wire field names
//! are kebab-case (`command-line`, `output-files`, `requires-inputs`, ...).
//!
//! ## Optionality
//!
//! Every optional collection materializes as an empty `Vec` at ingestion,
//! whether the field is absent or explicitly `null`. Optional scalars stay
//! `Option` so rules can tell "not declared" apart from a declared value
//! (e.g. `optional: false` marks a required input, a missing `optional`
//! does not).

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::BoshError;
use crate::yaml::yaml_to_json_value;

/// Deserialize a field that may be absent or `null` into its default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Root of a tool descriptor document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Descriptor {
    /// Tool name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Tool version string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_version: Option<String>,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Descriptor schema version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,
    /// Container image the tool runs in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker_image: Option<String>,
    /// Container registry index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker_index: Option<String>,
    /// Invocation template; command-line keys are substituted into it.
    pub command_line: String,
    /// Tool inputs, in document order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub inputs: Vec<Input>,
    /// Output files, in document order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub output_files: Vec<OutputFile>,
    /// Input groups, in document order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub groups: Vec<Group>,
}

/// Value type of an input.
///
/// Types this toolchain does not know about are preserved in `Other` so
/// the type-specific rules simply skip them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InputType {
    String,
    File,
    Flag,
    Number,
    Enum,
    Other(String),
}

impl From<String> for InputType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "String" => Self::String,
            "File" => Self::File,
            "Flag" => Self::Flag,
            "Number" => Self::Number,
            "Enum" => Self::Enum,
            _ => Self::Other(s),
        }
    }
}

impl From<InputType> for String {
    fn from(t: InputType) -> Self {
        t.as_str().to_string()
    }
}

impl InputType {
    /// The wire name of this type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "String",
            Self::File => "File",
            Self::Flag => "Flag",
            Self::Number => "Number",
            Self::Enum => "Enum",
            Self::Other(s) => s,
        }
    }
}

impl std::fmt::Display for InputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tool input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Input {
    /// Identifier, unique across inputs, outputs and groups.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub input_type: InputType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Placeholder substituted into the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_line_key: Option<String>,
    /// Flag emitted before the value (required for Flag inputs).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_line_flag: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub list: bool,
    /// `Some(false)` marks a required input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub requires_inputs: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub disables_inputs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub enum_value_choices: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_list_entries: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_list_entries: Option<f64>,
}

impl Input {
    /// True only when the descriptor explicitly says `optional: false`.
    pub fn is_required(&self) -> bool {
        self.optional == Some(false)
    }

    pub fn is_flag(&self) -> bool {
        self.input_type == InputType::Flag
    }

    pub fn is_number(&self) -> bool {
        self.input_type == InputType::Number
    }

    pub fn is_enum(&self) -> bool {
        self.input_type == InputType::Enum
    }
}

/// One output file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OutputFile {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_line_key: Option<String>,
    /// Path of the produced file; may embed input command-line keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_template: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub list: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
}

/// A named set of inputs with a selection policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Group {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Input ids, in document order (duplicates are preserved so they can
    /// be reported).
    #[serde(default, deserialize_with = "null_as_default")]
    pub members: Vec<String>,
    /// At most one member may be given.
    #[serde(default, deserialize_with = "null_as_default")]
    pub mutually_exclusive: bool,
    /// At least one member must be given.
    #[serde(default, deserialize_with = "null_as_default")]
    pub one_is_required: bool,
    /// Either every member is given or none is.
    #[serde(default, deserialize_with = "null_as_default")]
    pub all_or_none: bool,
}

impl Descriptor {
    /// Materialize a descriptor from an already-parsed JSON tree.
    ///
    /// # Errors
    ///
    /// Returns [`BoshError::Shape`] if the tree does not have the shape of
    /// a descriptor.
    pub fn from_value(value: &Value) -> Result<Self, BoshError> {
        Self::deserialize(value).map_err(|e| BoshError::Shape(e.to_string()))
    }

    /// Parse a descriptor from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, BoshError> {
        let value: Value = serde_json::from_str(text).map_err(|e| BoshError::json(&e))?;
        Self::from_value(&value)
    }

    /// Parse a descriptor from YAML text.
    ///
    /// The YAML tree is converted to the JSON value tree first so both
    /// formats go through the same materialization.
    pub fn from_yaml_str(text: &str) -> Result<Self, BoshError> {
        let yaml: serde_yaml::Value = serde_yaml::from_str(text).map_err(|e| BoshError::yaml(&e))?;
        let value = yaml_to_json_value(&yaml)?;
        Self::from_value(&value)
    }

    /// First input with the given id, in document order.
    pub fn input_by_id(&self, id: &str) -> Option<&Input> {
        self.inputs.iter().find(|i| i.id == id)
    }

    /// Input ids in document order.
    pub fn input_ids(&self) -> Vec<&str> {
        self.inputs.iter().map(|i| i.id.as_str()).collect()
    }

    /// Every id in the document: inputs, then outputs, then groups.
    pub fn all_ids(&self) -> Vec<&str> {
        self.inputs
            .iter()
            .map(|i| i.id.as_str())
            .chain(self.output_files.iter().map(|o| o.id.as_str()))
            .chain(self.groups.iter().map(|g| g.id.as_str()))
            .collect()
    }
}
