//! YAML-to-JSON value conversion.
//!
//! Descriptors may be authored in YAML, but the schema collaborator and the
//! typed model both work on `serde_json::Value`. Only the JSON-compatible
//! subset of YAML is accepted.

use serde_json::{Map, Number, Value};
use serde_yaml::Value as Yaml;

use crate::error::BoshError;

/// Convert a YAML tree to the equivalent JSON tree.
///
/// Tags are transparent: `!custom x` converts as `x`. Scalar map keys
/// become their string form.
///
/// # Errors
///
/// [`BoshError::YamlConversion`] for a non-scalar map key or a float JSON
/// cannot carry (`.nan`, `.inf`).
pub fn yaml_to_json_value(yaml: &Yaml) -> Result<Value, BoshError> {
    Ok(match yaml {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(*b),
        Yaml::Number(n) => Value::Number(json_number(n)?),
        Yaml::String(s) => Value::String(s.clone()),
        Yaml::Sequence(items) => Value::Array(
            items
                .iter()
                .map(yaml_to_json_value)
                .collect::<Result<_, _>>()?,
        ),
        Yaml::Mapping(mapping) => {
            let mut object = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                object.insert(map_key(key)?, yaml_to_json_value(value)?);
            }
            Value::Object(object)
        }
        Yaml::Tagged(tagged) => yaml_to_json_value(&tagged.value)?,
    })
}

fn json_number(n: &serde_yaml::Number) -> Result<Number, BoshError> {
    if let Some(i) = n.as_i64() {
        return Ok(i.into());
    }
    if let Some(u) = n.as_u64() {
        return Ok(u.into());
    }
    n.as_f64()
        .and_then(Number::from_f64)
        .ok_or_else(|| BoshError::YamlConversion(format!("number {n} has no JSON form")))
}

fn map_key(key: &Yaml) -> Result<String, BoshError> {
    match key {
        Yaml::String(s) => Ok(s.clone()),
        Yaml::Number(n) => Ok(n.to_string()),
        Yaml::Bool(b) => Ok(b.to_string()),
        other => Err(BoshError::YamlConversion(format!(
            "map key {other:?} is not a scalar"
        ))),
    }
}
