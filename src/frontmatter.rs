//! Locate and decode YAML front matter in a raw cell.
//!
//! A block is the text between the first and second `---` marker of the
//! trimmed cell source. Anything after the second marker is ignored.

use serde_json::{Map, Number as JsonNumber, Value as JsonValue};
use serde_yaml::Value as YamlValue;

use crate::error::{Result, frontmatter};

/// Front-matter delimiter
pub const MARKER: &str = "---";

/// Return the block text when `source` carries front matter.
///
/// The trimmed source must start with the marker and contain it at least
/// twice (non-overlapping, the leading one included).
pub fn extract_block(source: &str) -> Option<&str> {
    let trimmed = source.trim();
    if !trimmed.starts_with(MARKER) || trimmed.matches(MARKER).count() < 2 {
        return None;
    }
    trimmed.splitn(3, MARKER).nth(1)
}

/// Top-level front matter entries, in the order they appear in the block
pub type Entries = Vec<(String, JsonValue)>;

/// Decode block text into metadata entries.
///
/// An empty block (YAML null) yields no entries. Anything other than a
/// mapping at the top level is an error. `<<` merge keys are expanded and
/// duplicate keys are rejected.
pub fn parse_mapping(block: &str) -> Result<Entries> {
    let mut value: YamlValue = serde_yaml::from_str(block)?;
    value.apply_merge()?;
    match value {
        YamlValue::Null => Ok(Vec::new()),
        YamlValue::Mapping(mapping) => mapping_entries(mapping),
        YamlValue::Tagged(tagged) => match tagged.value {
            YamlValue::Mapping(mapping) => mapping_entries(mapping),
            other => Err(frontmatter::not_mapping(describe(&other))),
        },
        other => Err(frontmatter::not_mapping(describe(&other))),
    }
}

fn mapping_entries(mapping: serde_yaml::Mapping) -> Result<Entries> {
    mapping
        .into_iter()
        .map(|(key, value)| Ok((key_to_string(key)?, yaml_to_json(value)?)))
        .collect()
}

fn convert_mapping(mapping: serde_yaml::Mapping) -> Result<Map<String, JsonValue>> {
    Ok(mapping_entries(mapping)?.into_iter().collect())
}

/// Convert a YAML value into the generic JSON value stored in notebook
/// metadata. Tags are dropped; non-finite floats keep their YAML spelling.
fn yaml_to_json(value: YamlValue) -> Result<JsonValue> {
    Ok(match value {
        YamlValue::Null => JsonValue::Null,
        YamlValue::Bool(b) => JsonValue::Bool(b),
        YamlValue::Number(n) => number_to_json(&n),
        YamlValue::String(s) => JsonValue::String(s),
        YamlValue::Sequence(seq) => JsonValue::Array(
            seq.into_iter()
                .map(yaml_to_json)
                .collect::<Result<Vec<_>>>()?,
        ),
        YamlValue::Mapping(mapping) => JsonValue::Object(convert_mapping(mapping)?),
        YamlValue::Tagged(tagged) => yaml_to_json(tagged.value)?,
    })
}

fn number_to_json(n: &serde_yaml::Number) -> JsonValue {
    if let Some(i) = n.as_i64() {
        JsonValue::from(i)
    } else if let Some(u) = n.as_u64() {
        JsonValue::from(u)
    } else {
        n.as_f64()
            .and_then(JsonNumber::from_f64)
            .map_or_else(|| JsonValue::String(n.to_string()), JsonValue::Number)
    }
}

/// Scalar keys become their textual form, like JSON object keys must.
fn key_to_string(key: YamlValue) -> Result<String> {
    match key {
        YamlValue::String(s) => Ok(s),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Null => Ok("null".to_string()),
        YamlValue::Tagged(tagged) => key_to_string(tagged.value),
        other => Err(frontmatter::invalid_key(describe(&other))),
    }
}

fn describe(value: &YamlValue) -> &'static str {
    match value {
        YamlValue::Null => "null",
        YamlValue::Bool(_) => "a boolean",
        YamlValue::Number(_) => "a number",
        YamlValue::String(_) => "a string",
        YamlValue::Sequence(_) => "a sequence",
        YamlValue::Mapping(_) => "a mapping",
        YamlValue::Tagged(_) => "a tagged value",
    }
}
