use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};
use serde_yaml::Value as YamlValue;

use crate::core::Tree;

/// Parse a YAML translation file into a [`Tree`].
pub fn parse_yaml_file(path: &Path) -> Result<Tree> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read YAML file: {}", path.display()))?;

    parse_yaml_str(&content)
        .with_context(|| format!("Failed to parse YAML file: {}", path.display()))
}

/// Parse YAML text into a [`Tree`].
///
/// - An empty document is an empty tree.
/// - Numbers and booleans become strings (`count: 3` → `"3"`).
/// - `null` values stay in the tree as blanks. A blank locale is reported as missing,
///   and a key whose locales are all blank becomes one blank message.
/// - Sequences are rejected: translation trees only hold mappings and strings.
/// - Keys that collide once stringified (`1` and `"1"`) are rejected.
pub fn parse_yaml_str(content: &str) -> Result<Tree> {
    if content.trim().is_empty() {
        return Ok(Tree::new());
    }

    let document: YamlValue = serde_yaml::from_str(content)?;
    match untag(document) {
        YamlValue::Null => Ok(Tree::new()),
        YamlValue::Mapping(mapping) => convert_mapping(mapping, &mut Vec::new()),
        other => bail!(
            "expected a mapping of translation keys at the document root, found {}",
            kind(&other)
        ),
    }
}

fn untag(value: YamlValue) -> YamlValue {
    match value {
        YamlValue::Tagged(tagged) => untag(tagged.value),
        other => other,
    }
}

fn kind(value: &YamlValue) -> &'static str {
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

fn convert_key(key: YamlValue, path: &[String]) -> Result<String> {
    match untag(key) {
        YamlValue::String(s) => Ok(s),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Bool(b) => Ok(b.to_string()),
        other => bail!(
            "unsupported key type ({}) under '{}'",
            kind(&other),
            display_path(path)
        ),
    }
}

fn convert_mapping(mapping: serde_yaml::Mapping, path: &mut Vec<String>) -> Result<Tree> {
    let mut tree = Map::new();
    for (key, value) in mapping {
        let key = convert_key(key, path)?;
        if tree.contains_key(&key) {
            bail!(
                "duplicate key '{}' under '{}' (keys are compared as strings)",
                key,
                display_path(path)
            );
        }
        path.push(key.clone());
        let converted = convert_value(value, path)?;
        path.pop();
        tree.insert(key, converted);
    }
    Ok(tree)
}

/// A non-empty mapping whose values are all `null`, e.g. `title: {en: ~, ja: ~}`.
fn is_blank_mapping(mapping: &serde_yaml::Mapping) -> bool {
    !mapping.is_empty() && mapping.values().all(YamlValue::is_null)
}

fn convert_value(value: YamlValue, path: &mut Vec<String>) -> Result<Value> {
    Ok(match value {
        YamlValue::Null => Value::Null,
        YamlValue::String(s) => Value::String(s),
        YamlValue::Number(n) => Value::String(n.to_string()),
        YamlValue::Bool(b) => Value::String(b.to_string()),
        YamlValue::Mapping(mapping) if is_blank_mapping(&mapping) => Value::Null,
        YamlValue::Mapping(mapping) => Value::Object(convert_mapping(mapping, path)?),
        YamlValue::Sequence(_) => bail!(
            "sequences are not supported as translation values (at '{}')",
            display_path(path)
        ),
        YamlValue::Tagged(tagged) => convert_value(tagged.value, path)?,
    })
}

fn display_path(path: &[String]) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.join(".")
    }
}
