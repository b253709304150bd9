//! Per-locale output dictionaries: the inverse of flattening.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::flatten::TranslationEntry;

/// Shape of the generated dictionaries.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Dotted keys mapped to strings: `{"button.add": "Add"}`
    Flat,
    /// Objects mirroring the key hierarchy: `{"button": {"add": "Add"}}`
    #[default]
    Nested,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Flat => write!(f, "flat"),
            OutputFormat::Nested => write!(f, "nested"),
        }
    }
}

/// Dictionaries keyed by locale, in order of first appearance.
pub type LocaleDictionaries = IndexMap<String, Value>;

/// Regroup entries by locale and build one dictionary per locale.
///
/// Entries lacking a locale simply contribute nothing to it. Key collisions are
/// resolved by the last write.
pub fn convert_to_output_format(
    entries: &[TranslationEntry],
    format: OutputFormat,
) -> LocaleDictionaries {
    let mut by_locale: IndexMap<&str, Vec<(&str, &str)>> = IndexMap::new();
    for entry in entries {
        for (locale, value) in &entry.translations {
            by_locale
                .entry(locale.as_str())
                .or_default()
                .push((entry.key.as_str(), value.as_str()));
        }
    }

    by_locale
        .into_iter()
        .map(|(locale, items)| {
            let dictionary = match format {
                OutputFormat::Flat => to_flat(&items),
                OutputFormat::Nested => to_nested(&items),
            };
            (locale.to_string(), Value::Object(dictionary))
        })
        .collect()
}

fn to_flat(items: &[(&str, &str)]) -> Map<String, Value> {
    let mut result = Map::new();
    for (key, value) in items {
        result.insert(key.to_string(), Value::String(value.to_string()));
    }
    result
}

fn to_nested(items: &[(&str, &str)]) -> Map<String, Value> {
    let mut result = Map::new();
    for (key, value) in items {
        let parts: Vec<&str> = key.split('.').collect();
        insert_nested(&mut result, &parts, Value::String(value.to_string()));
    }
    result
}

/// Insert a value at a nested path, creating intermediate objects as needed.
///
/// A string sitting where an intermediate object is needed is replaced by an
/// object; the last write wins at the point of conflict.
fn insert_nested(root: &mut Map<String, Value>, path: &[&str], value: Value) {
    let Some((first, rest)) = path.split_first() else {
        return;
    };

    if rest.is_empty() {
        root.insert(first.to_string(), value);
        return;
    }

    let next_level = root
        .entry(first.to_string())
        .or_insert_with(|| Value::Object(Map::new()));

    if !next_level.is_object() {
        *next_level = Value::Object(Map::new());
    }

    if let Value::Object(inner) = next_level {
        insert_nested(inner, rest, value);
    }
}
