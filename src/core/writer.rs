use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;

/// Path of the dictionary file for one locale and namespace:
/// `<output_dir>/<locale>/<namespace>.json`.
pub fn dictionary_path(output_dir: &Path, locale: &str, namespace: &str) -> PathBuf {
    output_dir.join(locale).join(format!("{}.json", namespace))
}

/// Write a dictionary with 2-space indentation and a trailing newline,
/// creating the locale directory if needed.
pub fn write_dictionary(
    output_dir: &Path,
    locale: &str,
    namespace: &str,
    dictionary: &Value,
) -> Result<PathBuf> {
    let path = dictionary_path(output_dir, locale, namespace);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(dictionary).context("Failed to serialize JSON")?;

    fs::write(&path, format!("{}\n", content))
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(path)
}
