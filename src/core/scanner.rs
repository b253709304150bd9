use std::path::Path;

use anyhow::{Context, Result, bail};
use glob::Pattern;
use tracing::debug;
use walkdir::WalkDir;

use super::namespace::{FileBinding, resolve_binding};
use crate::config::CONFIG_FILE_NAME;

/// Compile `ignores` glob patterns, naming the offending pattern on error.
pub fn compile_ignore_patterns(ignores: &[String]) -> Result<Vec<Pattern>> {
    ignores
        .iter()
        .map(|pattern| {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))
        })
        .collect()
}

/// Find every YAML source under `source_dir` and resolve its namespace and prefix.
///
/// Directory entries are visited in file name order, so the returned order (the
/// file-discovery order) is stable across runs and platforms. Paths matching an
/// `ignores` pattern, relative to `source_dir`, are skipped.
pub fn scan_source_files(source_dir: &Path, ignores: &[String]) -> Result<Vec<FileBinding>> {
    if !source_dir.exists() {
        bail!(
            "Source directory '{}' does not exist.\n\
             Hint: pass it as an argument or set 'sourceDir' in {}.",
            source_dir.display(),
            CONFIG_FILE_NAME
        );
    }

    if !source_dir.is_dir() {
        bail!("'{}' is not a directory.", source_dir.display());
    }

    let patterns = compile_ignore_patterns(ignores)?;
    let mut bindings = Vec::new();

    for entry in WalkDir::new(source_dir).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("Failed to scan directory: {}", source_dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Ok(relative) = path.strip_prefix(source_dir) else {
            continue;
        };

        let relative_str = relative.to_string_lossy();
        if patterns.iter().any(|p| p.matches(&relative_str)) {
            debug!(path = %relative_str, "ignored by pattern");
            continue;
        }

        let relative_dir = relative.parent().unwrap_or(Path::new(""));
        let file_name = entry.file_name().to_string_lossy();
        if let Some((namespace, prefix)) = resolve_binding(relative_dir, &file_name) {
            debug!(path = %relative_str, %namespace, %prefix, "found source file");
            bindings.push(FileBinding {
                namespace,
                prefix,
                path: path.to_path_buf(),
            });
        }
    }

    Ok(bindings)
}
