//! Namespace and key prefix resolution from a source file's location.
//!
//! - `common.yaml` → namespace `common`, no prefix
//! - `pages/home.yaml` → namespace `pages`, prefix `home`
//! - `pages/admin/users.yml` → namespace `pages`, prefix `users`

use std::path::{Component, Path, PathBuf};

/// File extensions recognized as translation sources.
pub const SOURCE_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// The resolved identity of one source file before flattening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBinding {
    /// Output grouping (one JSON file per locale per namespace).
    pub namespace: String,
    /// Key segment prepended to every key of this file. Empty for top-level files.
    pub prefix: String,
    pub path: PathBuf,
}

/// Strip a `.yaml` / `.yml` extension. Returns `None` for other files.
pub fn source_stem(file_name: &str) -> Option<&str> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    SOURCE_EXTENSIONS.contains(&ext).then_some(stem)
}

/// Resolve `(namespace, prefix)` for a file given its directory relative to the
/// source root. Only path strings are inspected.
///
/// Returns `None` when `file_name` is not a YAML source.
pub fn resolve_binding(relative_dir: &Path, file_name: &str) -> Option<(String, String)> {
    let stem = source_stem(file_name)?;

    let first_dir = relative_dir.components().find_map(|component| match component {
        Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
        _ => None,
    });

    Some(match first_dir {
        Some(dir) => (dir, stem.to_string()),
        None => (stem.to_string(), String::new()),
    })
}
