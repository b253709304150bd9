//! Flattening of translation trees into dotted-key entries, and locale discovery.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::tree::{LocaleLeaf, Tree, TreeWalker, Visit};

/// One translation key with all of its locale values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationEntry {
    /// Dotted key path, e.g. `button.add`.
    pub key: String,
    pub translations: LocaleLeaf,
}

impl TranslationEntry {
    pub fn new(key: impl Into<String>, translations: LocaleLeaf) -> Self {
        Self {
            key: key.into(),
            translations,
        }
    }
}

/// A mixed leaf/interior node whose scalar children were ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralAmbiguity {
    /// Dotted path of the mixed node (without the file prefix). Empty for the root.
    pub path: String,
    pub skipped_keys: Vec<String>,
}

/// Build the dotted key for a leaf found at `path` inside a file with `prefix`.
fn compose_key(prefix: &str, path: &[&str]) -> String {
    match (prefix.is_empty(), path.is_empty()) {
        (_, true) => prefix.to_string(),
        (true, false) => path.join("."),
        (false, false) => format!("{}.{}", prefix, path.join(".")),
    }
}

/// Flatten a tree into entries in depth-first key order.
///
/// Duplicate keys are emitted as-is; detecting them is the validator's job.
pub fn flatten_tree(tree: &Tree, prefix: &str) -> Vec<TranslationEntry> {
    TreeWalker::new(tree)
        .leaves()
        .map(|(path, translations)| TranslationEntry::new(compose_key(prefix, &path), translations))
        .collect()
}

/// Report every mixed node in the tree.
pub fn find_ambiguities(tree: &Tree) -> Vec<StructuralAmbiguity> {
    TreeWalker::new(tree)
        .filter_map(|visit| match visit {
            Visit::Mixed { path, skipped } => Some(StructuralAmbiguity {
                path: path.join("."),
                skipped_keys: skipped.into_iter().map(String::from).collect(),
            }),
            Visit::Leaf { .. } => None,
        })
        .collect()
}

/// Collect the locales used by the leaves of one tree, in discovery order.
pub fn extract_languages(tree: &Tree) -> IndexSet<String> {
    extract_languages_from([tree])
}

/// Union of the locales across several trees, in discovery order.
pub fn extract_languages_from<'a>(trees: impl IntoIterator<Item = &'a Tree>) -> IndexSet<String> {
    let mut languages = IndexSet::new();
    for tree in trees {
        for (_, translations) in TreeWalker::new(tree).leaves() {
            languages.extend(translations.into_keys());
        }
    }
    languages
}
