//! Core conversion engine.
//!
//! The tree algorithms are pure and perform no I/O:
//!
//! - `tree`: node classification and the depth-first walker
//! - `namespace`: namespace / prefix resolution from a file's location
//! - `flatten`: dotted-key flattening and locale extraction
//! - `validate`: duplicate and missing-locale detection
//! - `format`: flat or nested per-locale dictionaries
//!
//! The remaining modules do the I/O around them:
//!
//! - `scanner`: finds YAML sources in a directory
//! - `parsers`: YAML parsing into translation trees
//! - `writer`: JSON dictionary output
//! - `pipeline`: a full conversion run

pub mod flatten;
pub mod format;
pub mod namespace;
pub mod parsers;
pub mod pipeline;
pub mod scanner;
pub mod tree;
pub mod validate;
pub mod writer;

pub use flatten::{
    StructuralAmbiguity, TranslationEntry, extract_languages, extract_languages_from,
    find_ambiguities, flatten_tree,
};
pub use format::{LocaleDictionaries, OutputFormat, convert_to_output_format};
pub use namespace::{FileBinding, resolve_binding};
pub use pipeline::{ConversionReport, ConvertOptions, NamespaceReport, run_conversion};
pub use tree::{LocaleLeaf, NodeKind, Tree, TreeWalker, Visit, classify_node};
pub use validate::{ValidationError, ValidationResult, validate_translations};
