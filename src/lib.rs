//! yamlocale - YAML to JSON i18n dictionary converter
//!
//! yamlocale reads translation files written in YAML, where every leaf holds the
//! text for each locale side by side, validates them, and writes one JSON
//! dictionary per locale and namespace for i18n runtimes such as next-intl.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, watch mode, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Conversion engine (parse, flatten, validate, format, write)
//! - `issues`: Issue type definitions reported by the pipeline

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
