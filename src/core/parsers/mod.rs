//! Source file parsers.
//!
//! - `yaml`: YAML translation files into [`Tree`](crate::core::Tree)s

pub mod yaml;
