//! Validation of a namespace's flattened entries.

use std::collections::HashSet;
use std::fmt;

use super::flatten::TranslationEntry;

/// A problem found in one namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The key lacks one or more required locales, listed in required order.
    Missing { key: String, languages: Vec<String> },
    /// The key was already defined earlier in the namespace.
    Duplicate { key: String },
}

impl ValidationError {
    pub fn key(&self) -> &str {
        match self {
            ValidationError::Missing { key, .. } | ValidationError::Duplicate { key } => key,
        }
    }

    /// Missing locales; empty for duplicates.
    pub fn languages(&self) -> &[String] {
        match self {
            ValidationError::Missing { languages, .. } => languages,
            ValidationError::Duplicate { .. } => &[],
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Missing { key, .. } => {
                write!(f, "Missing translations for key: {}", key)
            }
            ValidationError::Duplicate { key } => write!(f, "Duplicate key found: {}", key),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

/// Check every entry for duplicate keys and missing locales.
///
/// A duplicate takes precedence: its missing-locale check is skipped. All entries
/// are checked, so one pass reports every problem.
pub fn validate_translations<S: AsRef<str>>(
    entries: &[TranslationEntry],
    required_locales: &[S],
) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for entry in entries {
        if !seen.insert(entry.key.as_str()) {
            errors.push(ValidationError::Duplicate {
                key: entry.key.clone(),
            });
            continue;
        }

        let missing: Vec<String> = required_locales
            .iter()
            .map(|locale| locale.as_ref())
            .filter(|locale| !entry.translations.contains_key(*locale))
            .map(str::to_string)
            .collect();

        if !missing.is_empty() {
            errors.push(ValidationError::Missing {
                key: entry.key.clone(),
                languages: missing,
            });
        }
    }

    ValidationResult {
        valid: errors.is_empty(),
        errors,
    }
}
