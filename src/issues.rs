//! Issue types for conversion results.
//!
//! Each issue is self-contained, carrying the namespace (and file, where one is
//! known) so the reporter can display it without further lookups.

use std::path::PathBuf;

use crate::core::{StructuralAmbiguity, ValidationError};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Withholds the namespace's output.
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingTranslation,
    DuplicateKey,
    StructuralAmbiguity,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MissingTranslation => write!(f, "missing-translation"),
            Rule::DuplicateKey => write!(f, "duplicate-key"),
            Rule::StructuralAmbiguity => write!(f, "structural-ambiguity"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Key that lacks one or more required locales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTranslationIssue {
    pub namespace: String,
    pub key: String,
    /// Missing locales, in required order.
    pub languages: Vec<String>,
}

/// Key defined more than once within a namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKeyIssue {
    pub namespace: String,
    pub key: String,
}

/// Node mixing string and object children; its string children were ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralAmbiguityIssue {
    pub namespace: String,
    pub file: PathBuf,
    /// Dotted path of the node inside the file (empty for the document root).
    pub path: String,
    pub skipped_keys: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingTranslation(MissingTranslationIssue),
    DuplicateKey(DuplicateKeyIssue),
    StructuralAmbiguity(StructuralAmbiguityIssue),
}

impl Issue {
    pub fn from_validation(namespace: &str, error: ValidationError) -> Self {
        match error {
            ValidationError::Missing { key, languages } => {
                Issue::MissingTranslation(MissingTranslationIssue {
                    namespace: namespace.to_string(),
                    key,
                    languages,
                })
            }
            ValidationError::Duplicate { key } => Issue::DuplicateKey(DuplicateKeyIssue {
                namespace: namespace.to_string(),
                key,
            }),
        }
    }

    pub fn from_ambiguity(namespace: &str, file: PathBuf, ambiguity: StructuralAmbiguity) -> Self {
        Issue::StructuralAmbiguity(StructuralAmbiguityIssue {
            namespace: namespace.to_string(),
            file,
            path: ambiguity.path,
            skipped_keys: ambiguity.skipped_keys,
        })
    }

    pub fn severity(&self) -> Severity {
        match self {
            Issue::MissingTranslation(_) | Issue::DuplicateKey(_) => Severity::Error,
            Issue::StructuralAmbiguity(_) => Severity::Warning,
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::MissingTranslation(_) => Rule::MissingTranslation,
            Issue::DuplicateKey(_) => Rule::DuplicateKey,
            Issue::StructuralAmbiguity(_) => Rule::StructuralAmbiguity,
        }
    }

    pub fn namespace(&self) -> &str {
        match self {
            Issue::MissingTranslation(issue) => &issue.namespace,
            Issue::DuplicateKey(issue) => &issue.namespace,
            Issue::StructuralAmbiguity(issue) => &issue.namespace,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Issue::MissingTranslation(issue) => {
                format!("Missing translations for key: {}", issue.key)
            }
            Issue::DuplicateKey(issue) => format!("Duplicate key found: {}", issue.key),
            Issue::StructuralAmbiguity(issue) => {
                let node = if issue.path.is_empty() {
                    "<root>"
                } else {
                    issue.path.as_str()
                };
                format!("Mixed leaf/interior node: {}", node)
            }
        }
    }

    /// Extra line shown under the location, if any.
    pub fn detail(&self) -> Option<String> {
        match self {
            Issue::MissingTranslation(issue) => {
                Some(format!("missing: {}", issue.languages.join(", ")))
            }
            Issue::DuplicateKey(_) => None,
            Issue::StructuralAmbiguity(issue) => Some(format!(
                "ignored string values: {}",
                issue.skipped_keys.join(", ")
            )),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}
