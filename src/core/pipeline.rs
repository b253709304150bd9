//! End-to-end conversion run: scan, parse, group, validate, format, write.

use std::path::PathBuf;

use anyhow::{Result, bail};
use indexmap::{IndexMap, IndexSet};
use rayon::prelude::*;
use serde_json::{Map, Value};
use tracing::debug;

use super::{
    FileBinding, OutputFormat, Tree, convert_to_output_format, extract_languages_from,
    find_ambiguities, flatten_tree, parsers::yaml::parse_yaml_file, scanner::scan_source_files,
    validate_translations, writer::write_dictionary,
};
use crate::issues::Issue;

#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub source_dir: PathBuf,
    /// Where dictionaries are written. `None` validates without writing.
    pub output_dir: Option<PathBuf>,
    /// Target locales. `None` detects them from the sources.
    pub languages: Option<Vec<String>>,
    pub format: OutputFormat,
    /// Keep processing namespaces after one fails validation.
    pub keep_going: bool,
    /// Glob patterns (relative to `source_dir`) of files to skip.
    pub ignores: Vec<String>,
}

/// Outcome for one namespace.
#[derive(Debug, Clone)]
pub struct NamespaceReport {
    pub namespace: String,
    pub file_count: usize,
    pub entry_count: usize,
    pub issues: Vec<Issue>,
    /// Dictionary files written; empty when validation failed or in check mode.
    pub written: Vec<PathBuf>,
}

impl NamespaceReport {
    pub fn is_valid(&self) -> bool {
        !self.issues.iter().any(Issue::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.issues.iter().filter(|issue| issue.is_error()).count()
    }
}

/// Result of one conversion run.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub file_count: usize,
    pub languages: Vec<String>,
    /// True when `languages` came from the sources rather than the caller.
    pub languages_detected: bool,
    pub format: OutputFormat,
    /// Namespaces processed, in discovery order.
    pub namespaces: Vec<NamespaceReport>,
    /// Namespaces never reached because an earlier one failed.
    pub skipped_namespaces: Vec<String>,
    pub output_dir: Option<PathBuf>,
}

impl ConversionReport {
    pub fn is_success(&self) -> bool {
        self.namespaces.iter().all(NamespaceReport::is_valid)
    }

    pub fn failed_namespaces(&self) -> impl Iterator<Item = &NamespaceReport> {
        self.namespaces.iter().filter(|ns| !ns.is_valid())
    }

    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.namespaces.iter().flat_map(|ns| ns.issues.iter())
    }

    pub fn error_count(&self) -> usize {
        self.issues().filter(|issue| issue.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues().filter(|issue| !issue.is_error()).count()
    }

    pub fn written_count(&self) -> usize {
        self.namespaces.iter().map(|ns| ns.written.len()).sum()
    }
}

struct ParsedSource {
    binding: FileBinding,
    tree: Tree,
}

/// Parse every source in parallel; results keep discovery order.
fn parse_sources(bindings: Vec<FileBinding>) -> Result<Vec<ParsedSource>> {
    bindings
        .into_par_iter()
        .map(|binding| {
            let tree = parse_yaml_file(&binding.path)?;
            Ok(ParsedSource { binding, tree })
        })
        .collect()
}

fn group_by_namespace(sources: &[ParsedSource]) -> IndexMap<&str, Vec<&ParsedSource>> {
    let mut namespaces: IndexMap<&str, Vec<&ParsedSource>> = IndexMap::new();
    for source in sources {
        namespaces
            .entry(source.binding.namespace.as_str())
            .or_default()
            .push(source);
    }
    namespaces
}

fn process_namespace(
    namespace: &str,
    files: &[&ParsedSource],
    languages: &[String],
    options: &ConvertOptions,
) -> Result<NamespaceReport> {
    let mut entries = Vec::new();
    let mut issues = Vec::new();

    for source in files {
        entries.extend(flatten_tree(&source.tree, &source.binding.prefix));
        issues.extend(
            find_ambiguities(&source.tree)
                .into_iter()
                .map(|ambiguity| {
                    Issue::from_ambiguity(namespace, source.binding.path.clone(), ambiguity)
                }),
        );
    }

    let validation = validate_translations(&entries, languages);
    let valid = validation.valid;
    issues.extend(
        validation
            .errors
            .into_iter()
            .map(|error| Issue::from_validation(namespace, error)),
    );
    debug!(namespace, entries = entries.len(), valid, "validated namespace");

    let mut written = Vec::new();
    if valid && let Some(output_dir) = &options.output_dir {
        let dictionaries = convert_to_output_format(&entries, options.format);
        let empty = Value::Object(Map::new());
        for locale in languages {
            let dictionary = dictionaries.get(locale).unwrap_or(&empty);
            let path = write_dictionary(output_dir, locale, namespace, dictionary)?;
            debug!(path = %path.display(), "wrote dictionary");
            written.push(path);
        }
    }

    Ok(NamespaceReport {
        namespace: namespace.to_string(),
        file_count: files.len(),
        entry_count: entries.len(),
        issues,
        written,
    })
}

/// Run one conversion.
///
/// By default the run stops at the first namespace that fails validation; files
/// already written for earlier namespaces stay on disk. With `keep_going` every
/// namespace is processed and only the valid ones are written.
///
/// # Errors
/// - the source directory is missing or holds no YAML files
/// - no target locale was given and none could be detected
/// - a source file cannot be read or parsed, or an output file cannot be written
pub fn run_conversion(options: &ConvertOptions) -> Result<ConversionReport> {
    let bindings = scan_source_files(&options.source_dir, &options.ignores)?;
    if bindings.is_empty() {
        bail!("No YAML files found in {}", options.source_dir.display());
    }
    let file_count = bindings.len();
    debug!(file_count, "scanned source files");

    let sources = parse_sources(bindings)?;

    let (languages, languages_detected) = match &options.languages {
        Some(languages) => (
            languages
                .iter()
                .cloned()
                .collect::<IndexSet<_>>()
                .into_iter()
                .collect::<Vec<_>>(),
            false,
        ),
        None => (
            extract_languages_from(sources.iter().map(|source| &source.tree))
                .into_iter()
                .collect::<Vec<_>>(),
            true,
        ),
    };
    if languages.is_empty() {
        bail!("No languages found or specified");
    }
    debug!(?languages, languages_detected, "target languages");

    let mut report = ConversionReport {
        file_count,
        languages: languages.clone(),
        languages_detected,
        format: options.format,
        namespaces: Vec::new(),
        skipped_namespaces: Vec::new(),
        output_dir: options.output_dir.clone(),
    };

    let mut namespaces = group_by_namespace(&sources).into_iter();
    for (namespace, files) in namespaces.by_ref() {
        let namespace_report = process_namespace(namespace, &files, &languages, options)?;
        let failed = !namespace_report.is_valid();
        report.namespaces.push(namespace_report);

        if failed && !options.keep_going {
            debug!(namespace, "validation failed, stopping");
            break;
        }
    }
    report.skipped_namespaces = namespaces.map(|(namespace, _)| namespace.to_string()).collect();

    Ok(report)
}
