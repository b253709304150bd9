//! Report formatting and printing utilities.
//!
//! Separate from the conversion pipeline so yamlocale can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use crate::config::{CONFIG_FILE_NAME, Config};
use crate::core::{ConversionReport, NamespaceReport};
use crate::issues::{Issue, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

/// Print a conversion (or check) report to stdout.
pub fn print_conversion(report: &ConversionReport, verbose: bool) {
    print_conversion_to(report, verbose, &mut io::stdout().lock());
}

/// Print a conversion report to a custom writer.
pub fn print_conversion_to<W: Write>(report: &ConversionReport, verbose: bool, writer: &mut W) {
    let _ = writeln!(
        writer,
        "Found {} YAML {}",
        report.file_count,
        plural(report.file_count, "file", "files")
    );
    let _ = writeln!(
        writer,
        "{} {}",
        if report.languages_detected {
            "Detected languages:"
        } else {
            "Languages:"
        },
        report.languages.join(", ").cyan()
    );

    for namespace in &report.namespaces {
        print_namespace(namespace, report, verbose, writer);
    }

    if !report.skipped_namespaces.is_empty() {
        let _ = writeln!(writer);
        let _ = writeln!(
            writer,
            "{} skipped {} {} after the failure: {}",
            "note:".bold().blue(),
            report.skipped_namespaces.len(),
            plural(report.skipped_namespaces.len(), "namespace", "namespaces"),
            report.skipped_namespaces.join(", ")
        );
    }

    print_summary(report, writer);
}

fn print_namespace<W: Write>(
    namespace: &NamespaceReport,
    report: &ConversionReport,
    verbose: bool,
    writer: &mut W,
) {
    let _ = writeln!(writer);
    for issue in &namespace.issues {
        print_issue(issue, writer);
    }

    if !namespace.is_valid() {
        let errors = namespace.error_count();
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "Validation failed for namespace: {} ({} {})",
                namespace.namespace,
                errors,
                plural(errors, "error", "errors")
            )
            .red()
        );
        return;
    }

    let keys = format!(
        "{} {}",
        namespace.entry_count,
        plural(namespace.entry_count, "key", "keys")
    );
    let line = if report.output_dir.is_some() {
        format!(
            "{}: {}, {} {} written ({})",
            namespace.namespace,
            keys,
            namespace.written.len(),
            plural(namespace.written.len(), "file", "files"),
            report.format
        )
    } else {
        format!("{}: {}", namespace.namespace, keys)
    };
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), line);

    if verbose {
        for path in &namespace.written {
            let _ = writeln!(writer, "    {} {}", "Generated:".dimmed(), path.display());
        }
    }
}

/// Print one issue in cargo style:
///
/// ```text
/// error: Missing translations for key: title  missing-translation
///   --> common
///    = missing: en
/// ```
fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity = match issue.severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity,
        issue.message(),
        issue.rule().to_string().dimmed().cyan()
    );

    let location = match issue {
        Issue::StructuralAmbiguity(ambiguity) => {
            format!("{} ({})", ambiguity.namespace, ambiguity.file.display())
        }
        _ => issue.namespace().to_string(),
    };
    let _ = writeln!(writer, "  {} {}", "-->".blue(), location);

    if let Some(detail) = issue.detail() {
        let _ = writeln!(writer, "   {} {}", "=".blue(), detail);
    }
}

fn print_summary<W: Write>(report: &ConversionReport, writer: &mut W) {
    let _ = writeln!(writer);

    if report.is_success() {
        let message = match &report.output_dir {
            Some(output_dir) => format!(
                "Conversion completed: {} {} written to {}",
                report.written_count(),
                plural(report.written_count(), "file", "files"),
                output_dir.display()
            ),
            None => format!(
                "Checked {} {} - all translations are valid",
                report.namespaces.len(),
                plural(report.namespaces.len(), "namespace", "namespaces")
            ),
        };
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green());
        return;
    }

    let failed: Vec<&str> = report
        .failed_namespaces()
        .map(|ns| ns.namespace.as_str())
        .collect();
    let errors = report.error_count();
    let _ = writeln!(
        writer,
        "{} {}",
        FAILURE_MARK.red(),
        format!(
            "{} {} in {} {}: {}",
            errors,
            plural(errors, "error", "errors"),
            failed.len(),
            plural(failed.len(), "namespace", "namespaces"),
            failed.join(", ")
        )
        .red()
    );
}

/// Print the result of `init` creating the config file.
pub fn print_init_created_to<W: Write>(config: &Config, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );
    let _ = writeln!(
        writer,
        "   {} sourceDir: {}, outputDir: {}, format: {}",
        "=".blue(),
        config.source_dir,
        config.output_dir,
        config.format
    );
}

/// Print why `init` refused to run.
pub fn print_init_exists_to<W: Write>(writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}: {} already exists",
        "error".bold().red(),
        CONFIG_FILE_NAME
    );
    let _ = writeln!(
        writer,
        "   {} edit it, or delete it to start over",
        "=".blue()
    );
}
