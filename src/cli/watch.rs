//! Watch mode: regenerate dictionaries when YAML sources change.

use std::{path::PathBuf, process, sync::mpsc, time::Duration};

use anyhow::{Context, Result};
use colored::Colorize;
use indexmap::IndexSet;
use notify::{Event, RecursiveMode};
use notify_debouncer_full::{DebounceEventResult, new_debouncer};
use tracing::debug;

use super::{commands::helper::run_and_report, exit_status::ExitStatus};
use crate::core::{ConvertOptions, namespace::SOURCE_EXTENSIONS};

const DEBOUNCE: Duration = Duration::from_millis(500);

/// Watch `options.source_dir` and rerun the conversion after each burst of changes.
///
/// Runs until Ctrl+C, which exits the process with status 0.
pub fn watch_sources(options: &ConvertOptions, verbose: bool) -> Result<ExitStatus> {
    ctrlc::set_handler(|| {
        println!("\n{}", "Stopping watch mode...".dimmed());
        process::exit(0);
    })
    .context("Failed to set Ctrl+C handler")?;

    let (tx, rx) = mpsc::channel::<DebounceEventResult>();
    let mut debouncer =
        new_debouncer(DEBOUNCE, None, tx).context("Failed to create file watcher")?;
    debouncer
        .watch(&options.source_dir, RecursiveMode::Recursive)
        .with_context(|| format!("Failed to watch {}", options.source_dir.display()))?;

    println!(
        "\n{} {}",
        "Watching".bold().cyan(),
        options.source_dir.display().to_string().green()
    );
    println!("{}", "Press Ctrl+C to stop".dimmed());

    for result in rx {
        match result {
            Ok(events) => {
                let changed = changed_sources(events.iter().map(|e| &e.event));
                if changed.is_empty() {
                    continue;
                }

                for path in &changed {
                    println!(
                        "\n{} {}",
                        "File changed:".dimmed(),
                        path.display().to_string().yellow()
                    );
                }

                if let Err(err) = run_and_report(options, verbose) {
                    eprintln!("{} {:#}", "Regeneration failed:".red().bold(), err);
                }
            }
            Err(errors) => {
                for error in errors {
                    eprintln!("{} {}", "watch error:".yellow().bold(), error);
                }
            }
        }
    }

    debug!("file watcher channel closed");
    Ok(ExitStatus::Success)
}

/// YAML paths touched by `events`, in first-seen order. Pure access events are ignored.
fn changed_sources<'a>(events: impl IntoIterator<Item = &'a Event>) -> IndexSet<PathBuf> {
    events
        .into_iter()
        .filter(|event| !event.kind.is_access())
        .flat_map(|event| event.paths.iter())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
        })
        .cloned()
        .collect()
}
