use std::{
    env,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::debug;

use super::super::{args::CommonArgs, exit_status::ExitStatus, report::print_conversion};
use crate::{
    config::{ConfigLoadResult, load_config},
    core::{ConvertOptions, run_conversion},
};

/// Build conversion options from the config file, with CLI arguments taking precedence.
///
/// Paths given on the command line stay relative to the working directory; paths
/// from the config file are resolved against the directory holding it.
pub fn build_options(
    source_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    common: &CommonArgs,
) -> Result<ConvertOptions> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let ConfigLoadResult {
        config,
        from_file,
        base_dir,
    } = load_config(&cwd)?;

    if from_file {
        debug!(base_dir = %base_dir.display(), "loaded config file");
    }

    let source_dir =
        source_dir.unwrap_or_else(|| resolve_config_path(&cwd, &base_dir, &config.source_dir));
    let output_dir =
        output_dir.unwrap_or_else(|| resolve_config_path(&cwd, &base_dir, &config.output_dir));

    Ok(ConvertOptions {
        source_dir,
        output_dir: Some(output_dir),
        languages: common.languages().or(config.languages),
        format: config.format,
        keep_going: config.keep_going,
        ignores: config.ignores,
    })
}

/// Resolve a config path against `base_dir`, shown relative to `cwd` when possible.
fn resolve_config_path(cwd: &Path, base_dir: &Path, value: &str) -> PathBuf {
    let value = Path::new(value);
    if value.is_absolute() {
        return value.to_path_buf();
    }

    let mut resolved = base_dir.to_path_buf();
    for component in value.components() {
        match component {
            Component::CurDir => {}
            other => resolved.push(other),
        }
    }

    match resolved.strip_prefix(cwd) {
        Ok(relative) if relative.as_os_str().is_empty() => PathBuf::from("."),
        Ok(relative) => relative.to_path_buf(),
        Err(_) => resolved,
    }
}

/// Run one conversion and print its report.
pub fn run_and_report(options: &ConvertOptions, verbose: bool) -> Result<ExitStatus> {
    let report = run_conversion(options)?;
    print_conversion(&report, verbose);
    Ok(ExitStatus::from_report(&report))
}
