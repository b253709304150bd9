//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `convert`: Convert YAML translations into per-locale JSON dictionaries
//! - `check`: Validate YAML translations without writing anything
//! - `init`: Initialize a yamlocale configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};
use indexmap::IndexSet;

use crate::core::OutputFormat;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Convert(args)) => args.common.verbose,
            Some(Command::Check(args)) => args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Arguments shared by `convert` and `check`.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Comma-separated list of languages (e.g. ja,en). Detected from the YAML files if omitted
    #[arg(short, long, value_delimiter = ',', env = "YAMLOCALE_LANGUAGES")]
    pub languages: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Trimmed, non-empty, de-duplicated languages, or `None` when none were given.
    pub fn languages(&self) -> Option<Vec<String>> {
        let languages: IndexSet<&str> = self
            .languages
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .collect();
        (!languages.is_empty()).then(|| languages.into_iter().map(String::from).collect())
    }
}

#[derive(Debug, Parser)]
pub struct ConvertArgs {
    /// Source directory containing YAML files (overrides config file)
    pub source_dir: Option<PathBuf>,

    /// Output directory for JSON files (overrides config file)
    pub output_dir: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format (default: nested)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Watch mode: regenerate automatically when YAML files change
    #[arg(short, long)]
    pub watch: bool,

    /// Keep converting other namespaces after one fails validation
    #[arg(long)]
    pub keep_going: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Source directory containing YAML files (overrides config file)
    pub source_dir: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert YAML translations into per-locale JSON dictionaries
    Convert(ConvertArgs),
    /// Validate YAML translations (missing locales, duplicate keys) without writing files
    Check(CheckArgs),
    /// Initialize a new .yamlocalerc.json configuration file
    Init,
}
