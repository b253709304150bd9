/// Dispatches a parsed command line to its command handler.
///
/// # Returns
/// - `Ok(ExitStatus)` describing how the command ended
/// - `Err` if the command could not run (missing source directory, parse errors, I/O)
use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{check::check, convert::convert, init::init},
    exit_status::ExitStatus,
};

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Convert(args)) => convert(args),
        Some(Command::Check(args)) => check(args),
        Some(Command::Init) => init(),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
