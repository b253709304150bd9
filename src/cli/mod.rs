use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod report;
mod run;
mod watch;

pub use args::{Arguments, CheckArgs, Command, CommonArgs, ConvertArgs};
pub use exit_status::ExitStatus;
pub use report::{print_conversion, print_conversion_to};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    run::run(args)
}
