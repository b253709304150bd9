use anyhow::Result;

use super::super::{args::CheckArgs, exit_status::ExitStatus};
use super::helper::{build_options, run_and_report};

/// Validate the sources without writing any dictionary.
///
/// Every namespace is checked so one run reports all problems.
pub fn check(args: CheckArgs) -> Result<ExitStatus> {
    let mut options = build_options(args.source_dir, None, &args.common)?;
    options.output_dir = None;
    options.keep_going = true;

    run_and_report(&options, args.common.verbose)
}
