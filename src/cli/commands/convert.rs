use anyhow::Result;

use super::super::{args::ConvertArgs, exit_status::ExitStatus, watch::watch_sources};
use super::helper::{build_options, run_and_report};

pub fn convert(args: ConvertArgs) -> Result<ExitStatus> {
    let mut options = build_options(args.source_dir, args.output_dir, &args.common)?;
    if let Some(format) = args.format {
        options.format = format;
    }
    options.keep_going |= args.keep_going;

    let verbose = args.common.verbose;
    let status = run_and_report(&options, verbose)?;

    // Watching only starts once the sources convert cleanly.
    if !args.watch || status != ExitStatus::Success {
        return Ok(status);
    }

    watch_sources(&options, verbose)
}
