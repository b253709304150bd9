use std::process::ExitCode;

use crate::core::ConversionReport;

/// Exit status for CLI commands.
///
/// - `Success` (0): every namespace passed validation
/// - `Failure` (1): at least one namespace failed validation, or `init` refused to overwrite
/// - `Error` (2): the run could not complete (missing directory, parse error, I/O error, ...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn from_report(report: &ConversionReport) -> Self {
        if report.is_success() {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
