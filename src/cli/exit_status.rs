use std::process::ExitCode;

/// Exit status of the CLI.
///
/// - `Success` (0): scan finished, regardless of how many strings were found
/// - `Failure` (1): command refused to run (e.g. `init` with an existing config)
/// - `Error` (2): run aborted (unreadable file, bad config or mapping file)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}
