use std::process::ExitCode;

/// Process exit status of `tscat`.
///
/// `Failure` is reserved for `check` finding error-severity issues; warnings
/// alone (unfinished, vanished, untranslated) still exit with `Success`.
/// `Error` covers everything that stopped a command from running: a missing
/// directory or catalog, invalid configuration, an existing config on `init`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// Status for a finished run that found `error_count` errors.
    pub fn from_error_count(error_count: usize) -> Self {
        if error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        let code: u8 = match status {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        };
        ExitCode::from(code)
    }
}
