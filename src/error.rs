use std::path::PathBuf;
use thiserror::Error;

/// Exit status when no command is given
pub const ERROR_MISSING_COMMAND: i32 = 1;
/// Exit status when the command token is not in the table
pub const ERROR_UNKNOWN_COMMAND: i32 = 2;
/// Exit status when a VERSION parameter is missing or extra ones are given
pub const ERROR_MISSING_PARAM: i32 = 3;
/// Exit status for filesystem and process failures
pub const ERROR_FAILURE: i32 = 1;

/// Pipconf error types
#[derive(Error, Debug)]
pub enum PipconfError {
    #[error("missing command")]
    MissingCommand,

    #[error("unknown command \"{args}\"")]
    UnknownCommand { args: String },

    #[error("{reason}: \"{args}\"")]
    MissingParam { reason: &'static str, args: String },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot copy {} -> {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("cannot launch editor '{editor}': {source}")]
    EditorLaunch {
        editor: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot determine the home directory")]
    NoHomeDir,
}

impl PipconfError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PipconfError::Io {
            path: path.into(),
            source,
        }
    }

    /// Usage errors print the usage text before the diagnostic
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            PipconfError::MissingCommand
                | PipconfError::UnknownCommand { .. }
                | PipconfError::MissingParam { .. }
        )
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PipconfError::MissingCommand => ERROR_MISSING_COMMAND,
            PipconfError::UnknownCommand { .. } => ERROR_UNKNOWN_COMMAND,
            PipconfError::MissingParam { .. } => ERROR_MISSING_PARAM,
            PipconfError::Io { .. }
            | PipconfError::Copy { .. }
            | PipconfError::Output(_)
            | PipconfError::EditorLaunch { .. }
            | PipconfError::NoHomeDir => ERROR_FAILURE,
        }
    }
}

/// Result type for pipconf operations
pub type Result<T> = std::result::Result<T, PipconfError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display_unknown_command() {
        let err = PipconfError::UnknownCommand {
            args: "frobnicate now".to_string(),
        };
        assert_eq!(err.to_string(), "unknown command \"frobnicate now\"");
    }

    #[test]
    fn test_error_display_missing_param() {
        let err = PipconfError::MissingParam {
            reason: "too many parameters",
            args: "save12".to_string(),
        };
        assert_eq!(err.to_string(), "too many parameters: \"save12\"");
    }

    #[test]
    fn test_error_display_io_names_path() {
        let err = PipconfError::io(
            "/tmp/pip.conf.v1",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert_eq!(err.to_string(), "/tmp/pip.conf.v1: No such file or directory");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(PipconfError::MissingCommand.exit_code(), 1);
        assert_eq!(
            PipconfError::UnknownCommand { args: String::new() }.exit_code(),
            2
        );
        assert_eq!(
            PipconfError::MissingParam {
                reason: "missing version",
                args: String::new()
            }
            .exit_code(),
            3
        );
        assert_eq!(PipconfError::NoHomeDir.exit_code(), 1);
    }

    #[test]
    fn test_only_usage_errors_are_usage() {
        assert!(PipconfError::MissingCommand.is_usage());
        assert!(!PipconfError::NoHomeDir.is_usage());
        assert!(!PipconfError::io("x", io::Error::other("boom")).is_usage());
    }
}
