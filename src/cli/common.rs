//! Shared CLI error and exit-code types.

use std::fmt;

/// Result alias for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// Process exit codes, stable for scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully
    Success = 0,
    /// Invalid arguments or input content
    Validation = 1,
    /// File or process I/O failure
    Io = 2,
}

/// CLI-level error: a message plus the exit code it maps to.
#[derive(Debug)]
pub struct CliError {
    /// Human-readable failure description
    pub message: String,
    /// Exit code reported to the shell
    pub code: ExitCode,
}

impl CliError {
    /// Creates an I/O failure error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: ExitCode::Io,
        }
    }

    /// Creates a validation failure error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: ExitCode::Validation,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::Success as i32, 0);
        assert_eq!(ExitCode::Validation as i32, 1);
        assert_eq!(ExitCode::Io as i32, 2);
    }

    #[test]
    fn test_error_constructors() {
        assert_eq!(CliError::io("boom").code, ExitCode::Io);
        assert_eq!(CliError::validation("bad").code, ExitCode::Validation);
        assert_eq!(CliError::io("boom").to_string(), "boom");
    }
}
