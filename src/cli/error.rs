//! Interpreter error types

/// Interpreter error with code and wire message
///
/// None of these stop the interpreter: each one is reported to the host as
/// the response of the current cycle, followed by newline and prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliError {
    /// E01: Input line reached the command buffer capacity
    CommandOverflow,
    /// E02: Output polled with no pending obligation
    Unexpected,
    /// E03: No command registered under that name
    CommandNotFound,
    /// E04: Handler rejected its arguments
    ArgumentInvalid,
}

impl CliError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::CommandOverflow => "E01",
            Self::Unexpected => "E02",
            Self::CommandNotFound => "E03",
            Self::ArgumentInvalid => "E04",
        }
    }

    /// Get the message sent to the host
    pub fn message(&self) -> &'static str {
        match self {
            Self::CommandOverflow => "Error : Command buffer overflow.",
            Self::Unexpected => "Error : Unexpected problem occured.",
            Self::CommandNotFound => "Error : Command not found.",
            Self::ArgumentInvalid => "Error : Argument invalid.",
        }
    }
}

impl core::fmt::Display for CliError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}
