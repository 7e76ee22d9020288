//! Module: config
//!
//! Purpose: Compile-time configuration for the command line interpreter.
//!
//! Architecture:
//! - Buffer capacities are const generics on [`Cli`](crate::cli::Cli);
//!   the constants here are their defaults
//! - Wire strings (terminator, newline, prompt) live in [`CliConfig`]
//! - Nothing here is mutable at run time
//!
//! Safety: Plain `Copy` data, no statics with interior mutability.

/// Default command line buffer capacity (bytes, terminator included).
pub const CLI_COMMAND_LENGTH: usize = 64;

/// Default response buffer capacity (bytes, last byte reserved).
pub const CLI_RESPONSE_LENGTH: usize = 128;

/// Default newline string, also the default line terminator.
pub const CLI_STRING_NEWLINE: &str = "\r\n";

/// Default prompt string.
pub const CLI_STRING_PROMPT: &str = "> ";

/// Wire strings used by a [`Cli`](crate::cli::Cli) session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliConfig {
    /// Sequence that ends an input line. An empty terminator never matches.
    pub terminator: &'static str,
    /// Sequence emitted between echo, response and prompt.
    pub newline: &'static str,
    /// Sequence emitted when the session is ready for the next line.
    pub prompt: &'static str,
}

impl CliConfig {
    /// Defaults: `"\r\n"` terminator and newline, `"> "` prompt.
    pub const fn new() -> Self {
        Self {
            terminator: CLI_STRING_NEWLINE,
            newline: CLI_STRING_NEWLINE,
            prompt: CLI_STRING_PROMPT,
        }
    }

    pub const fn with_terminator(mut self, terminator: &'static str) -> Self {
        self.terminator = terminator;
        self
    }

    pub const fn with_newline(mut self, newline: &'static str) -> Self {
        self.newline = newline;
        self
    }

    pub const fn with_prompt(mut self, prompt: &'static str) -> Self {
        self.prompt = prompt;
        self
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self::new()
    }
}
