//! Interpreter session: input framer and output sequencer
//!
//! One [`Cli`] owns every piece of per-connection state. The transport drives
//! it through two entry points, both taking `&mut self`:
//!
//! ```text
//! transport ──input(bytes)──▶ LineBuffer ──terminator──▶ parse + execute
//!     ▲                                                        │
//!     └──────────── output() ◀── Pending (priority) ◀──────────┘
//! ```
//!
//! After a line is framed the session is busy: `input` ignores bytes until
//! `output` has walked the cycle to the prompt. Callers poll `output` until it
//! returns `None` before feeding more data.

use crate::config::{CliConfig, CLI_COMMAND_LENGTH, CLI_RESPONSE_LENGTH};
use crate::log_globals::CLI_LOG_STREAM;
use crate::logging::{timestamp_us, LogStream};

use super::commands::{execute, CommandDescriptor, Dispatch, COMMANDS};
use super::line_buffer::LineBuffer;
use super::parser::{parse_line, ParsedLine};
use super::pending::{Pending, Step};
use super::response::ResponseBuffer;
use super::CliError;

/// Command line interpreter session
pub struct Cli<'a, const CMD: usize = CLI_COMMAND_LENGTH, const RESP: usize = CLI_RESPONSE_LENGTH> {
    line: LineBuffer<CMD>,
    response: ResponseBuffer<RESP>,
    /// Token boundaries of the framed line, set while `LINE_COMPLETE`
    parsed: Option<ParsedLine>,
    pending: Pending,
    commands: &'a [CommandDescriptor],
    config: CliConfig,
    log: &'a LogStream,
}

impl Default for Cli<'static> {
    /// Default command set and wire strings, logging to [`CLI_LOG_STREAM`].
    fn default() -> Self {
        Self::new(COMMANDS, CliConfig::new(), &CLI_LOG_STREAM)
    }
}

impl<'a, const CMD: usize, const RESP: usize> Cli<'a, CMD, RESP> {
    /// Create a session, ready to accept input.
    pub const fn new(commands: &'a [CommandDescriptor], config: CliConfig, log: &'a LogStream) -> Self {
        Self {
            line: LineBuffer::new(),
            response: ResponseBuffer::new(),
            parsed: None,
            pending: Pending::IDLE,
            commands,
            config,
            log,
        }
    }

    /// Feed raw bytes from the transport.
    ///
    /// A no-op while busy or for empty input. Returns
    /// `Err(CliError::CommandOverflow)` when the line buffer fills up; the
    /// overflow message is then queued for output and can be ignored here.
    pub fn input(&mut self, bytes: &[u8]) -> Result<(), CliError> {
        if !self.pending.is_accepting() || bytes.is_empty() {
            return Ok(());
        }

        if let Err(err) = self.line.append(bytes) {
            self.pending.insert(Pending::BUSY | Pending::OVERFLOW);
            crate::cli_warn!(self.log, timestamp_us(), "{} overflow after {} bytes", err.code(), self.line.len());
            return Err(err);
        }

        let Some(end) = self.line.find(self.config.terminator.as_bytes()) else {
            return Ok(());
        };

        let raw = &self.line.as_bytes()[..end];
        let parsed = parse_line(raw);
        // Only printable ASCII reaches the buffer
        let text = core::str::from_utf8(raw).unwrap_or("");
        let outcome = execute(self.commands, text, &parsed, &mut self.response);

        match outcome {
            Dispatch::Blank => {
                crate::cli_debug!(self.log, timestamp_us(), "blank line");
            }
            Dispatch::Executed(result) => {
                crate::cli_info!(self.log, timestamp_us(), "{} -> {:?}, {} bytes", parsed.command_str(text), result, self.response.len());
            }
            Dispatch::NotFound => {
                crate::cli_info!(self.log, timestamp_us(), "{} {}", CliError::CommandNotFound.code(), parsed.command_str(text));
            }
            Dispatch::Rejected => {
                crate::cli_info!(self.log, timestamp_us(), "{} {} {:?}", CliError::ArgumentInvalid.code(), parsed.command_str(text), parsed.argument_str(text));
            }
        }

        self.parsed = Some(parsed);
        self.pending.insert(Pending::BUSY | Pending::LINE_COMPLETE);
        Ok(())
    }

    /// Poll the next output fragment.
    ///
    /// Performs at most one transition per call. `None` means every
    /// obligation is drained and the session accepts input.
    pub fn output(&mut self) -> Option<&[u8]> {
        match self.pending.next_step() {
            Step::Fault(err) => Some(self.fault(err)),
            Step::Unarmed => {
                crate::cli_error!(self.log, timestamp_us(), "output polled with nothing pending");
                Some(self.fault(CliError::Unexpected))
            }
            Step::Echo => self.echo(),
            Step::Newline => {
                self.pending.remove(Pending::NEWLINE);
                Some(self.config.newline.as_bytes())
            }
            Step::Respond => {
                self.pending.update(Pending::NEWLINE | Pending::PROMPT, Pending::RESPONSE);
                Some(self.response.as_bytes())
            }
            Step::Prompt => {
                self.line.reset();
                self.response.reset();
                self.parsed = None;
                self.pending.update(Pending::ECHO, Pending::PROMPT | Pending::BUSY);
                crate::cli_trace!(self.log, timestamp_us(), "prompt, input open");
                Some(self.config.prompt.as_bytes())
            }
        }
    }

    /// Report `err` as the response of this cycle and head for the prompt.
    fn fault(&mut self, err: CliError) -> &'static [u8] {
        self.pending.update(
            Pending::NEWLINE | Pending::PROMPT | Pending::BUSY,
            Pending::ERRORS | Pending::ECHO | Pending::LINE_COMPLETE | Pending::RESPONSE,
        );
        err.message().as_bytes()
    }

    fn echo(&mut self) -> Option<&[u8]> {
        let parsed = match self.parsed {
            Some(parsed) if self.pending.contains(Pending::LINE_COMPLETE) => parsed,
            _ => return self.echo_typed(),
        };

        let span = parsed.echo_span(self.line.read_index());
        let finished = span.end >= parsed.content_end();

        if finished {
            let next = if parsed.is_blank() { Pending::PROMPT } else { Pending::RESPONSE };
            self.pending.update(next | Pending::NEWLINE, Pending::ECHO | Pending::LINE_COMPLETE);
            self.line.set_read_index(self.line.write_index());
        } else {
            // Skip the separator
            self.line.set_read_index(span.end + 1);
        }

        crate::cli_trace!(self.log, timestamp_us(), "echo {}..{}", span.start, span.end);
        Some(&self.line.as_bytes()[span.start..span.end])
    }

    /// Echo of a line still being typed: everything not echoed yet.
    fn echo_typed(&mut self) -> Option<&[u8]> {
        let from = self.line.read_index();
        let to = self.line.write_index();
        if from >= to {
            return None;
        }

        self.line.set_read_index(to);
        Some(&self.line.as_bytes()[from..to])
    }

    /// Whether `input` would accept bytes now
    pub fn is_accepting(&self) -> bool {
        self.pending.is_accepting()
    }

    /// Current output obligations
    pub fn pending(&self) -> Pending {
        self.pending
    }

    pub fn line(&self) -> &LineBuffer<CMD> {
        &self.line
    }

    /// Response of the last dispatched line
    pub fn response(&self) -> &[u8] {
        self.response.as_bytes()
    }

    /// Opening prompt, written once by the transport when the link comes up.
    ///
    /// Later prompts come from [`Cli::output`]; the session state is unchanged.
    pub fn prompt(&self) -> &[u8] {
        self.config.prompt.as_bytes()
    }

    pub fn config(&self) -> &CliConfig {
        &self.config
    }

    pub fn commands(&self) -> &'a [CommandDescriptor] {
        self.commands
    }
}
