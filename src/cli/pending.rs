//! Pending-output flags and their drain order
//!
//! The flags are obligations, not states: several may be set at once. Each
//! call to [`Cli::output`](super::Cli::output) decodes the mask into exactly
//! one [`Step`] by fixed priority:
//!
//! ```text
//! errors > ECHO > NEWLINE > RESPONSE > PROMPT > (nothing: unexpected)
//! ```

use bitflags::bitflags;

use super::CliError;

bitflags! {
    /// Output obligations of a session
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Pending: u16 {
        /// Echo input bytes back to the host
        const ECHO          = 0x001;
        /// Emit the newline string
        const NEWLINE       = 0x002;
        /// Emit the prompt and reopen input
        const PROMPT        = 0x004;
        /// Emit the response buffer
        const RESPONSE      = 0x008;
        /// A line was framed and dispatched
        const LINE_COMPLETE = 0x010;
        /// Input is closed until the prompt is emitted
        const BUSY          = 0x020;
        /// Input overflowed the line buffer
        const OVERFLOW      = 0x100;
        /// Reserved error slot
        const OTHER_ERROR   = 0x200;

        /// Any error bit
        const ERRORS = Self::OVERFLOW.bits() | Self::OTHER_ERROR.bits();
    }
}

/// The single action chosen for one output poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Report an error as this cycle's response
    Fault(CliError),
    Echo,
    Newline,
    Respond,
    Prompt,
    /// No obligation at all
    Unarmed,
}

impl Pending {
    /// State of a fresh session: echo armed, input open.
    pub const IDLE: Self = Self::ECHO;

    /// Decode the highest-priority obligation
    pub fn next_step(self) -> Step {
        if self.intersects(Self::ERRORS) {
            let err = if self.contains(Self::OVERFLOW) {
                CliError::CommandOverflow
            } else {
                CliError::Unexpected
            };
            Step::Fault(err)
        } else if self.contains(Self::ECHO) {
            Step::Echo
        } else if self.contains(Self::NEWLINE) {
            Step::Newline
        } else if self.contains(Self::RESPONSE) {
            Step::Respond
        } else if self.contains(Self::PROMPT) {
            Step::Prompt
        } else {
            Step::Unarmed
        }
    }

    /// Apply a transition: clear `clear`, then set `set`.
    pub fn update(&mut self, set: Self, clear: Self) {
        self.remove(clear);
        self.insert(set);
    }

    /// Input is refused while busy
    pub fn is_accepting(self) -> bool {
        !self.contains(Self::BUSY)
    }
}

impl Default for Pending {
    fn default() -> Self {
        Self::IDLE
    }
}
