//! Command line tokenizer
//!
//! Splits a framed line into command name and argument without touching the
//! line buffer. Only the space character separates tokens; tabs are content.
//!
//! ```text
//! "  SET  5  "
//!    ^^^         command
//!       ^        separator
//!         ^      argument (leading spaces stripped)
//!          ^^    trailing spaces, trimmed
//! ```

/// Half-open byte range into the line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Slice `line` by this span
    pub fn of<'a>(&self, line: &'a str) -> &'a str {
        line.get(self.start..self.end).unwrap_or("")
    }
}

/// Token boundaries of one line, as offsets from the line start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParsedLine {
    /// The command name (first token, may be empty)
    pub command: Span,
    /// Everything after the first separator, leading spaces stripped
    pub argument: Option<Span>,
    /// Length of the line, i.e. offset of its terminator in the buffer
    pub end: usize,
}

impl ParsedLine {
    /// True when the line held nothing but spaces
    pub fn is_blank(&self) -> bool {
        self.command.is_empty()
    }

    /// Offset one past the last non-space byte
    pub fn content_end(&self) -> usize {
        self.argument.map_or(self.command.end, |arg| arg.end)
    }

    /// Range of the echo fragment starting at `from`.
    ///
    /// Fragments end at the command/argument separator and at the end of the
    /// trimmed content, matching the token boundaries. The separator itself
    /// is never echoed, so a cursor resting on it moves to the byte after.
    pub fn echo_span(&self, from: usize) -> Span {
        match self.argument {
            Some(_) if from < self.command.end => Span::new(from, self.command.end),
            Some(_) => {
                let start = from.max(self.command.end + 1);
                Span::new(start, self.content_end().max(start))
            }
            None => Span::new(from, self.content_end().max(from)),
        }
    }

    pub fn command_str<'a>(&self, line: &'a str) -> &'a str {
        self.command.of(line)
    }

    pub fn argument_str<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.argument.map(|arg| arg.of(line))
    }
}

/// Tokenize a line (terminator excluded)
pub fn parse_line(line: &[u8]) -> ParsedLine {
    let start = line.iter().position(|&b| b != b' ').unwrap_or(line.len());
    let end = line.iter().rposition(|&b| b != b' ').map_or(start, |i| i + 1);

    let (command, argument) = match line[start..end].iter().position(|&b| b == b' ') {
        None => (Span::new(start, end), None),
        Some(offset) => {
            let sep = start + offset;
            // Content is right-trimmed, so a non-space follows the separator
            let skip = line[sep + 1..end]
                .iter()
                .position(|&b| b != b' ')
                .unwrap_or(0);
            (Span::new(start, sep), Some(Span::new(sep + 1 + skip, end)))
        }
    };

    ParsedLine {
        command,
        argument,
        end: line.len(),
    }
}
