//! Line command interpreter for byte-stream endpoints
//!
//! Zero heap allocation - fixed buffers sized by const generics.
//! Non-blocking - every call returns after O(line length) work.

pub mod commands;
pub mod error;
pub mod line_buffer;
pub mod parser;
pub mod pending;
pub mod response;
pub mod session;

pub use commands::{execute, CommandDescriptor, CommandFn, CommandResult, Dispatch, COMMANDS, VERSION};
pub use error::CliError;
pub use line_buffer::LineBuffer;
pub use parser::{parse_line, ParsedLine, Span};
pub use pending::{Pending, Step};
pub use response::ResponseBuffer;
pub use session::Cli;
