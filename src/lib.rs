//! # usbd-cli
//!
//! Line-oriented command interpreter for a USB byte-stream endpoint.
//!
//! ## Architecture
//!
//! Two cooperating state machines inside one [`Cli`] session:
//! - Input: bytes are filtered into a fixed line buffer until the terminator
//!   arrives, then the line is tokenized and dispatched synchronously
//! - Output: a mask of pending obligations is drained in fixed priority,
//!   one fragment per poll (echo, newline, response, newline, prompt)
//!
//! No heap, no blocking, no locks. The transport owns the poll cadence.

#![cfg_attr(not(test), no_std)]

pub mod cli;
pub mod config;
pub mod log_globals;
pub mod logging;
pub mod uart_logger;

pub use cli::{Cli, CliError, CommandDescriptor, CommandResult, COMMANDS};
pub use config::CliConfig;
pub use log_globals::CLI_LOG_STREAM;
pub use logging::{LogLevel, LogStream};
