//! Global log stream instance.

use crate::logging::LogStream;

/// Log stream of the default interpreter session.
///
/// Producers: [`Cli`](crate::cli::Cli) sessions built with `Cli::default()`.
/// Consumer: the transport loop, via [`drain_log_stream`](crate::uart_logger::drain_log_stream).
pub static CLI_LOG_STREAM: LogStream = LogStream::new();
