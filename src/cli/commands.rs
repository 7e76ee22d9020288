//! Command table and dispatch

use core::fmt::Write;

use super::parser::ParsedLine;
use super::response::ResponseBuffer;
use super::CliError;

/// Version string (set by build.rs, includes git hash)
pub const VERSION: &str = env!("VERSION_STRING");

/// What a handler reports back to the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    /// Response written
    Ok,
    /// Arguments malformed; the dispatcher replaces the response
    Invalid,
    /// Reserved, handled like `Ok`
    Fail,
}

/// Handler signature: argument (if any) and response writer
pub type CommandFn = fn(Option<&str>, &mut dyn Write) -> CommandResult;

/// Command descriptor
pub struct CommandDescriptor {
    pub name: &'static str,
    pub brief: &'static str,
    pub handler: CommandFn,
}

/// Default command set
pub static COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor { name: "GET_LOG", brief: "Dump the log test pattern", handler: cmd_get_log },
    CommandDescriptor { name: "HELP", brief: "List commands", handler: cmd_help },
    CommandDescriptor { name: "VERSION", brief: "Firmware version", handler: cmd_version },
];

/// How a dispatched line was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Line held only spaces; response left empty
    Blank,
    /// Handler ran and kept its response
    Executed(CommandResult),
    /// No such command
    NotFound,
    /// Handler returned `Invalid`
    Rejected,
}

/// Find a command by exact name. Later entries shadow earlier ones.
pub fn find<'t>(table: &'t [CommandDescriptor], name: &str) -> Option<&'t CommandDescriptor> {
    table.iter().rev().find(|c| c.name == name)
}

/// Run the command on `line` and leave its response in `out`.
pub fn execute<const N: usize>(
    table: &[CommandDescriptor],
    line: &str,
    parsed: &ParsedLine,
    out: &mut ResponseBuffer<N>,
) -> Dispatch {
    out.clear();

    if parsed.is_blank() {
        return Dispatch::Blank;
    }

    let Some(command) = find(table, parsed.command_str(line)) else {
        out.set_error(CliError::CommandNotFound);
        return Dispatch::NotFound;
    };

    match (command.handler)(parsed.argument_str(line), &mut *out) {
        CommandResult::Invalid => {
            out.set_error(CliError::ArgumentInvalid);
            Dispatch::Rejected
        }
        result => Dispatch::Executed(result),
    }
}

/// Get all command names of a table
pub fn command_names(table: &[CommandDescriptor]) -> impl Iterator<Item = &'static str> + '_ {
    table.iter().map(|c| c.name)
}

// --- Command Implementations ---

fn cmd_get_log(arg: Option<&str>, out: &mut dyn Write) -> CommandResult {
    if arg.is_some() {
        return CommandResult::Invalid;
    }

    for c in b'a'..=b'z' {
        let _ = out.write_char(c as char);
    }
    CommandResult::Ok
}

fn cmd_help(arg: Option<&str>, out: &mut dyn Write) -> CommandResult {
    match arg {
        Some(name) => match find(COMMANDS, name) {
            Some(c) => {
                let _ = write!(out, "{}: {}", c.name, c.brief);
            }
            None => return CommandResult::Invalid,
        },
        None => {
            for (i, name) in command_names(COMMANDS).enumerate() {
                if i > 0 {
                    let _ = out.write_char(' ');
                }
                let _ = out.write_str(name);
            }
        }
    }
    CommandResult::Ok
}

fn cmd_version(arg: Option<&str>, out: &mut dyn Write) -> CommandResult {
    if arg.is_some() {
        return CommandResult::Invalid;
    }

    let _ = out.write_str(VERSION);
    CommandResult::Ok
}
