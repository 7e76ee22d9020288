//! Command table and dispatch tests

use core::fmt::Write;

use usbd_cli::cli::commands::{command_names, execute, find, CommandDescriptor, CommandResult, Dispatch, COMMANDS, VERSION};
use usbd_cli::cli::parser::parse_line;
use usbd_cli::cli::response::ResponseBuffer;

fn run<const N: usize>(table: &[CommandDescriptor], line: &str, out: &mut ResponseBuffer<N>) -> Dispatch {
    let parsed = parse_line(line.as_bytes());
    execute(table, line, &parsed, out)
}

fn write_first(_arg: Option<&str>, out: &mut dyn Write) -> CommandResult {
    let _ = out.write_str("first");
    CommandResult::Ok
}

fn write_second(_arg: Option<&str>, out: &mut dyn Write) -> CommandResult {
    let _ = out.write_str("second");
    CommandResult::Ok
}

fn echo_arg(arg: Option<&str>, out: &mut dyn Write) -> CommandResult {
    match arg {
        Some(arg) => {
            let _ = write!(out, "[{}]", arg);
            CommandResult::Ok
        }
        None => CommandResult::Invalid,
    }
}

fn scribble_then_reject(_arg: Option<&str>, out: &mut dyn Write) -> CommandResult {
    let _ = out.write_str("partial output that must not survive the rejection");
    CommandResult::Invalid
}

fn fail(_arg: Option<&str>, out: &mut dyn Write) -> CommandResult {
    let _ = out.write_str("failed");
    CommandResult::Fail
}

fn flood(_arg: Option<&str>, out: &mut dyn Write) -> CommandResult {
    for _ in 0..100 {
        let _ = out.write_str("0123456789");
    }
    CommandResult::Ok
}

static TEST_COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor { name: "DUP", brief: "", handler: write_first },
    CommandDescriptor { name: "ECHO", brief: "", handler: echo_arg },
    CommandDescriptor { name: "REJECT", brief: "", handler: scribble_then_reject },
    CommandDescriptor { name: "FAIL", brief: "", handler: fail },
    CommandDescriptor { name: "FLOOD", brief: "", handler: flood },
    CommandDescriptor { name: "DUP", brief: "", handler: write_second },
];

#[test]
fn test_command_registry_has_default_commands() {
    let names: Vec<_> = command_names(COMMANDS).collect();
    assert_eq!(names, ["GET_LOG", "HELP", "VERSION"]);
}

#[test]
fn test_get_log_writes_alphabet() {
    let mut out = ResponseBuffer::<128>::new();

    assert_eq!(run(COMMANDS, "GET_LOG", &mut out), Dispatch::Executed(CommandResult::Ok));
    assert_eq!(out.as_str(), "abcdefghijklmnopqrstuvwxyz");
}

#[test]
fn test_get_log_rejects_arguments() {
    let mut out = ResponseBuffer::<128>::new();

    assert_eq!(run(COMMANDS, "GET_LOG all", &mut out), Dispatch::Rejected);
    assert_eq!(out.as_str(), "Error : Argument invalid.");
}

#[test]
fn test_unknown_command() {
    let mut out = ResponseBuffer::<128>::new();

    assert_eq!(run(COMMANDS, "foobar 1 2", &mut out), Dispatch::NotFound);
    assert_eq!(out.as_str(), "Error : Command not found.");
}

#[test]
fn test_lookup_is_case_sensitive() {
    let mut out = ResponseBuffer::<128>::new();

    assert_eq!(run(COMMANDS, "get_log", &mut out), Dispatch::NotFound);
}

#[test]
fn test_blank_line_leaves_empty_response() {
    let mut out = ResponseBuffer::<128>::new();
    out.push_bytes(b"stale");

    assert_eq!(run(COMMANDS, "    ", &mut out), Dispatch::Blank);
    assert!(out.is_empty());
}

#[test]
fn test_help_lists_commands() {
    let mut out = ResponseBuffer::<128>::new();

    assert_eq!(run(COMMANDS, "HELP", &mut out), Dispatch::Executed(CommandResult::Ok));
    assert_eq!(out.as_str(), "GET_LOG HELP VERSION");
}

#[test]
fn test_help_for_one_command() {
    let mut out = ResponseBuffer::<128>::new();

    run(COMMANDS, "HELP   GET_LOG", &mut out);
    assert_eq!(out.as_str(), "GET_LOG: Dump the log test pattern");

    assert_eq!(run(COMMANDS, "HELP nope", &mut out), Dispatch::Rejected);
    assert_eq!(out.as_str(), "Error : Argument invalid.");
}

#[test]
fn test_version_reports_build_string() {
    let mut out = ResponseBuffer::<128>::new();

    run(COMMANDS, "VERSION", &mut out);
    assert_eq!(out.as_str(), VERSION);
    assert!(VERSION.starts_with("usbd-cli v"));
}

#[test]
fn test_last_duplicate_wins() {
    let mut out = ResponseBuffer::<64>::new();

    run(TEST_COMMANDS, "DUP", &mut out);
    assert_eq!(out.as_str(), "second");

    let mut direct = ResponseBuffer::<16>::new();
    let command = find(TEST_COMMANDS, "DUP").unwrap();
    (command.handler)(None, &mut direct);
    assert_eq!(direct.as_str(), "second");
}

#[test]
fn test_argument_is_passed_trimmed() {
    let mut out = ResponseBuffer::<64>::new();

    run(TEST_COMMANDS, "  ECHO    a  b   ", &mut out);
    assert_eq!(out.as_str(), "[a  b]");

    assert_eq!(run(TEST_COMMANDS, "ECHO", &mut out), Dispatch::Rejected);
}

#[test]
fn test_invalid_discards_partial_output() {
    let mut out = ResponseBuffer::<128>::new();

    assert_eq!(run(TEST_COMMANDS, "REJECT", &mut out), Dispatch::Rejected);
    assert_eq!(out.as_str(), "Error : Argument invalid.");
}

#[test]
fn test_fail_is_treated_as_ok() {
    let mut out = ResponseBuffer::<64>::new();

    assert_eq!(run(TEST_COMMANDS, "FAIL", &mut out), Dispatch::Executed(CommandResult::Fail));
    assert_eq!(out.as_str(), "failed");
}

#[test]
fn test_response_truncated_to_capacity() {
    let mut out = ResponseBuffer::<32>::new();

    run(TEST_COMMANDS, "FLOOD", &mut out);

    // Last byte stays reserved
    assert_eq!(out.len(), 31);
    assert_eq!(ResponseBuffer::<32>::LIMIT, 31);
    assert!(out.as_str().starts_with("0123456789"));
}

#[test]
fn test_error_message_truncated_in_small_buffer() {
    let mut out = ResponseBuffer::<8>::new();

    run(COMMANDS, "nope", &mut out);
    assert_eq!(out.as_str(), "Error :");
}

#[test]
fn test_truncation_keeps_whole_characters() {
    let mut out = ResponseBuffer::<8>::new();

    // Two bytes each: the fourth does not fit the 7 usable bytes
    let _ = out.write_str("éééé");
    assert_eq!(out.len(), 6);
    assert_eq!(out.as_str(), "ééé");

    // The remaining byte still takes ASCII
    let _ = write!(out, "a{}", "é");
    assert_eq!(out.as_str(), "éééa");
    assert_eq!(out.len(), ResponseBuffer::<8>::LIMIT);
}
