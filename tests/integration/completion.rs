//! Completion against the live navigation context.

use super::test_utils::test_shell;

#[test]
fn test_command_names_at_root() {
    let t = test_shell();
    assert_eq!(t.shell.candidates("ho"), vec!["host"]);
    assert_eq!(
        t.shell.candidates(""),
        vec!["exit", "help", "host", "list", "ls", "quit", "top", "up"]
    );
    assert!(t.shell.candidates("st").is_empty());
    assert!(t.shell.candidates("zz").is_empty());
}

#[test]
fn test_command_names_follow_context() {
    let mut t = test_shell();
    t.captured(&["host web1"]);
    assert_eq!(t.shell.candidates("st"), vec!["status"]);
    assert_eq!(t.shell.candidates("se"), vec!["service"]);

    t.captured(&["service http"]);
    assert!(t.shell.candidates("se").is_empty());
    assert!(t.shell.candidates("l").is_empty());
}

#[test]
fn test_host_names() {
    let t = test_shell();
    assert_eq!(t.shell.candidates("host w"), vec!["web1"]);
    assert_eq!(t.shell.candidates("host "), vec!["db1", "web1"]);
    // Host names complete case-sensitively.
    assert!(t.shell.candidates("host W").is_empty());
    assert!(t.shell.candidates("host web1 extra").is_empty());
}

#[test]
fn test_service_names_ignore_case() {
    let mut t = test_shell();
    t.captured(&["host web1"]);
    assert_eq!(t.shell.candidates("service H"), vec!["http"]);
    assert_eq!(t.shell.candidates("service "), vec!["http", "ssh"]);
    assert!(t.shell.candidates("service http x").is_empty());
}

#[test]
fn test_inapplicable_command_has_no_argument_candidates() {
    let t = test_shell();
    assert!(t.shell.candidates("service h").is_empty());
    assert!(t.shell.candidates("nope x").is_empty());
    assert!(t.shell.candidates("ls ").is_empty());
}

#[test]
fn test_help_completes_command_names() {
    let t = test_shell();
    assert_eq!(t.shell.candidates("help ac"), vec!["acknowledge"]);
    assert_eq!(t.shell.candidates("help l"), vec!["list", "ls"]);
    assert_eq!(t.shell.candidates("help e"), vec!["exit"]);
}

#[test]
fn test_readline_cycling() {
    let mut t = test_shell();
    assert_eq!(t.shell.complete("l", 0).as_deref(), Some("list"));
    assert_eq!(t.shell.complete("l", 1).as_deref(), Some("ls"));
    assert_eq!(t.shell.complete("l", 2), None);

    // A new request recomputes from scratch.
    assert_eq!(t.shell.complete("q", 0).as_deref(), Some("quit"));
    assert_eq!(t.shell.complete("q", 1), None);
}
