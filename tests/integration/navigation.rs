//! Navigation, listing and status through the full dispatch path.

use super::test_utils::{fixture_model, test_shell};
use monsh::context::ContextState;
use monsh::model::{EntityModel, Host, Service};
use monsh::registry::Flow;
use monsh::session::CapturedIo;

#[test]
fn test_list_hosts_at_root() {
    let mut t = test_shell();
    let io = t.captured(&["ls"]);
    assert_eq!(io.lines(), vec!["db1   web1  "]);
    assert!(io.errors().is_empty());
}

#[test]
fn test_list_alias_and_pattern() {
    let mut t = test_shell();
    let io = t.captured(&["list w*"]);
    assert_eq!(io.lines(), vec!["web1  "]);

    let io = t.captured(&["ls nothing*"]);
    assert!(io.output().is_empty());
}

#[test]
fn test_host_then_service_navigation() {
    let mut t = test_shell();
    assert_eq!(t.shell.prompt(), "monsh> ");

    let io = t.captured(&["host web1", "ls"]);
    assert_eq!(io.lines(), vec!["http  ssh   "]);
    assert_eq!(t.shell.prompt(), "monsh web1> ");

    let io = t.captured(&["service http"]);
    assert!(io.errors().is_empty());
    assert_eq!(
        t.shell.session().context.get(),
        &ContextState::AtService {
            host: "web1".to_string(),
            service: "http".to_string()
        }
    );
    assert_eq!(t.shell.prompt(), "monsh web1/http> ");
}

#[test]
fn test_host_is_reachable_from_a_service() {
    let mut t = test_shell();
    t.captured(&["host web1", "service ssh", "host db1"]);
    assert_eq!(t.shell.prompt(), "monsh db1> ");
}

#[test]
fn test_host_without_arguments() {
    let mut t = test_shell();
    let io = t.captured(&["host"]);
    assert_eq!(
        io.lines(),
        vec!["2 hosts available", "", "To switch objects, use: host <hostname>"]
    );
}

#[test]
fn test_empty_hostname_shows_host_count() {
    let mut t = test_shell();
    let io = t.captured(&["host web1", "host \"\""]);
    assert!(io.errors().is_empty());
    assert_eq!(
        io.lines(),
        vec!["2 hosts available", "", "To switch objects, use: host <hostname>"]
    );
    assert_eq!(t.shell.prompt(), "monsh web1> ");
}

#[test]
fn test_list_with_character_class() {
    let mut t = test_shell();
    let io = t.captured(&["ls [dw]*1"]);
    assert_eq!(io.lines(), vec!["db1   web1  "]);

    let io = t.captured(&["host web1", "ls [!h]*"]);
    assert_eq!(io.lines(), vec!["ssh  "]);
}

#[test]
fn test_unknown_host_keeps_context() {
    let mut t = test_shell();
    let io = t.captured(&["host web1", "host nope"]);
    assert_eq!(io.errors(), ["Host \"nope\" not found"]);
    assert_eq!(t.shell.prompt(), "monsh web1> ");
}

#[test]
fn test_service_overview() {
    let mut t = test_shell();
    let io = t.captured(&["host web1", "service"]);
    assert_eq!(
        io.lines(),
        vec![
            "2 services for this host",
            "",
            "http                : CRITICAL, HTTP CRITICAL - 503 Service Unavailable",
            "ssh                 : OK, SSH OK - OpenSSH_9.6",
        ]
    );
}

#[test]
fn test_host_status_block() {
    let mut t = test_shell();
    let io = t.captured(&["host web1", "status"]);
    let lines = io.lines();
    assert_eq!(lines[0], "host name           : web1");
    assert_eq!(lines[1], "current state       : UP");
    assert_eq!(lines[2], "plugin output       : PING OK - Packet loss = 0%");
    assert_eq!(lines[3], "last check          : -");
    assert!(lines.contains(&"service             : http                 CRITICAL"));
    assert!(lines.contains(&"service             : ssh                  OK"));
}

#[test]
fn test_service_status_block() {
    let mut t = test_shell();
    let io = t.captured(&["host web1", "service http", "status"]);
    let lines = io.lines();
    assert_eq!(lines[0], "host name           : web1");
    assert_eq!(lines[1], "service description : http");
    assert_eq!(lines[2], "current state       : CRITICAL");
    assert!(!lines.iter().any(|l| l.starts_with("service             :")));
}

#[test]
fn test_up_and_top() {
    let mut t = test_shell();
    let io = t.captured(&["up"]);
    assert_eq!(io.lines(), vec!["Already at top level"]);

    t.captured(&["host web1", "service http", "up"]);
    assert_eq!(t.shell.prompt(), "monsh web1> ");

    t.captured(&["service ssh", "top"]);
    assert_eq!(t.shell.prompt(), "monsh> ");
}

#[test]
fn test_unknown_and_inapplicable_commands() {
    let mut t = test_shell();
    let io = t.captured(&["frobnicate", "status", "service http"]);
    assert_eq!(
        io.errors(),
        [
            "Unknown command: frobnicate",
            "Command \"status\" is not available in this context",
            "Command \"service\" is not available in this context",
        ]
    );
    assert_eq!(t.shell.prompt(), "monsh> ");
}

#[test]
fn test_ls_not_available_on_a_service() {
    let mut t = test_shell();
    let io = t.captured(&["host web1", "service http", "ls"]);
    assert_eq!(io.errors(), ["Command \"ls\" is not available in this context"]);
}

#[test]
fn test_surplus_arguments_are_usage_errors() {
    let mut t = test_shell();
    let io = t.captured(&["ls a b"]);
    assert_eq!(io.errors(), ["Usage: ls [pattern]"]);
}

#[test]
fn test_unbalanced_quote_is_reported() {
    let mut t = test_shell();
    let io = t.captured(&["host \"web1"]);
    assert_eq!(io.errors().len(), 1);
    assert!(io.errors()[0].starts_with("Parse error"));
    assert_eq!(t.shell.prompt(), "monsh> ");
}

#[test]
fn test_blank_line_is_ignored() {
    let mut t = test_shell();
    let io = t.captured(&["", "   "]);
    assert!(io.output().is_empty());
    assert!(io.errors().is_empty());
}

#[test]
fn test_help_lists_applicable_commands() {
    let mut t = test_shell();
    let io = t.captured(&["help"]);
    let out = io.output();
    assert!(out.contains("Command"));
    assert!(out.contains("host"));
    assert!(!out.contains("acknowledge"));

    let io = t.captured(&["host web1", "help"]);
    assert!(io.output().contains("acknowledge"));
}

#[test]
fn test_help_for_one_command() {
    let mut t = test_shell();
    let io = t.captured(&["help up"]);
    assert_eq!(io.lines(), vec!["Go up one level"]);

    let io = t.captured(&["help nope"]);
    assert_eq!(io.errors(), ["Unknown command: nope"]);
}

#[test]
fn test_exit_stops_the_loop() {
    let mut t = test_shell();
    let mut io = CapturedIo::new().with_lines(["host web1", "exit", "ls"]);
    t.shell.run(&mut io).unwrap();
    assert_eq!(t.shell.prompt(), "monsh web1> ");
    assert!(io.output().is_empty());

    let mut io = CapturedIo::new();
    assert_eq!(t.run_lines(&mut io, &["quit"]), Flow::Exit);
}

#[test]
fn test_end_of_input_ends_the_loop() {
    let mut t = test_shell();
    let mut io = CapturedIo::new().with_lines(["host db1"]);
    t.shell.run(&mut io).unwrap();
    assert_eq!(t.shell.prompt(), "monsh db1> ");
}

#[test]
fn test_context_follows_model_refresh() {
    let mut t = test_shell();
    t.captured(&["host web1", "service http"]);

    let mut refreshed = EntityModel::new();
    refreshed.insert(
        Host::new("web1").with_service(Service::new("web1", "ssh").with_field("current_state", "0")),
    );
    t.model.replace(refreshed);

    let io = t.captured(&["ls"]);
    assert_eq!(io.errors(), ["Context \"web1/http\" no longer exists"]);
    assert_eq!(io.lines(), vec!["ssh  "]);
    assert_eq!(t.shell.prompt(), "monsh web1> ");

    t.model.replace(EntityModel::new());
    let io = t.captured(&["host"]);
    assert_eq!(io.errors(), ["Context \"web1\" no longer exists"]);
    assert_eq!(io.lines()[0], "0 hosts available");
    assert_eq!(t.shell.prompt(), "monsh> ");

    t.model.replace(fixture_model());
    let io = t.captured(&["host web1"]);
    assert!(io.errors().is_empty());
}
