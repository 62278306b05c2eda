//! Acknowledge and check: prompting, read-only mode and submitted commands.

use super::test_utils::{test_shell, test_shell_with};
use monsh::config::ShellConfig;
use monsh::session::{CapturedIo, PromptOutcome};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_check_host() {
    let mut t = test_shell();
    let before = chrono::Utc::now().timestamp();
    let io = t.captured(&["host web1", "check"]);
    let after = chrono::Utc::now().timestamp();

    assert_eq!(io.lines(), vec!["Host check scheduled"]);
    let submitted = t.gateway.submitted();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].verb, "SCHEDULE_FORCED_HOST_CHECK");
    assert_eq!(submitted[0].args[0], "web1");
    let ts: i64 = submitted[0].args[1].parse().unwrap();
    assert!(ts >= before && ts <= after);
}

#[test]
fn test_check_service() {
    let mut t = test_shell();
    let io = t.captured(&["host web1", "service http", "check"]);

    assert_eq!(io.lines(), vec!["Service check scheduled"]);
    let submitted = t.gateway.submitted();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].verb, "SCHEDULE_FORCED_SVC_CHECK");
    assert_eq!(submitted[0].args.len(), 3);
    assert_eq!(&submitted[0].args[..2], ["web1", "http"]);
}

#[test]
fn test_check_not_available_at_root() {
    let mut t = test_shell();
    let io = t.captured(&["check"]);
    assert_eq!(io.errors(), ["Command \"check\" is not available in this context"]);
    assert!(t.gateway.is_empty());
}

#[test]
fn test_acknowledge_with_all_arguments_does_not_prompt() {
    let mut t = test_shell();
    let io = t.captured(&["host web1", "acknowledge \"fix later\" 1 1 0"]);

    assert!(io.prompts().is_empty());
    assert_eq!(io.lines(), vec!["Host problem acknowledged"]);
    let submitted = t.gateway.submitted();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].verb, "ACKNOWLEDGE_HOST_PROBLEM");
    assert_eq!(
        submitted[0].args,
        strings(&["web1", "1", "1", "0", "tester", "fix later"])
    );
}

#[test]
fn test_acknowledge_service_prompts_for_missing_values() {
    let mut t = test_shell();
    t.captured(&["host web1", "service http"]);

    let mut io = CapturedIo::new().with_answers([
        PromptOutcome::Value("disk full".to_string()),
        PromptOutcome::Value("n".to_string()),
        PromptOutcome::TimedOut,
        PromptOutcome::Value(String::new()),
    ]);
    t.run_lines(&mut io, &["acknowledge"]);

    assert_eq!(
        io.prompts(),
        ["comment: ", "sticky [Y/n]: ", "notify [Y/n]: ", "persistent [Y/n]: "]
    );
    assert_eq!(io.lines(), vec!["Service problem acknowledged"]);
    let submitted = t.gateway.submitted();
    assert_eq!(submitted[0].verb, "ACKNOWLEDGE_SVC_PROBLEM");
    assert_eq!(
        submitted[0].args,
        strings(&["web1", "http", "0", "1", "1", "tester", "disk full"])
    );
}

#[test]
fn test_acknowledge_prompts_only_for_trailing_flags() {
    let mut t = test_shell();
    let mut io = CapturedIo::new();
    t.run_lines(&mut io, &["host db1", "acknowledge \"on it\" no"]);

    assert_eq!(io.prompts(), ["notify [Y/n]: ", "persistent [Y/n]: "]);
    let submitted = t.gateway.submitted();
    assert_eq!(
        submitted[0].args,
        strings(&["db1", "0", "1", "1", "tester", "on it"])
    );
}

#[test]
fn test_acknowledge_comment_timeout_is_empty() {
    let mut t = test_shell();
    let io = t.captured(&["host web1", "acknowledge"]);

    assert_eq!(io.prompts().len(), 4);
    let submitted = t.gateway.submitted();
    assert_eq!(
        submitted[0].args,
        strings(&["web1", "1", "1", "1", "tester", ""])
    );
}

#[test]
fn test_acknowledge_retries_unrecognised_answer() {
    let mut t = test_shell();
    let mut io = CapturedIo::new().with_answers([
        PromptOutcome::Value("maybe".to_string()),
        PromptOutcome::Value("no".to_string()),
    ]);
    t.run_lines(&mut io, &["host web1", "acknowledge note"]);

    assert_eq!(io.prompts()[0], "sticky [Y/n]: ");
    assert_eq!(io.prompts()[1], "sticky [Y/n]: ");
    assert_eq!(io.errors().len(), 1);
    assert_eq!(t.gateway.submitted()[0].args[1], "0");
}

#[test]
fn test_interrupted_prompt_aborts() {
    let mut t = test_shell();
    let mut io = CapturedIo::new().with_answers([
        PromptOutcome::Value("comment".to_string()),
        PromptOutcome::Interrupted,
    ]);
    t.run_lines(&mut io, &["host web1", "acknowledge"]);

    assert_eq!(io.lines(), vec!["", "Aborted"]);
    assert!(t.gateway.is_empty());
    assert_eq!(t.shell.prompt(), "monsh web1> ");

    // The session keeps going after an abort.
    let io = t.captured(&["check"]);
    assert_eq!(io.lines(), vec!["Host check scheduled"]);
}

#[test]
fn test_invalid_flag_argument() {
    let mut t = test_shell();
    let io = t.captured(&["host web1", "acknowledge text perhaps"]);
    assert_eq!(io.errors().len(), 1);
    assert!(io.errors()[0].starts_with("Usage: acknowledge"));
    assert!(t.gateway.is_empty());
}

#[test]
fn test_read_only_refuses_acknowledge() {
    let mut t = test_shell_with(ShellConfig::default(), true);
    let io = t.captured(&["host web1", "acknowledge \"fix later\" 1 1 0"]);

    assert_eq!(io.lines(), vec!["Failed: client in read-only mode"]);
    assert!(io.prompts().is_empty());
    assert!(t.gateway.is_empty());
}

#[test]
fn test_read_only_from_config() {
    let mut config = ShellConfig::default();
    config.session.read_only = true;
    let mut t = test_shell_with(config, false);
    // An explicit override wins over the configured value.
    let io = t.captured(&["host web1", "acknowledge x"]);
    assert_eq!(io.lines(), vec!["Host problem acknowledged"]);

    let mut config = ShellConfig::default();
    config.session.read_only = true;
    let gateway = monsh::gateway::RecordingGateway::new();
    let session = monsh::Session::new(
        monsh::model::SharedModel::new(super::test_utils::fixture_model()),
        config,
        Box::new(gateway.clone()),
    );
    assert!(session.read_only);
}
