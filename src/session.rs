//! Session I/O
//!
//! The shell talks to the user only through [`SessionIo`]. A prompt is a single
//! suspension point with three outcomes: an answer, the deadline passing, or an
//! interrupt. The provided `ask_*` methods turn those outcomes into values,
//! defaults, and [`ShellError::Aborted`].

use crate::error::ShellError;
use std::time::{Duration, Instant};

mod capture;
mod terminal;

pub use capture::CapturedIo;
pub use terminal::TerminalIo;

/// Result of waiting for one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Value(String),
    TimedOut,
    Interrupted,
}

/// Parse a yes/no answer. Empty input is `None` so the caller can apply a default.
pub fn parse_bool(answer: &str) -> Result<Option<bool>, String> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "" => Ok(None),
        "y" | "yes" | "1" | "true" => Ok(Some(true)),
        "n" | "no" | "0" | "false" => Ok(Some(false)),
        other => Err(format!("Not a yes/no answer: {}", other)),
    }
}

pub trait SessionIo {
    /// Write text without a trailing newline.
    fn send(&mut self, text: &str);

    /// Write text followed by a newline.
    fn sendline(&mut self, text: &str);

    /// Failure-styled line.
    fn error(&mut self, text: &str);

    /// Read the next command line. `Ok(None)` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError>;

    /// Show `prompt` and wait at most `timeout` for one answer line.
    fn prompt(&mut self, prompt: &str, timeout: Duration) -> Result<PromptOutcome, ShellError>;

    /// Free-text prompt. A timeout yields the empty string.
    fn ask_string(&mut self, prompt: &str, timeout: Duration) -> Result<String, ShellError> {
        match self.prompt(&format!("{}: ", prompt), timeout)? {
            PromptOutcome::Value(answer) => Ok(answer),
            PromptOutcome::TimedOut => Ok(String::new()),
            PromptOutcome::Interrupted => Err(ShellError::Aborted),
        }
    }

    /// Yes/no prompt. Empty answers and timeouts yield `default`; unrecognised
    /// answers ask again until the deadline.
    fn ask_bool(
        &mut self,
        prompt: &str,
        timeout: Duration,
        default: bool,
    ) -> Result<bool, ShellError> {
        let hint = if default { "Y/n" } else { "y/N" };
        let text = format!("{} [{}]: ", prompt, hint);
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Ok(default);
            }
            match self.prompt(&text, remaining)? {
                PromptOutcome::Value(answer) => match parse_bool(&answer) {
                    Ok(Some(value)) => return Ok(value),
                    Ok(None) => return Ok(default),
                    Err(message) => self.error(&message),
                },
                PromptOutcome::TimedOut => return Ok(default),
                PromptOutcome::Interrupted => return Err(ShellError::Aborted),
            }
        }
    }
}
