//! In-memory session: scripted input, captured output.

use crate::error::ShellError;
use crate::session::{PromptOutcome, SessionIo};
use std::collections::VecDeque;
use std::time::Duration;

/// Scripted [`SessionIo`] for tests and embedding.
///
/// Command lines and prompt answers come from two queues. A prompt with no queued
/// answer behaves like an idle user and times out.
#[derive(Debug, Default)]
pub struct CapturedIo {
    lines: VecDeque<String>,
    answers: VecDeque<PromptOutcome>,
    output: String,
    errors: Vec<String>,
    prompts: Vec<String>,
}

impl CapturedIo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn with_answers(mut self, answers: impl IntoIterator<Item = PromptOutcome>) -> Self {
        self.answers.extend(answers);
        self
    }

    /// Everything sent so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Output split into lines.
    pub fn lines(&self) -> Vec<&str> {
        self.output.lines().collect()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Prompt texts shown, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl SessionIo for CapturedIo {
    fn send(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn sendline(&mut self, text: &str) {
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn error(&mut self, text: &str) {
        self.errors.push(text.to_string());
    }

    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>, ShellError> {
        Ok(self.lines.pop_front())
    }

    fn prompt(&mut self, prompt: &str, _timeout: Duration) -> Result<PromptOutcome, ShellError> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front().unwrap_or(PromptOutcome::TimedOut))
    }
}
