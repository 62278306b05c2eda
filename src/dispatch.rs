//! Dispatcher: input line parsing and command invocation.

use crate::error::ShellError;
use crate::registry::{CommandContext, CommandRegistry, Flow};
use crate::session::SessionIo;
use crate::shell::Session;
use tracing::debug;

/// Split a line into the command token and the untouched remainder.
///
/// Returns `None` for a blank line. The remainder keeps its leading whitespace
/// stripped but is otherwise verbatim, so completion can tell whether the user has
/// started a new argument.
pub fn split_command(line: &str) -> Option<(&str, &str)> {
    let line = line.trim_start();
    if line.is_empty() {
        return None;
    }
    match line.split_once(char::is_whitespace) {
        Some((command, rest)) => Some((command, rest.trim_start())),
        None => Some((line, "")),
    }
}

/// Split arguments shell-style: whitespace separates, quotes group.
pub fn split_args(rest: &str) -> Result<Vec<String>, ShellError> {
    shlex::split(rest).ok_or_else(|| ShellError::Parse("No closing quotation".to_string()))
}

/// Lenient variant for partial input: an unterminated quote falls back to plain
/// whitespace splitting.
pub fn split_partial_args(rest: &str) -> Vec<String> {
    shlex::split(rest)
        .unwrap_or_else(|| rest.split_whitespace().map(str::to_string).collect())
}

/// Parsed form of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn parse(line: &str) -> Result<Option<Self>, ShellError> {
        let Some((command, rest)) = split_command(line) else {
            return Ok(None);
        };
        Ok(Some(Self {
            command: command.to_string(),
            args: split_args(rest)?,
        }))
    }
}

/// Resolves input lines against the registry and runs the matching handler.
pub struct Dispatcher<'r> {
    registry: &'r CommandRegistry,
}

impl<'r> Dispatcher<'r> {
    pub fn new(registry: &'r CommandRegistry) -> Self {
        Self { registry }
    }

    /// Dispatch one line. Applicability is evaluated against the context as it is
    /// right now; nothing is cached between calls.
    pub fn dispatch(
        &self,
        line: &str,
        session: &mut Session,
        io: &mut dyn SessionIo,
    ) -> Result<Flow, ShellError> {
        let Some(invocation) = Invocation::parse(line)? else {
            return Ok(Flow::Continue);
        };
        let def = self
            .registry
            .resolve(&invocation.command, session.context.get())?;
        debug!(
            command = %invocation.command,
            args = invocation.args.len(),
            context = %session.context.get().path(),
            "Dispatching command"
        );
        let handler = def.handler.clone();
        let mut cx = CommandContext {
            session,
            io,
            registry: self.registry,
        };
        handler.run(&mut cx, &invocation.args)
    }
}
