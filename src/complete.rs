//! Completion Engine
//!
//! Candidates are recomputed from scratch for every request. The only state kept
//! is the candidate list of the request in progress, so a line editor can cycle
//! through matches readline-style (`state` 0, 1, 2, ...).

use crate::dispatch::split_command;
use crate::registry::{CommandRegistry, CompletionContext};
use crate::shell::Session;
use tracing::debug;

/// Compute candidates for partial input `text`.
///
/// While the command word is still being typed, candidates are the applicable
/// command names with that prefix. Once a command word is followed by whitespace,
/// the command's own completion handler takes over.
pub fn candidates(registry: &CommandRegistry, session: &Session, text: &str) -> Vec<String> {
    let state = session.context.get();
    let trimmed = text.trim_start();

    if !trimmed.contains(char::is_whitespace) {
        let mut names: Vec<String> = registry
            .applicable(state)
            .filter(|def| def.name.starts_with(trimmed))
            .map(|def| def.name.clone())
            .collect();
        names.sort();
        names.dedup();
        return names;
    }

    let Some((command, rest)) = split_command(trimmed) else {
        return Vec::new();
    };
    let Ok(def) = registry.resolve(command, state) else {
        return Vec::new();
    };
    let cx = CompletionContext { session, registry };
    def.handler.complete(rest, &cx).unwrap_or_default()
}

/// Cycling state for one ongoing completion request.
#[derive(Debug, Default)]
pub struct Completer {
    matches: Vec<String>,
}

impl Completer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Readline-style entry point: `state == 0` starts a new request, later states
    /// walk the same candidate list until `None`.
    pub fn complete(
        &mut self,
        registry: &CommandRegistry,
        session: &Session,
        text: &str,
        state: usize,
    ) -> Option<String> {
        if state == 0 {
            self.matches = candidates(registry, session, text);
            debug!(text, matches = self.matches.len(), "Completion computed");
        }
        self.matches.get(state).cloned()
    }
}

/// Helper for argument completers: the single word being typed, `""` when nothing
/// has been typed yet, `None` once more than one argument is present.
pub fn single_word(text: &str) -> Option<String> {
    let parts = crate::dispatch::split_partial_args(text);
    match parts.len() {
        0 => Some(String::new()),
        1 => parts.into_iter().next(),
        _ => None,
    }
}
