//! Shell: session state plus the read-eval loop.
//!
//! A [`Session`] is created once at startup and passed by reference to every
//! command; the [`Shell`] pairs it with the command registry and drives one input
//! line at a time to completion before reading the next.

use crate::commands;
use crate::complete::{self, Completer};
use crate::config::{ConfigProvider, ShellConfig};
use crate::context::NavigationContext;
use crate::dispatch::Dispatcher;
use crate::error::ShellError;
use crate::format::Palette;
use crate::gateway::CommandGateway;
use crate::model::SharedModel;
use crate::registry::{CommandRegistry, Flow};
use crate::session::SessionIo;
use std::time::Duration;
use tracing::{info, warn};

/// Per-process session state shared by all commands.
pub struct Session {
    pub model: SharedModel,
    pub context: NavigationContext,
    pub config: ShellConfig,
    pub gateway: Box<dyn CommandGateway>,
    pub read_only: bool,
    pub username: String,
    pub palette: Palette,
}

impl Session {
    /// Session over `model` and `gateway`, with read-only mode, username and colors
    /// taken from `config`.
    pub fn new(model: SharedModel, config: ShellConfig, gateway: Box<dyn CommandGateway>) -> Self {
        let read_only = config.session.read_only;
        let username = config.session.resolve_username();
        let palette = Palette::new(config.session.color);
        Self {
            model,
            context: NavigationContext::new(),
            config,
            gateway,
            read_only,
            username,
            palette,
        }
    }

    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Forward an external command.
    pub fn submit(&self, verb: &str, args: &[String]) -> Result<(), ShellError> {
        info!(verb, args = ?args, user = %self.username, "Submitting external command");
        self.gateway.submit(verb, args)
    }

    /// Ordered status field names for `key`, blank lines dropped.
    pub fn status_fields(&self, key: &str) -> Vec<String> {
        self.config
            .get(key)
            .map(|raw| crate::format::field_list(&raw))
            .unwrap_or_default()
    }

    pub fn comment_timeout(&self) -> Duration {
        Duration::from_secs(self.config.prompts.comment_timeout_secs)
    }

    pub fn flag_timeout(&self) -> Duration {
        Duration::from_secs(self.config.prompts.flag_timeout_secs)
    }

    pub fn terminal_width(&self) -> usize {
        self.config.session.terminal_width
    }
}

pub struct Shell {
    registry: CommandRegistry,
    session: Session,
    completer: Completer,
}

impl Shell {
    /// Shell with the default command table.
    pub fn new(session: Session) -> Result<Self, ShellError> {
        Ok(Self::with_registry(commands::default_registry()?, session))
    }

    pub fn with_registry(registry: CommandRegistry, session: Session) -> Self {
        Self {
            registry,
            session,
            completer: Completer::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Prompt text reflecting the navigation path.
    pub fn prompt(&self) -> String {
        let path = self.session.context.get().path();
        if path.is_empty() {
            "monsh> ".to_string()
        } else {
            format!("monsh {}> ", path)
        }
    }

    /// Run one input line to completion. Errors are reported through `io` and never
    /// end the session; only `exit`/`quit` return [`Flow::Exit`].
    pub fn execute_line(&mut self, line: &str, io: &mut dyn SessionIo) -> Flow {
        self.reconcile_context(io);

        let result = Dispatcher::new(&self.registry).dispatch(line, &mut self.session, io);
        match result {
            Ok(flow) => flow,
            Err(e) => {
                report(&e, io);
                Flow::Continue
            }
        }
    }

    /// Read and execute lines until end of input or an exit command.
    pub fn run(&mut self, io: &mut dyn SessionIo) -> Result<(), ShellError> {
        info!("Interactive session started");
        loop {
            let prompt = self.prompt();
            let Some(line) = io.read_line(&prompt)? else {
                break;
            };
            if self.execute_line(&line, io) == Flow::Exit {
                break;
            }
        }
        info!("Interactive session ended");
        Ok(())
    }

    /// All candidates for `text` in the current context.
    pub fn candidates(&self, text: &str) -> Vec<String> {
        complete::candidates(&self.registry, &self.session, text)
    }

    /// Readline-style completion: `state` 0 starts a request, later states cycle.
    pub fn complete(&mut self, text: &str, state: usize) -> Option<String> {
        self.completer
            .complete(&self.registry, &self.session, text, state)
    }

    /// Drop context levels whose entity vanished in a model refresh.
    fn reconcile_context(&mut self, io: &mut dyn SessionIo) {
        let lost = {
            let model = self.session.model.read();
            self.session.context.reconcile(&model)
        };
        if let Some(path) = lost {
            warn!(path = %path, "Selected entity disappeared from the model");
            io.error(&format!("Context \"{}\" no longer exists", path));
        }
    }
}

/// Report a recovered error in the form the user expects for its kind.
fn report(error: &ShellError, io: &mut dyn SessionIo) {
    match error {
        ShellError::ReadOnly => io.sendline(&error.to_string()),
        ShellError::Aborted => {
            io.sendline("");
            io.sendline(&error.to_string());
        }
        ShellError::UnknownCommand(_) | ShellError::NotApplicable(_) => {
            warn!("{}", error);
            io.error(&error.to_string());
        }
        _ => io.error(&error.to_string()),
    }
}
