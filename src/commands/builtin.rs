//! Shell built-ins: help, up, top, exit/quit.

use super::max_args;
use crate::complete::single_word;
use crate::error::ShellError;
use crate::registry::{CommandContext, CommandHandler, CompletionContext, Flow};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;

pub struct Help;

impl CommandHandler for Help {
    fn run(&self, cx: &mut CommandContext<'_>, args: &[String]) -> Result<Flow, ShellError> {
        max_args(args, 1, "help [command]")?;

        if let Some(name) = args.first() {
            let def = cx
                .registry
                .find(name)
                .ok_or_else(|| ShellError::UnknownCommand(name.clone()))?;
            let text = match def.handler.usage() {
                "" => def.summary,
                usage => usage,
            };
            for line in text.lines() {
                cx.io.sendline(line);
            }
            return Ok(Flow::Continue);
        }

        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Command", "Description"]);
        for def in cx.registry.applicable(cx.session.context.get()) {
            table.add_row(vec![def.name.clone(), def.summary.to_string()]);
        }
        cx.io.sendline(&table.to_string());
        Ok(Flow::Continue)
    }

    fn complete(&self, text: &str, cx: &CompletionContext<'_>) -> Option<Vec<String>> {
        let prefix = single_word(text)?;
        let mut names: Vec<String> = cx
            .registry
            .iter()
            .filter(|def| def.name.starts_with(&prefix))
            .map(|def| def.name.clone())
            .collect();
        names.sort();
        Some(names)
    }

    fn usage(&self) -> &'static str {
        "Show available commands.\n\n\
         Usage: help [command]\n\n\
         \x20   Without an argument, list the commands usable here.\n\
         \x20   With a command name, show its detailed help."
    }
}

pub struct Up;

impl CommandHandler for Up {
    fn run(&self, cx: &mut CommandContext<'_>, args: &[String]) -> Result<Flow, ShellError> {
        max_args(args, 0, "up")?;
        if !cx.session.context.pop() {
            cx.io.sendline("Already at top level");
        }
        Ok(Flow::Continue)
    }
}

pub struct Top;

impl CommandHandler for Top {
    fn run(&self, cx: &mut CommandContext<'_>, args: &[String]) -> Result<Flow, ShellError> {
        max_args(args, 0, "top")?;
        cx.session.context.reset();
        Ok(Flow::Continue)
    }
}

pub struct Exit;

impl CommandHandler for Exit {
    fn run(&self, _cx: &mut CommandContext<'_>, _args: &[String]) -> Result<Flow, ShellError> {
        Ok(Flow::Exit)
    }

    fn usage(&self) -> &'static str {
        "Leave the shell. End of input (Ctrl-D) does the same."
    }
}
