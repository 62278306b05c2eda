//! Merge rules: built-in defaults sit below every other source.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

use super::ShellConfig;

/// Create a Config builder with the built-in defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let defaults = ShellConfig::default();
    Config::builder()
        .set_default("object.host.status", defaults.object.host.status)?
        .set_default("object.service.status", defaults.object.service.status)?
        .set_default("session.read_only", defaults.session.read_only)?
        .set_default("session.color", defaults.session.color)?
        .set_default(
            "session.terminal_width",
            defaults.session.terminal_width as i64,
        )?
        .set_default(
            "prompts.comment_timeout_secs",
            defaults.prompts.comment_timeout_secs as i64,
        )?
        .set_default(
            "prompts.flag_timeout_secs",
            defaults.prompts.flag_timeout_secs as i64,
        )?
        .set_default(
            "paths.command_file",
            defaults.paths.command_file.to_string_lossy().to_string(),
        )
}
