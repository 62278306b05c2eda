//! Config loading facade: assembles sources in precedence order and validates.

use super::merge_policy::builder_with_defaults;
use super::sources::{environment, global_file};
use super::ShellConfig;
use crate::error::ShellError;
use config::builder::DefaultState;
use config::{ConfigBuilder, File};
use std::path::Path;
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, the global file, the optional explicit file, then the
    /// environment.
    pub fn load(explicit: Option<&Path>) -> Result<ShellConfig, ShellError> {
        let mut builder = global_file::add_to_builder(builder_with_defaults()?)?;
        if let Some(path) = explicit {
            builder = add_required_file(builder, path)?;
        }
        builder = builder.add_source(environment::source());
        Self::finish(builder)
    }

    /// Load defaults plus exactly one file; no global file, no environment.
    pub fn load_from_file(path: &Path) -> Result<ShellConfig, ShellError> {
        let builder = add_required_file(builder_with_defaults()?, path)?;
        Self::finish(builder)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<ShellConfig, ShellError> {
        let config: ShellConfig = builder.build()?.try_deserialize()?;
        config.validate().map_err(|errors| {
            ShellError::Config(format!(
                "Configuration validation failed:\n{}",
                errors.join("\n")
            ))
        })?;
        debug!(read_only = config.session.read_only, "Configuration loaded");
        Ok(config)
    }
}

fn add_required_file(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> Result<ConfigBuilder<DefaultState>, ShellError> {
    if !path.exists() {
        return Err(ShellError::Config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }
    Ok(builder.add_source(File::from(path).required(true)))
}
