//! CLI output: error mapping from shell errors to the stable CLI surface.

use crate::error::ShellError;

/// Map a startup failure to the text printed before exiting.
///
/// Failures the user can fix from the command line carry a hint naming the flag or
/// setting involved.
pub fn map_error(e: &ShellError) -> String {
    let hint = match e {
        ShellError::Config(_) => Some("check --config and any MONSH__* environment variables"),
        ShellError::Model(_) => {
            Some("--snapshot expects a JSON document, or TOML with a .toml extension")
        }
        ShellError::Gateway(_) => Some("set --command-file or paths.command_file"),
        _ => None,
    };
    match hint {
        Some(hint) => format!("monsh: {}\nhint: {}", e, hint),
        None => format!("monsh: {}", e),
    }
}
