//! CLI domain: argument parsing and error output for the `monsh` binary.

mod output;
mod parse;

pub use output::map_error;
pub use parse::Cli;
