//! Environment source: `MONSH__SECTION__KEY=value`, e.g.
//! `MONSH__SESSION__READ_ONLY=true`.

use config::Environment;

pub const ENV_PREFIX: &str = "MONSH";

/// Environment source with the shell's prefix and separators.
pub fn source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
