//! State colorizer and the few highlight styles the shell uses.

use crate::model::EntityKind;
use owo_colors::OwoColorize;

/// Color class of a monitoring state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateClass {
    Ok,
    Warning,
    Critical,
    Unknown,
}

/// Map a raw `current_state` value to a label and color class.
///
/// Hosts report 0 UP, 1 DOWN, 2 UNREACHABLE; services 0 OK, 1 WARNING,
/// 2 CRITICAL, 3 UNKNOWN. Anything else is returned as-is with no class.
pub fn state_label(kind: EntityKind, raw: &str) -> (String, Option<StateClass>) {
    let mapped = match (kind, raw.trim()) {
        (EntityKind::Host, "0") => Some(("UP", StateClass::Ok)),
        (EntityKind::Host, "1") => Some(("DOWN", StateClass::Critical)),
        (EntityKind::Host, "2") => Some(("UNREACHABLE", StateClass::Unknown)),
        (EntityKind::Service, "0") => Some(("OK", StateClass::Ok)),
        (EntityKind::Service, "1") => Some(("WARNING", StateClass::Warning)),
        (EntityKind::Service, "2") => Some(("CRITICAL", StateClass::Critical)),
        (EntityKind::Service, "3") => Some(("UNKNOWN", StateClass::Unknown)),
        _ => None,
    };
    match mapped {
        Some((label, class)) => (label.to_string(), Some(class)),
        None => (raw.to_string(), None),
    }
}

/// Terminal styling, switchable off for pipes and tests.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Colorized state label.
    pub fn state(&self, kind: EntityKind, raw: &str) -> String {
        let (label, class) = state_label(kind, raw);
        if !self.enabled {
            return label;
        }
        match class {
            Some(StateClass::Ok) => label.green().to_string(),
            Some(StateClass::Warning) => label.yellow().to_string(),
            Some(StateClass::Critical) => label.red().to_string(),
            Some(StateClass::Unknown) => label.magenta().to_string(),
            None => label,
        }
    }

    /// Confirmation lines ("Host check scheduled").
    pub fn highlight(&self, text: &str) -> String {
        if self.enabled {
            text.bold().yellow().to_string()
        } else {
            text.to_string()
        }
    }

    /// Failure-styled text.
    pub fn error(&self, text: &str) -> String {
        if self.enabled {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(true)
    }
}
