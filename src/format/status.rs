//! Per-field status blocks and the short per-service summary lines.

use crate::format::palette::Palette;
use crate::model::{Entity, EntityKind, Host};

const LABEL_WIDTH: usize = 20;
const SUMMARY_DESCRIPTION_CHARS: usize = 20;
const SERVICE_OUTPUT_CHARS: usize = 167;

/// Shown for a field the entity does not carry.
pub const MISSING_VALUE: &str = "-";

/// Field names from a multi-line configuration value, blank lines dropped.
pub fn field_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// `<label padded to 20, underscores as spaces>`.
pub fn field_label(field: &str) -> String {
    format!("{:<width$}", field, width = LABEL_WIDTH).replace('_', " ")
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Status lines for `entity`, one per configured field.
///
/// `current_state` goes through the state colorizer. Hosts are followed by one
/// summary line per owned service, sorted by service key.
pub fn render_status(entity: Entity<'_>, fields: &[String], palette: &Palette) -> Vec<String> {
    let kind = entity.kind();
    let mut lines: Vec<String> = fields
        .iter()
        .filter(|field| !field.is_empty())
        .map(|field| {
            let raw = entity.get(field).unwrap_or(MISSING_VALUE);
            let value = if field == "current_state" {
                palette.state(kind, raw)
            } else {
                raw.to_string()
            };
            format!("{}: {}", field_label(field), value)
        })
        .collect();

    if let Entity::Host(host) = entity {
        lines.extend(service_summary(host, palette));
    }
    lines
}

fn service_summary<'a>(host: &'a Host, palette: &'a Palette) -> impl Iterator<Item = String> + 'a {
    host.services.values().map(move |service| {
        format!(
            "{}: {:<width$} {}",
            field_label("service"),
            truncate(&service.description, SUMMARY_DESCRIPTION_CHARS),
            palette.state(
                EntityKind::Service,
                service.get("current_state").unwrap_or(MISSING_VALUE)
            ),
            width = SUMMARY_DESCRIPTION_CHARS,
        )
    })
}

/// Lines for `service` without arguments: every service of `host` with state and
/// plugin output.
pub fn render_service_overview(host: &Host, palette: &Palette) -> Vec<String> {
    host.services
        .values()
        .map(|service| {
            format!(
                "{:<width$}: {}, {}",
                service.description,
                palette.state(
                    EntityKind::Service,
                    service.get("current_state").unwrap_or(MISSING_VALUE)
                ),
                truncate(
                    service.get("plugin_output").unwrap_or(MISSING_VALUE),
                    SERVICE_OUTPUT_CHARS
                ),
                width = LABEL_WIDTH,
            )
        })
        .collect()
}
