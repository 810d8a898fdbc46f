//! Shared CLI output helpers.
//!
//! Provides consistent terminal output with support for JSON mode (for
//! scripting), quiet mode, and optional colors. Every operator-facing line
//! in the crate goes through here.

use std::sync::{OnceLock, RwLock};

use owo_colors::{OwoColorize, Style};
use serde_json::json;
use tabled::settings::Style as TableStyle;
use tabled::{Table, Tabled};

use crate::domain::Student;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Style text with ANSI colors.
    pub color: bool,
}

impl OutputConfig {
    /// Create a new output configuration.
    #[must_use]
    pub const fn new(json: bool, quiet: bool, color: bool) -> Self {
        Self { json, quiet, color }
    }
}

/// Global output configuration singleton.
static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

fn write_config(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Check if regular (non-JSON) output should be suppressed.
fn regular_output_suppressed(config: OutputConfig) -> bool {
    !config.json && config.quiet
}

/// Emit a JSON line with type and payload structure.
fn emit_json_line(kind: &str, payload: serde_json::Value) {
    println!(
        "{}",
        json!({
            "type": kind,
            "payload": payload,
        })
    );
}

fn paint(config: OutputConfig, text: &str, style: Style) -> String {
    if config.color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    write_config(config);
}

/// Return whether machine-readable JSON output is enabled.
#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

/// Return whether non-essential output is suppressed.
#[must_use]
pub fn is_quiet() -> bool {
    read_config().quiet
}

/// Return whether text is styled with ANSI colors.
#[must_use]
pub fn colors_enabled() -> bool {
    read_config().color
}

/// Print the application header with name and version.
pub fn header(version: &str) {
    let config = read_config();
    if config.json {
        emit_json_line(
            "header",
            json!({
                "app": "rollbook",
                "version": version,
            }),
        );
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!(
        "{} {}",
        paint(config, "rollbook", Style::new().bold()),
        paint(config, version, Style::new().dimmed())
    );
}

/// Print a labeled value.
pub fn field(label: &str, value: impl std::fmt::Display) {
    let config = read_config();
    let value = value.to_string();

    if config.json {
        emit_json_line("field", json!({ "label": label, "value": value }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("  {:<12} {}", paint(config, label, Style::new().dimmed()), value);
}

/// Print a success line.
pub fn success(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("success", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("  {} {}", paint(config, "✓", Style::new().green()), message);
}

/// Print a warning line.
pub fn warning(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("warning", json!({ "message": message }));
        return;
    }

    println!("  {} {}", paint(config, "⚠", Style::new().yellow()), message);
}

/// Print an error line.
pub fn error(message: &str) {
    let config = read_config();

    if config.json {
        eprintln!(
            "{}",
            json!({
                "type": "error",
                "payload": { "message": message },
            })
        );
        return;
    }

    eprintln!("  {} {}", paint(config, "×", Style::new().red()), message);
}

/// Print a section header.
pub fn section(title: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("section", json!({ "title": title }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!();
    println!("{}", paint(config, title, Style::new().bold()));
}

/// Print a numbered menu entry.
pub fn menu_item(key: i32, label: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("menu_item", json!({ "key": key, "label": label }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("{}. {}", paint(config, &key.to_string(), Style::new().cyan()), label);
}

/// Emit a JSON value directly (for commands that need custom JSON output).
pub fn json_output(value: serde_json::Value) {
    println!("{}", value);
}

#[derive(Tabled)]
struct RecordRow<'a> {
    #[tabled(rename = "Roll")]
    roll: i32,
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Marks")]
    marks: i32,
}

/// Render records as a table.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn records_table(records: &[Student]) -> Option<String> {
    if records.is_empty() {
        return None;
    }
    let rows = records.iter().map(|s| RecordRow {
        roll: s.roll,
        name: &s.name,
        marks: s.marks,
    });
    let mut table = Table::new(rows);
    table.with(TableStyle::psql());
    Some(table.to_string())
}

/// Print a list of records.
///
/// Records are the payload of the command, so quiet mode does not hide them.
pub fn records(records: &[Student]) {
    let config = read_config();

    if config.json {
        emit_json_line("records", json!(records));
        return;
    }

    match records_table(records) {
        Some(table) => {
            for line in table.lines() {
                println!("  {line}");
            }
        }
        None => {
            if !config.quiet {
                println!("  {}", paint(config, "No records", Style::new().dimmed()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_table_lists_every_row() {
        let records = vec![
            Student::try_new(1, "Alice", 90).unwrap(),
            Student::try_new(2, "Bob", 80).unwrap(),
        ];
        let table = records_table(&records).unwrap();

        assert!(table.contains("Roll"));
        assert!(table.contains("Name"));
        assert!(table.contains("Marks"));
        assert!(table.contains("Alice"));
        assert!(table.contains("Bob"));
        assert!(table.contains("90"));
        // header, separator, one line per record
        assert_eq!(table.lines().count(), 4);
    }

    #[test]
    fn records_table_empty_is_none() {
        assert!(records_table(&[]).is_none());
    }

    #[test]
    fn paint_without_color_is_plain() {
        let config = OutputConfig::new(false, false, false);
        assert_eq!(paint(config, "ok", Style::new().green()), "ok");
    }

    #[test]
    fn paint_with_color_adds_escape_codes() {
        let config = OutputConfig::new(false, false, true);
        let painted = paint(config, "ok", Style::new().green());
        assert!(painted.contains("ok"));
        assert!(painted.contains('\u{1b}'));
    }
}
