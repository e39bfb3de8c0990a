//! # Output Formatting
//!
//! Colored status messages and the table/JSON renderers shared by every
//! command. Renderers return strings; only the `print_*` helpers write.

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  Never,
}

impl ColorMode {
  /// Apply the mode as a global owo-colors override.
  pub fn apply(self) {
    match self {
      Self::Always => owo_colors::set_override(true),
      Self::Never => owo_colors::set_override(false),
      Self::Auto => {}
    }
  }
}

/// How command results are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
  Table,
  Json,
}

impl OutputFormat {
  pub const fn from_json_flag(json: bool) -> Self {
    if json { Self::Json } else { Self::Table }
  }
}

/// Format a success message
pub fn format_success(message: &str) -> String {
  format!(
    "{} {}",
    "✓".if_supports_color(Stream::Stdout, |t| t.green().bold().to_string()),
    message
  )
}

/// Format an informational message
pub fn format_info(message: &str) -> String {
  format!(
    "{} {}",
    "ℹ".if_supports_color(Stream::Stdout, |t| t.blue().bold().to_string()),
    message
  )
}

/// Format an identifier
pub fn format_id(id: &str) -> String {
  id.if_supports_color(Stream::Stdout, |t| t.bright_cyan().to_string())
    .to_string()
}

/// Print rendered command output
#[allow(clippy::print_stdout)]
pub fn print_output(output: &str) {
  if !output.is_empty() {
    println!("{output}");
  }
}

/// Print an error message
#[allow(clippy::print_stderr)]
pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    "✗".if_supports_color(Stream::Stderr, |t| t.red().bold().to_string()),
    message
  );
}

/// Pretty-printed JSON of any record
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
  serde_json::to_string_pretty(value).context("Failed to encode output as JSON")
}

/// A sharp-bordered table, or a short note when there are no rows
pub fn render_table<R: Tabled>(rows: Vec<R>, empty: &str) -> String {
  if rows.is_empty() {
    return format_info(empty);
  }
  Table::new(rows).with(Style::sharp()).to_string()
}

/// Hint appended to a listing when the service reports another page
pub fn more_pages_hint(has_more: bool, page: u32) -> Option<String> {
  has_more.then(|| format_info(&format!("More results available, rerun with --page {}", page + 1)))
}

/// Placeholder for optional cells
pub fn or_dash(value: Option<&str>) -> String {
  value.filter(|v| !v.is_empty()).unwrap_or("-").to_string()
}
