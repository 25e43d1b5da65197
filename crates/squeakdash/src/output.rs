//! Output formatting: table, JSON, plain.
//!
//! Renders projected rows in the format selected by `--output`. Table uses
//! `tabled`, structured formats use serde, plain emits one tab-separated row
//! per line.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::{builder::Builder, settings::Style};

use squeakdash_core::Table;

use crate::cli::{ColorMode, OutputFormat};
use crate::error::CliError;

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled on stderr.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
    }
}

/// Report a completed write on stderr, respecting quiet mode.
pub fn success(message: &str, color: ColorMode, quiet: bool) {
    if quiet {
        return;
    }
    if should_color(color) {
        eprintln!("{} {message}", "✓".green());
    } else {
        eprintln!("✓ {message}");
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render projected rows in the chosen format.
///
/// - `table`: rounded `tabled` grid with the column header
/// - `json` / `json-compact`: list of `{ column: value }` objects
/// - `plain`: one line per row, cells separated by tabs
pub fn render_rows<const N: usize>(
    format: OutputFormat,
    table: &Table<N>,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Table => Ok(render_table(table)),
        OutputFormat::Json => render_json(table, false),
        OutputFormat::JsonCompact => render_json(table, true),
        OutputFormat::Plain => Ok(render_plain(table)),
    }
}

/// Render a single serde-serializable item in the chosen format.
///
/// Table and plain rendering use `detail_fn` / `id_fn`, since a single item
/// has no row set of its own.
pub fn render_single<T>(
    format: OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: Serialize,
{
    match format {
        OutputFormat::Table => Ok(detail_fn(data)),
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Plain => Ok(id_fn(data)),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Format-specific renderers ────────────────────────────────────────

pub(crate) fn render_table<const N: usize>(table: &Table<N>) -> String {
    let mut builder = Builder::default();
    builder.push_record(table.header().iter().map(ToString::to_string));
    for row in table.rows() {
        builder.push_record(row.iter().cloned());
    }
    builder.build().with(Style::rounded()).to_string()
}

fn render_plain<const N: usize>(table: &Table<N>) -> String {
    table
        .rows()
        .iter()
        .map(|row| row.join("\t"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_json<T: Serialize + ?Sized>(data: &T, compact: bool) -> Result<String, CliError> {
    let out = if compact {
        serde_json::to_string(data)?
    } else {
        serde_json::to_string_pretty(data)?
    };
    Ok(out)
}
