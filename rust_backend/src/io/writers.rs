//! Writers for report tables.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::services::instructor_conflicts::ReportTable;

/// Output format of a saved report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}. Use 'csv' or 'json'", other)),
        }
    }
}

impl OutputFormat {
    /// Guess the format from a file extension, defaulting to CSV.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
            .unwrap_or(OutputFormat::Csv)
    }
}

/// Quote a CSV field when it holds a comma, a quote or a line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn csv_record(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| csv_field(f))
        .collect::<Vec<_>>()
        .join(",")
}

/// Write `table` as CSV, header first.
pub fn write_csv<W: Write>(table: &ReportTable, mut writer: W) -> std::io::Result<()> {
    writeln!(writer, "{}", csv_record(&table.header))?;
    for row in &table.rows {
        writeln!(writer, "{}", csv_record(row))?;
    }
    writer.flush()
}

pub fn to_csv_string(table: &ReportTable) -> String {
    let mut out = String::new();
    out.push_str(&csv_record(&table.header));
    out.push('\n');
    for row in &table.rows {
        out.push_str(&csv_record(row));
        out.push('\n');
    }
    out
}

/// Rows as JSON objects keyed by header name.
pub fn to_json_value(table: &ReportTable) -> Value {
    Value::Array(
        table
            .rows
            .iter()
            .map(|row| {
                let object: Map<String, Value> = table
                    .header
                    .iter()
                    .zip(row)
                    .map(|(key, cell)| (key.clone(), Value::String(cell.clone())))
                    .collect();
                Value::Object(object)
            })
            .collect(),
    )
}

pub fn to_json_string(table: &ReportTable) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&to_json_value(table))
}

/// Save `table` to `path` in `format`.
pub fn save_report(table: &ReportTable, path: &Path, format: OutputFormat) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create report file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    match format {
        OutputFormat::Csv => write_csv(table, &mut writer)
            .with_context(|| format!("Failed to write CSV report: {}", path.display()))?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &to_json_value(table))
                .context("Failed to serialize JSON report")?;
            writer.flush()?;
        }
    }
    Ok(())
}
