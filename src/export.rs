use std::fs::File;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use csv::WriterBuilder;

use crate::error::{AnalysisError, Result};
use crate::frequency::RankedEntry;
use crate::io::{absolute, ensure_parent_dir};
use crate::report::Report;

/// Delimited-text flavour of the word table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum TableFormat {
    #[default]
    Csv,
    Tsv,
}

impl TableFormat {
    fn delimiter(self) -> u8 {
        match self {
            TableFormat::Csv => b',',
            TableFormat::Tsv => b'\t',
        }
    }
}

///Neutralizes cells a spreadsheet would read as a formula by prefixing a single quote.
///Cells that already start with a quote are left alone.
///Word tokens never trigger it; it covers entries built by library callers.
/// # Example
/// ```
/// use word_report::csv_safe_cell;
/// assert_eq!(csv_safe_cell("=SUM(A1)".to_string()), "'=SUM(A1)");
/// assert_eq!(csv_safe_cell("python".to_string()), "python");
/// ```
pub fn csv_safe_cell(cell: String) -> String {
    match cell.chars().next() {
        Some('=' | '+' | '-' | '@' | '\t' | '\r') => format!("'{}", cell),
        _ => cell,
    }
}

///Writes every ranked entry as a `word,count` table with a header row.
pub fn export_table(entries: &[RankedEntry], path: &Path, format: TableFormat) -> Result<PathBuf> {
    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(|e| AnalysisError::output(path, e))?;
    let mut wtr = WriterBuilder::new()
        .delimiter(format.delimiter())
        .from_writer(file);

    wtr.write_record(["word", "count"])
        .map_err(|e| AnalysisError::export(path, e))?;
    for entry in entries {
        wtr.write_record([csv_safe_cell(entry.word.clone()), entry.count.to_string()])
            .map_err(|e| AnalysisError::export(path, e))?;
    }
    wtr.flush().map_err(|e| AnalysisError::output(path, e))?;

    Ok(absolute(path))
}

///Writes the report as pretty-printed JSON.
pub fn export_json(report: &Report, path: &Path) -> Result<PathBuf> {
    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(|e| AnalysisError::output(path, e))?;
    serde_json::to_writer_pretty(file, report).map_err(|e| AnalysisError::export(path, e))?;
    Ok(absolute(path))
}
