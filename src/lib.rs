//! # word_report
//!
//! Reads a plain-text file, counts word frequencies (after lowercasing and stopword
//! removal), extracts email addresses, and writes a fixed-layout text report together
//! with an optional word table (CSV/TSV), a bar chart (PNG) and a JSON dump.
//!
//! The analysis itself is pure: [`tokenize`], [`extract_emails`], [`analyze`], [`rank`]
//! and [`format_report`] never touch the file system. File access lives in
//! [`read_input`] and [`save_outputs`].
//!
//! ## Example
//! ```
//! use word_report::{AnalysisOptions, analyze_text};
//! let analysis = analyze_text("Python is fun. PYTHON! Mail dev@rust-lang.org", &AnalysisOptions::default());
//! assert_eq!(analysis.report.top_words[0].word, "python");
//! assert_eq!(analysis.report.emails, vec!["dev@rust-lang.org"]);
//! println!("{}", analysis.report);
//! ```

use std::fmt;
use std::path::PathBuf;

use log::info;

mod chart;
mod emails;
mod error;
mod export;
mod frequency;
mod io;
mod report;
mod tokenize;

pub use chart::{CHART_ENTRIES, render_chart};
pub use emails::{extract_emails, strip_emails};
pub use error::{AnalysisError, Result};
pub use export::{TableFormat, csv_safe_cell, export_json, export_table};
pub use frequency::{FrequencyTable, RankedEntry, analyze, rank, rank_all};
pub use io::{SAMPLE_TEXT, read_input, save_report, write_sample};
pub use report::{Analysis, AnalysisOptions, DEFAULT_TOP_N, Report, analyze_text, format_report};
pub use tokenize::{STOPWORDS, is_stopword, tokenize, tokens};

/// Default location of the input text.
pub const DEFAULT_INPUT: &str = "data/sample.txt";
/// Default location of the text report.
pub const DEFAULT_REPORT: &str = "reports/report.txt";
/// Default location of the word table.
pub const DEFAULT_TABLE: &str = "reports/word_stats.csv";
/// Default location of the bar chart.
pub const DEFAULT_CHART: &str = "reports/top_words_chart.png";

///Everything a run needs: where to read, where to write, and how to analyze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub report: PathBuf,
    pub table: Option<PathBuf>,
    pub table_format: TableFormat,
    pub chart: Option<PathBuf>,
    pub json: Option<PathBuf>,
    pub options: AnalysisOptions,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            report: PathBuf::from(DEFAULT_REPORT),
            table: Some(PathBuf::from(DEFAULT_TABLE)),
            table_format: TableFormat::Csv,
            chart: Some(PathBuf::from(DEFAULT_CHART)),
            json: None,
            options: AnalysisOptions::default(),
        }
    }
}

/// Kind of file produced by a run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Output {
    Report,
    Table,
    Chart,
    Json,
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Output::Report => "Report",
            Output::Table => "Word table",
            Output::Chart => "Chart",
            Output::Json => "JSON report",
        };
        f.write_str(name)
    }
}

///Which outputs were written and which failed.
#[derive(Debug, Default)]
pub struct OutputReport {
    pub saved: Vec<(Output, PathBuf)>,
    pub failed: Vec<(Output, AnalysisError)>,
}

impl OutputReport {
    fn record(&mut self, kind: Output, result: Result<PathBuf>) {
        match result {
            Ok(path) => {
                info!("{} written to {}", kind, path.display());
                self.saved.push((kind, path));
            }
            Err(e) => self.failed.push((kind, e)),
        }
    }
}

///Writes the report and every enabled export. A failing output does not stop the others.
pub fn save_outputs(analysis: &Analysis, config: &RunConfig) -> OutputReport {
    let mut out = OutputReport::default();

    out.record(
        Output::Report,
        save_report(&analysis.report.render(), &config.report),
    );
    if let Some(path) = &config.table {
        out.record(
            Output::Table,
            export_table(&analysis.ranked, path, config.table_format),
        );
    }
    if let Some(path) = &config.chart {
        out.record(Output::Chart, render_chart(&analysis.ranked, path));
    }
    if let Some(path) = &config.json {
        out.record(Output::Json, export_json(&analysis.report, path));
    }
    out
}

///Print failed outputs to stderr.
pub fn print_failed_outputs(failed: &[(Output, AnalysisError)]) {
    eprintln!("\nWarnings:");
    for (kind, err) in failed {
        eprintln!("  {} not saved: {}", kind, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn config_in(dir: &std::path::Path) -> RunConfig {
        RunConfig {
            input: dir.join("data").join("sample.txt"),
            report: dir.join("reports").join("report.txt"),
            table: Some(dir.join("reports").join("word_stats.csv")),
            table_format: TableFormat::Csv,
            chart: Some(dir.join("reports").join("top_words_chart.png")),
            json: Some(dir.join("reports").join("report.json")),
            options: AnalysisOptions::default(),
        }
    }

    #[test]
    fn test_default_config_paths() {
        let config = RunConfig::default();
        assert_eq!(config.input, PathBuf::from("data/sample.txt"));
        assert_eq!(config.report, PathBuf::from("reports/report.txt"));
        assert_eq!(config.table, Some(PathBuf::from("reports/word_stats.csv")));
        assert_eq!(config.chart, Some(PathBuf::from("reports/top_words_chart.png")));
        assert!(config.json.is_none());
        assert!(config.options.remove_stopwords);
        assert_eq!(config.options.top_n, 10);
    }

    #[test]
    fn test_save_outputs_writes_everything() {
        let td = tempdir().unwrap();
        let config = config_in(td.path());
        let analysis = analyze_text(SAMPLE_TEXT, &config.options);

        let out = save_outputs(&analysis, &config);
        assert!(out.failed.is_empty(), "failed: {:?}", out.failed);
        let kinds: Vec<Output> = out.saved.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            kinds,
            vec![Output::Report, Output::Table, Output::Chart, Output::Json]
        );
        let written = std::fs::read_to_string(&config.report).unwrap();
        assert_eq!(written, analysis.report.render());
    }

    #[test]
    fn test_failed_output_does_not_stop_others() {
        let td = tempdir().unwrap();
        let blocker = td.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();

        let mut config = config_in(td.path());
        config.report = blocker.join("report.txt");
        config.chart = None;
        config.json = None;

        let analysis = analyze_text("alpha beta alpha", &config.options);
        let out = save_outputs(&analysis, &config);
        assert_eq!(out.failed.len(), 1);
        assert_eq!(out.failed[0].0, Output::Report);
        assert_eq!(out.saved.len(), 1);
        assert_eq!(out.saved[0].0, Output::Table);
    }

    #[test]
    fn test_sample_text_statistics() {
        let analysis = analyze_text(SAMPLE_TEXT, &AnalysisOptions::default());
        let report = &analysis.report;
        assert_eq!(report.total_words, 76);
        assert_eq!(report.unique_words, 61);
        assert_eq!(report.top_words[0], RankedEntry::new("data", 5));
        assert_eq!(report.top_words[1], RankedEntry::new("python", 5));
        assert_eq!(report.top_words[2], RankedEntry::new("ai", 3));
        assert_eq!(report.top_words[3], RankedEntry::new("ml", 3));
        assert_eq!(
            report.emails,
            vec!["support@ai-learning.org", "hr@tech-corp.com"]
        );
        assert_eq!(report.total_words, analysis.ranked.iter().map(|e| e.count).sum::<usize>());
    }
}
