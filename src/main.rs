#![forbid(unsafe_code)]
//! # Word Report CLI
//!
//! Command-line front end of the `word_report` crate. Reads one text file, prints a
//! word-frequency and email report, and saves it together with a word table and a
//! bar chart.
//!
//! ## Example
//! ```bash
//! cargo run --release -- --write-sample
//! cargo run --release -- --input data/sample.txt --top 5 --json reports/report.json
//! ```
//!
//! See `--help` for all available options.

use clap::Parser;
use log::{debug, error};
use std::path::PathBuf;
use std::process;
use word_report::{
    AnalysisOptions, DEFAULT_CHART, DEFAULT_INPUT, DEFAULT_REPORT, DEFAULT_TABLE, DEFAULT_TOP_N,
    RunConfig, TableFormat, analyze_text, print_failed_outputs, read_input, save_outputs,
    write_sample,
};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Text file to analyze (UTF-8)
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Where to save the text report
    #[arg(long, default_value = DEFAULT_REPORT)]
    report: PathBuf,

    /// Where to save the word table with all words and counts
    #[arg(long, default_value = DEFAULT_TABLE)]
    csv: PathBuf,

    /// Skip the word table
    #[arg(long, default_value_t = false)]
    no_csv: bool,

    /// Delimiter style of the word table (csv, tsv)
    #[arg(long, default_value = "csv")]
    table_format: TableFormat,

    /// Where to save the bar chart of the top 10 words (PNG)
    #[arg(long, default_value = DEFAULT_CHART)]
    chart: PathBuf,

    /// Skip the bar chart
    #[arg(long, default_value_t = false)]
    no_chart: bool,

    /// Also save the report as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Number of most frequent words listed in the report
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Keep stopwords like "the" or "and" in the counts (default: false)
    #[arg(long, default_value_t = false)]
    keep_stopwords: bool,

    /// Write the bundled demo text to the input path and exit
    #[arg(long, default_value_t = false)]
    write_sample: bool,
}

impl Cli {
    fn into_config(self) -> RunConfig {
        RunConfig {
            input: self.input,
            report: self.report,
            table: (!self.no_csv).then_some(self.csv),
            table_format: self.table_format,
            chart: (!self.no_chart).then_some(self.chart),
            json: self.json,
            options: AnalysisOptions {
                remove_stopwords: !self.keep_stopwords,
                top_n: self.top,
            },
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if cli.write_sample {
        match write_sample(&cli.input) {
            Ok(path) => println!("Sample file created: {}", path.display()),
            Err(e) => {
                error!("Error: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    let config = cli.into_config();
    debug!("run configuration: {:?}", config);
    println!("--- Processing file: {} ---", config.input.display());

    let text = match read_input(&config.input) {
        Ok(text) => text,
        Err(e) => {
            error!("Error: {}", e);
            process::exit(1);
        }
    };

    let analysis = analyze_text(&text, &config.options);
    println!("{}", analysis.report);

    // stdout first, files after
    let outputs = save_outputs(&analysis, &config);
    for (kind, path) in &outputs.saved {
        println!("[SUCCESS] {} saved to: {}", kind, path.display());
    }
    if !outputs.failed.is_empty() {
        print_failed_outputs(&outputs.failed);
        process::exit(1);
    }
}
