use std::fmt;

use serde::Serialize;

use crate::emails::{extract_emails, strip_emails};
use crate::frequency::{FrequencyTable, RankedEntry, rank_all};
use crate::tokenize::tokens;

const BANNER: &str = "==============================";
const SEPARATOR: &str = "------------------------------";
const WORD_COLUMN: usize = 15;

/// Default number of ranked words shown in the report.
pub const DEFAULT_TOP_N: usize = 10;

///Options for a single analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub remove_stopwords: bool,
    pub top_n: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            remove_stopwords: true,
            top_n: DEFAULT_TOP_N,
        }
    }
}

///Result of one analysis, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Counted words; text matched as an email address is not part of it.
    pub total_words: usize,
    pub unique_words: usize,
    pub top_n: usize,
    pub top_words: Vec<RankedEntry>,
    pub emails: Vec<String>,
}

impl Report {
    pub fn render(&self) -> String {
        render_lines(
            self.total_words,
            self.unique_words,
            self.top_n,
            &self.top_words,
            &self.emails,
        )
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

///Report plus the complete ranking, which the tabular export needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub report: Report,
    pub ranked: Vec<RankedEntry>,
}

///Runs tokenizing, counting, ranking and email extraction over raw text.
///Email addresses are reported separately and left out of the word counts.
/// # Example
/// ```
/// use word_report::{AnalysisOptions, analyze_text};
/// let analysis = analyze_text("AI is great. AI helps. Email me at a@b.com", &AnalysisOptions::default());
/// assert_eq!(analysis.report.total_words, 6);
/// assert_eq!(analysis.report.unique_words, 5);
/// assert_eq!(analysis.report.top_words[0].word, "ai");
/// assert_eq!(analysis.report.emails, vec!["a@b.com"]);
/// ```
pub fn analyze_text(text: &str, options: &AnalysisOptions) -> Analysis {
    let words = strip_emails(text);
    let table = FrequencyTable::from_tokens(tokens(&words, options.remove_stopwords));
    let ranked = rank_all(&table);
    let top_words = ranked.iter().take(options.top_n).cloned().collect();

    let report = Report {
        total_words: table.total(),
        unique_words: table.unique(),
        top_n: options.top_n,
        top_words,
        emails: extract_emails(text),
    };
    Analysis { report, ranked }
}

///Renders the fixed-layout text report. Lines are joined with '\n', without a trailing newline.
pub fn format_report(
    total_words: usize,
    unique_words: usize,
    top_words: &[RankedEntry],
    emails: &[String],
) -> String {
    render_lines(total_words, unique_words, DEFAULT_TOP_N, top_words, emails)
}

fn render_lines(
    total_words: usize,
    unique_words: usize,
    top_n: usize,
    top_words: &[RankedEntry],
    emails: &[String],
) -> String {
    let mut lines: Vec<String> = vec![
        BANNER.to_string(),
        "   TEXT ANALYSIS REPORT".to_string(),
        BANNER.to_string(),
        format!("Total Words (clean): {}", total_words),
        format!("Unique Words:        {}", unique_words),
        SEPARATOR.to_string(),
        format!("Top {} Most Frequent Words:", top_n),
    ];

    for (rank, entry) in top_words.iter().enumerate() {
        lines.push(format!(
            "{}. {:<width$} : {}",
            rank + 1,
            entry.word,
            entry.count,
            width = WORD_COLUMN
        ));
    }

    lines.push(SEPARATOR.to_string());
    lines.push(format!("Found Emails ({}):", emails.len()));
    if emails.is_empty() {
        lines.push("No emails found.".to_string());
    } else {
        lines.extend(emails.iter().map(|email| format!("- {}", email)));
    }
    lines.push(BANNER.to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::tokenize;

    #[test]
    fn test_empty_report() {
        let out = format_report(0, 0, &[], &[]);
        assert!(out.contains("Total Words (clean): 0"));
        assert!(out.contains("Unique Words:        0"));
        assert!(out.contains("Found Emails (0):"));
        assert!(out.contains("No emails found."));
        assert!(!out.ends_with('\n'));
    }

    #[test]
    fn test_full_layout() {
        let top = vec![RankedEntry::new("python", 5), RankedEntry::new("data", 4)];
        let emails = vec!["support@ai-learning.org".to_string()];
        let out = format_report(20, 12, &top, &emails);
        let expected = "\
==============================
   TEXT ANALYSIS REPORT
==============================
Total Words (clean): 20
Unique Words:        12
------------------------------
Top 10 Most Frequent Words:
1. python          : 5
2. data            : 4
------------------------------
Found Emails (1):
- support@ai-learning.org
==============================";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_long_word_is_not_cut() {
        let top = vec![RankedEntry::new("internationalization", 2)];
        let out = format_report(2, 1, &top, &[]);
        assert!(out.contains("1. internationalization : 2"));
    }

    #[test]
    fn test_end_to_end_sample() {
        let analysis = analyze_text(
            "AI is great. AI helps. Email me at a@b.com",
            &AnalysisOptions::default(),
        );
        let report = &analysis.report;
        assert_eq!(report.total_words, 6);
        assert_eq!(report.unique_words, 5);
        assert_eq!(report.top_words[0], RankedEntry::new("ai", 2));
        assert_eq!(report.emails, vec!["a@b.com"]);
        assert_eq!(analysis.ranked.len(), 5);
        assert!(analysis.ranked.iter().all(|e| e.word != "b" && e.word != "com"));
    }

    #[test]
    fn test_email_text_not_counted_as_words() {
        let text = "Ping a@b.com2 and x@y.co now";
        let analysis = analyze_text(text, &AnalysisOptions::default());
        assert_eq!(analysis.report.emails, vec!["a@b.com", "x@y.co"]);
        assert_eq!(analysis.report.total_words, 3);
        let words: Vec<&str> = analysis.ranked.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["ping", "2", "now"]);
        assert_eq!(tokenize(text, true).len(), 7);
    }

    #[test]
    fn test_top_n_heading_and_limit() {
        let options = AnalysisOptions {
            remove_stopwords: false,
            top_n: 2,
        };
        let analysis = analyze_text("x y z x y x", &options);
        assert_eq!(analysis.report.top_words.len(), 2);
        assert_eq!(analysis.ranked.len(), 3);
        let out = analysis.report.to_string();
        assert!(out.contains("Top 2 Most Frequent Words:"));
        assert!(out.contains("1. x               : 3"));
        assert!(out.contains("2. y               : 2"));
        assert!(!out.contains("3. "));
    }

    #[test]
    fn test_default_report_matches_format_report() {
        let analysis = analyze_text("Hello hello world", &AnalysisOptions::default());
        let r = &analysis.report;
        assert_eq!(
            r.render(),
            format_report(r.total_words, r.unique_words, &r.top_words, &r.emails)
        );
    }
}
