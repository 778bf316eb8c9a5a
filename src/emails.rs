use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL: Regex =
        Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("valid regex");
}

///Extracts email-shaped substrings from raw (not lowercased) text.
///Matches are non-overlapping, left to right, duplicates included. This is a heuristic
///and does not validate addresses.
/// # Example
/// ```
/// use word_report::extract_emails;
/// let found = extract_emails("Contact support@ai-learning.org or hr@tech-corp.com.");
/// assert_eq!(found, vec!["support@ai-learning.org", "hr@tech-corp.com"]);
/// ```
pub fn extract_emails(text: &str) -> Vec<String> {
    EMAIL
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

///Replaces every email match with a space so its pieces are not counted as words.
pub fn strip_emails(text: &str) -> Cow<'_, str> {
    EMAIL.replace_all(text, " ")
}
