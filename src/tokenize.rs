use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Unicode word characters: letters, digits and underscore.
    static ref WORD: Regex = Regex::new(r"\b\w+\b").expect("valid regex");

    /// Common English function words dropped before counting.
    pub static ref STOPWORDS: HashSet<&'static str> = [
        "the", "is", "a", "an", "and", "or", "but", "to", "of", "in", "on", "at", "it", "that",
        "this",
    ]
    .into_iter()
    .collect();
}

///Returns true if `word` is in the stopword set. Expects an already lowercased word.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

///Lazily yields the normalized tokens of `text`, in order of appearance.
///Finds runs of word characters, lowercases each one and, if `remove_stopwords` is set,
///skips every stopword. Numeric runs such as "2024" are kept as tokens.
pub fn tokens(text: &str, remove_stopwords: bool) -> impl Iterator<Item = String> + '_ {
    WORD.find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .filter(move |word| !(remove_stopwords && is_stopword(word)))
}

///Splits String into lowercased words as Vec<String>.
///Punctuation, whitespace and symbols separate words and are dropped.
/// # Example
/// ```
/// use word_report::tokenize;
/// let words = tokenize("The cat and the dog", true);
/// assert_eq!(words, vec!["cat".to_string(), "dog".to_string()]);
/// let all = tokenize("The cat and the dog", false);
/// assert_eq!(all, vec!["the", "cat", "and", "the", "dog"]);
/// ```
pub fn tokenize(text: &str, remove_stopwords: bool) -> Vec<String> {
    tokens(text, remove_stopwords).collect()
}
