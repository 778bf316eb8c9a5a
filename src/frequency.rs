use std::collections::HashMap;

use serde::Serialize;

///A word together with its number of occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub word: String,
    pub count: usize,
}

impl RankedEntry {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

///Occurrence counts per distinct token, remembering the order in which each token was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    index: HashMap<String, usize>,
    entries: Vec<RankedEntry>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    ///Counts every token of the iterator.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for token in tokens {
            table.add(token.as_ref());
        }
        table
    }

    pub fn add(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.index.insert(word.to_owned(), self.entries.len());
                self.entries.push(RankedEntry::new(word, 1));
            }
        }
    }

    ///Occurrences of `word`, 0 if it was never seen.
    pub fn count(&self, word: &str) -> usize {
        self.index
            .get(word)
            .map(|&i| self.entries[i].count)
            .unwrap_or(0)
    }

    ///Sum of all counts, i.e. the number of tokens counted.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    ///Number of distinct tokens.
    pub fn unique(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    ///Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &RankedEntry> {
        self.entries.iter()
    }
}

///Takes a token slice and counts the quantity of each word.
/// # Example
/// ```
/// use word_report::analyze;
/// let words = vec!["one".to_string(), "two".to_string(), "two".to_string()];
/// let table = analyze(&words);
/// assert_eq!(table.count("two"), 2);
/// assert_eq!(table.total(), 3);
/// assert_eq!(table.unique(), 2);
/// ```
pub fn analyze(tokens: &[String]) -> FrequencyTable {
    FrequencyTable::from_tokens(tokens)
}

///Returns the `n` most frequent entries, highest count first.
///Equal counts keep the order in which their words were first seen.
/// # Example
/// ```
/// use word_report::{analyze, rank, RankedEntry};
/// let words: Vec<String> = ["b", "a", "b", "a", "c"].iter().map(|w| w.to_string()).collect();
/// let top = rank(&analyze(&words), 2);
/// assert_eq!(top, vec![RankedEntry::new("b", 2), RankedEntry::new("a", 2)]);
/// ```
pub fn rank(table: &FrequencyTable, n: usize) -> Vec<RankedEntry> {
    let mut ranked = rank_all(table);
    ranked.truncate(n);
    ranked
}

///All entries sorted by count descending, ties in first-seen order.
pub fn rank_all(table: &FrequencyTable) -> Vec<RankedEntry> {
    let mut ranked: Vec<RankedEntry> = table.iter().cloned().collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::tokenize;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_count() {
        let words = words(&["one", "two", "two", "three", "three", "three"]);
        let counted = analyze(&words);
        assert_eq!(counted.count("one"), 1);
        assert_eq!(counted.count("two"), 2);
        assert_eq!(counted.count("three"), 3);
        assert_eq!(counted.count("four"), 0);
        assert_eq!(counted.unique(), 3);
        assert_eq!(counted.total(), 6);
    }

    #[test]
    fn test_first_seen_order_is_kept() {
        let table = analyze(&words(&["z", "y", "z", "x"]));
        let order: Vec<&str> = table.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(order, vec!["z", "y", "x"]);
    }

    #[test]
    fn test_rank_tie_break_by_first_seen() {
        let table = analyze(&words(&["b", "a", "b", "a", "c"]));
        assert_eq!(
            rank(&table, 2),
            vec![RankedEntry::new("b", 2), RankedEntry::new("a", 2)]
        );
        assert_eq!(
            rank_all(&table),
            vec![
                RankedEntry::new("b", 2),
                RankedEntry::new("a", 2),
                RankedEntry::new("c", 1)
            ]
        );
    }

    #[test]
    fn test_rank_sorted_by_count() {
        let table = analyze(&words(&["one", "two", "three", "three", "two", "three"]));
        assert_eq!(
            rank(&table, 10),
            vec![
                RankedEntry::new("three", 3),
                RankedEntry::new("two", 2),
                RankedEntry::new("one", 1)
            ]
        );
    }

    #[test]
    fn test_rank_edges() {
        let table = analyze(&words(&["a", "b"]));
        assert!(rank(&table, 0).is_empty());
        assert_eq!(rank(&table, 5).len(), 2);
        let empty = analyze(&[]);
        assert!(empty.is_empty());
        assert!(rank(&empty, 10).is_empty());
        assert_eq!(empty.total(), 0);
    }

    #[test]
    fn test_total_matches_token_count() {
        let samples = [
            "",
            "AI is great. AI helps. Email me at a@b.com",
            "Python is the king of Data Science. Why Python? PYTHON!",
            "12 12 12 ___ ---",
        ];
        for text in samples {
            for remove in [true, false] {
                let tokens = tokenize(text, remove);
                let table = analyze(&tokens);
                assert_eq!(table.total(), tokens.len());
                for entry in table.iter() {
                    assert!(!entry.word.is_empty());
                    assert!(entry.count >= 1);
                    assert_eq!(entry.word, entry.word.to_lowercase());
                }
            }
        }
    }
}
