//! Data model for the sequence padder.
//!
//! This module contains the data structures for one run:
//! - The raw token list read from the input file
//! - The length census used to find the target width
//! - The padded output set
//!
//! Lengths are counted in characters, not bytes.

use std::collections::BTreeMap;
use std::fmt;

/// Ordered list of raw sequence tokens, as found in the input file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceSet {
    tokens: Vec<String>,
}

impl SequenceSet {
    /// Creates a set from already split tokens.
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// Splits file content on runs of whitespace, keeping token order.
    pub fn from_content(content: &str) -> Self {
        Self {
            tokens: content.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// Returns the number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if no token was found.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Gets a token by index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Counts how many tokens have each length.
    pub fn length_histogram(&self) -> LengthHistogram {
        LengthHistogram::from_sequences(self)
    }
}

/// Mapping from token length to the number of tokens with that length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LengthHistogram {
    counts: BTreeMap<usize, usize>,
}

impl LengthHistogram {
    pub fn from_sequences(sequences: &SequenceSet) -> Self {
        let mut counts = BTreeMap::new();
        for token in sequences.iter() {
            *counts.entry(token.chars().count()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Number of tokens of exactly `len` characters.
    pub fn count(&self, len: usize) -> usize {
        self.counts.get(&len).copied().unwrap_or(0)
    }

    /// Largest length present, `None` for an empty census.
    pub fn max_length(&self) -> Option<usize> {
        self.counts.keys().next_back().copied()
    }

    /// Number of distinct lengths.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates `(length, count)` pairs in increasing length order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().map(|(&len, &count)| (len, count))
    }
}

impl fmt::Display for LengthHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (len, count)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", len, count)?;
        }
        write!(f, "}}")
    }
}

/// Sequences padded to a common width, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedSequenceSet {
    sequences: Vec<String>,
    width: usize,
}

impl PaddedSequenceSet {
    pub fn new(sequences: Vec<String>, width: usize) -> Self {
        Self { sequences, width }
    }

    /// Returns the number of sequences.
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Target width every sequence was padded to.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.sequences.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.sequences.iter().map(String::as_str)
    }

    /// One sequence per line, no trailing newline.
    pub fn to_text(&self) -> String {
        self.sequences.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_mixed_whitespace() {
        let set = SequenceSet::from_content("  act\tgtaca\n\n  tt \r\n");
        assert_eq!(set.len(), 3);
        assert_eq!(set.get(0), Some("act"));
        assert_eq!(set.get(1), Some("gtaca"));
        assert_eq!(set.get(2), Some("tt"));
    }

    #[test]
    fn test_whitespace_only_content_is_empty() {
        let set = SequenceSet::from_content(" \n\t \n");
        assert!(set.is_empty());
        assert_eq!(set.length_histogram().max_length(), None);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let set = SequenceSet::from_content("aa bb aa");
        let tokens: Vec<&str> = set.iter().collect();
        assert_eq!(tokens, vec!["aa", "bb", "aa"]);
    }

    #[test]
    fn test_histogram_counts() {
        let set = SequenceSet::from_content("act gtaca ggg a");
        let histogram = set.length_histogram();

        assert_eq!(histogram.count(3), 2);
        assert_eq!(histogram.count(5), 1);
        assert_eq!(histogram.count(1), 1);
        assert_eq!(histogram.count(4), 0);
        assert_eq!(histogram.len(), 3);
        assert_eq!(histogram.max_length(), Some(5));
    }

    #[test]
    fn test_histogram_counts_characters_not_bytes() {
        let set = SequenceSet::from_content("acé ñu");
        let histogram = set.length_histogram();

        assert_eq!(histogram.count(3), 1);
        assert_eq!(histogram.count(2), 1);
        assert_eq!(histogram.max_length(), Some(3));
    }

    #[test]
    fn test_histogram_display() {
        let set = SequenceSet::from_content("act gtaca ggg");
        assert_eq!(set.length_histogram().to_string(), "{3: 2, 5: 1}");
        assert_eq!(LengthHistogram::default().to_string(), "{}");
    }

    #[test]
    fn test_to_text_has_no_trailing_newline() {
        let padded = PaddedSequenceSet::new(vec!["AAA".into(), "CCC".into()], 3);
        assert_eq!(padded.to_text(), "AAA\nCCC");
        assert_eq!(padded.width(), 3);
    }
}
