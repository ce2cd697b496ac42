use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};
use crate::stop_words::StopWordSet;
use crate::tokenization::{for_each_line, tokenize};

/// Occurrence counts keyed by normalized word.
///
/// Iteration is in ascending lexicographic order of the word, which is the order
/// used for both display and save.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordFrequencies {
    counts: BTreeMap<String, u64>,
}

impl WordFrequencies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(w, c)| (w.as_str(), *c))
    }

    fn record(&mut self, word: String) {
        *self.counts.entry(word).or_insert(0) += 1;
    }
}

impl FromIterator<(String, u64)> for WordFrequencies {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

/// Counts the words of a text, skipping stop words.
pub struct FrequencyCounter<'a> {
    stop_words: &'a StopWordSet,
}

impl<'a> FrequencyCounter<'a> {
    pub fn new(stop_words: &'a StopWordSet) -> Self {
        Self { stop_words }
    }

    /// Count every non-stop word of `source`, read line by line.
    ///
    /// Each call starts from an empty table. Invalid UTF-8 is tolerated, but a
    /// read failure part-way through discards everything counted so far and
    /// returns the error.
    pub fn count<R: BufRead>(&self, source: R) -> Result<WordFrequencies> {
        let mut freq = WordFrequencies::new();
        let lines = for_each_line(source, |line| {
            for word in tokenize(line) {
                if !self.stop_words.contains_lowercase(&word) {
                    freq.record(word);
                }
            }
        })
        .map_err(|e| Error::io("Error processing text file", e))?;
        tracing::debug!(
            lines,
            distinct = freq.len(),
            total = freq.total(),
            "counted words"
        );
        Ok(freq)
    }

    /// Open `path` and count it with [`FrequencyCounter::count`].
    pub fn count_file(&self, path: impl AsRef<Path>) -> Result<WordFrequencies> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            Error::io(format!("Error processing text file {}", path.display()), e)
        })?;
        self.count(BufReader::new(file))
    }
}
