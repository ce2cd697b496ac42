use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};
use crate::tokenization::{for_each_line, stop_word_tokens};

/// Words excluded from the frequency count.
///
/// Entries are stored lowercased and queries are lowercased before lookup, so
/// membership is case-insensitive. No alphabetic filtering is applied to the
/// entries themselves: `"don't"` is kept as `"don't"`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// An empty set; nothing is filtered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from in-memory words, lowercasing each one.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Read whitespace-delimited tokens from `source`. Tokens may be separated by
    /// any whitespace including newlines, but not by non-breaking spaces; order
    /// and duplicates are irrelevant.
    pub fn load<R: BufRead>(source: R) -> Result<Self> {
        let mut words = HashSet::new();
        for_each_line(source, |line| {
            words.extend(stop_word_tokens(line).map(str::to_lowercase));
        })
        .map_err(|e| Error::io("Error loading stop words file", e))?;
        tracing::debug!(count = words.len(), "loaded stop words");
        Ok(Self { words })
    }

    /// Open `path` and load it with [`StopWordSet::load`].
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            Error::io(
                format!("Error loading stop words file {}", path.display()),
                e,
            )
        })?;
        Self::load(BufReader::new(file))
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Lookup for a word already known to be lowercase.
    pub(crate) fn contains_lowercase(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the stored (lowercased) words in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
