//! Word-frequency tag extraction.
//!
//! Loads a case-insensitive stop-word set, counts the ASCII-alphabetic words of a
//! text line by line, and renders the resulting table in ascending word order for
//! display or for saving as a flat `word: count` file.

pub mod error;
pub mod frequency;
pub mod pipeline;
pub mod report;
pub mod stop_words;
pub mod tokenization;

use std::io::{BufRead, Write};

pub use error::{Error, Result};
pub use frequency::{FrequencyCounter, WordFrequencies};
pub use pipeline::{Phase, Session};
pub use stop_words::StopWordSet;

/// Load a stop-word set from a readable source.
pub fn load_stop_words<R: BufRead>(source: R) -> Result<StopWordSet> {
    StopWordSet::load(source)
}

/// Count the non-stop words of a readable text source.
pub fn count_words<R: BufRead>(source: R, stop_words: &StopWordSet) -> Result<WordFrequencies> {
    FrequencyCounter::new(stop_words).count(source)
}

/// Write the frequency table to a sink, one `word: count` entry per line.
pub fn save_report<W: Write>(freq: &WordFrequencies, sink: W) -> Result<()> {
    report::save(freq, sink)
}
