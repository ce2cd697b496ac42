//! A single extraction session: file selection, processing, display, save.
//!
//! Stages only move forward. A failing stage returns its error and leaves the
//! session exactly as it was before the call.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::frequency::{FrequencyCounter, WordFrequencies};
use crate::report;
use crate::stop_words::StopWordSet;

/// Pipeline stage, ordered from first to last.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    #[default]
    Idle,
    StopWordsLoaded,
    Counted,
    Reported,
}

#[derive(Debug, Default)]
pub struct Session {
    text_file: Option<PathBuf>,
    stop_words_file: Option<PathBuf>,
    stop_words: Option<StopWordSet>,
    frequencies: WordFrequencies,
    phase: Phase,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_text_file(&mut self, path: impl Into<PathBuf>) {
        self.text_file = Some(path.into());
    }

    pub fn select_stop_words_file(&mut self, path: impl Into<PathBuf>) {
        self.stop_words_file = Some(path.into());
    }

    pub fn text_file(&self) -> Option<&Path> {
        self.text_file.as_deref()
    }

    pub fn stop_words_file(&self) -> Option<&Path> {
        self.stop_words_file.as_deref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn stop_words(&self) -> Option<&StopWordSet> {
        self.stop_words.as_ref()
    }

    pub fn frequencies(&self) -> &WordFrequencies {
        &self.frequencies
    }

    /// Load the stop words, then count the text into a fresh table.
    ///
    /// Nothing is committed until both steps succeed, so a failure keeps the
    /// previous stop words and frequencies.
    pub fn process(&mut self) -> Result<&WordFrequencies> {
        let (text_file, stop_words_file) = self.selected_files()?;
        let stop_words = StopWordSet::load_file(stop_words_file)?;
        let frequencies = FrequencyCounter::new(&stop_words).count_file(text_file)?;

        self.stop_words = Some(stop_words);
        self.commit(frequencies);
        Ok(&self.frequencies)
    }

    /// Load the selected stop-word file on its own.
    ///
    /// A table counted earlier is kept until the next [`Session::count`].
    pub fn load_stop_words(&mut self) -> Result<&StopWordSet> {
        let path = self
            .stop_words_file
            .as_ref()
            .ok_or(Error::MissingInput("stop words file"))?;
        let stop_words = StopWordSet::load_file(path)?;
        self.phase = self.phase.max(Phase::StopWordsLoaded);
        Ok(&*self.stop_words.insert(stop_words))
    }

    /// Count the selected text against the stop words already loaded.
    pub fn count(&mut self) -> Result<&WordFrequencies> {
        let text_file = self
            .text_file
            .as_ref()
            .ok_or(Error::MissingInput("text file"))?;
        let stop_words = self
            .stop_words
            .as_ref()
            .ok_or(Error::MissingInput("stop words file"))?;
        let frequencies = FrequencyCounter::new(stop_words).count_file(text_file)?;

        self.commit(frequencies);
        Ok(&self.frequencies)
    }

    /// The display block for the current table.
    pub fn display(&self) -> String {
        report::format_display(&self.frequencies)
    }

    /// Save the current table to `path`, overwriting it.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<()> {
        if self.frequencies.is_empty() {
            return Err(Error::NothingToSave);
        }
        report::save_file(&self.frequencies, path)?;
        self.phase = Phase::Reported;
        Ok(())
    }

    fn selected_files(&self) -> Result<(&Path, &Path)> {
        match (&self.text_file, &self.stop_words_file) {
            (None, _) => Err(Error::MissingInput("text file")),
            (_, None) => Err(Error::MissingInput("stop words file")),
            (Some(text), Some(stop_words)) => Ok((text.as_path(), stop_words.as_path())),
        }
    }

    fn commit(&mut self, frequencies: WordFrequencies) {
        tracing::debug!(
            words = frequencies.len(),
            total = frequencies.total(),
            "frequency table replaced"
        );
        self.frequencies = frequencies;
        self.phase = Phase::Counted;
    }
}
