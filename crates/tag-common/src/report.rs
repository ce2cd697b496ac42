use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::frequency::WordFrequencies;

/// Header line of the display block.
pub const DISPLAY_HEADER: &str = "Word Frequencies:";

/// Render each entry as `word: count`, in ascending word order.
pub fn format_lines(freq: &WordFrequencies) -> Vec<String> {
    freq.iter()
        .map(|(word, count)| format_entry(word, count))
        .collect()
}

/// Render the display block: a blank line, the header, then one entry per line.
pub fn format_display(freq: &WordFrequencies) -> String {
    let mut out = String::with_capacity(DISPLAY_HEADER.len() + 2 + freq.len() * 12);
    out.push('\n');
    out.push_str(DISPLAY_HEADER);
    out.push('\n');
    for line in format_lines(freq) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Write the entries to `sink`, one per line with no header, then flush.
pub fn save<W: Write>(freq: &WordFrequencies, mut sink: W) -> Result<()> {
    let write_err = |e: std::io::Error| Error::io("Error saving tags", e);
    for (word, count) in freq.iter() {
        writeln!(sink, "{}", format_entry(word, count)).map_err(write_err)?;
    }
    sink.flush().map_err(write_err)
}

/// Create or truncate `path` and save the entries into it.
pub fn save_file(freq: &WordFrequencies, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| Error::io(format!("Error saving tags to {}", path.display()), e))?;
    save(freq, BufWriter::new(file))?;
    tracing::info!(path = %path.display(), entries = freq.len(), "saved tags");
    Ok(())
}

fn format_entry(word: &str, count: u64) -> String {
    format!("{}: {}", word, count)
}
