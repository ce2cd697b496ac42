use std::io::{self, Read, Write};
use std::path::PathBuf;

use tag_common::WordFrequencies;
use tempfile::TempDir;

/// Write `content` to `name` inside `dir` and return the full path.
#[allow(dead_code)]
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Build an expected table from `(word, count)` pairs.
#[allow(dead_code)]
pub fn freq(pairs: &[(&str, u64)]) -> WordFrequencies {
    pairs.iter().map(|(w, c)| (w.to_string(), *c)).collect()
}

/// Parse a saved tags file back into a table by splitting each line on `": "`.
#[allow(dead_code)]
pub fn parse_saved(content: &str) -> WordFrequencies {
    content
        .lines()
        .map(|line| {
            let (word, count) = line.split_once(": ").unwrap();
            (word.to_string(), count.parse().unwrap())
        })
        .collect()
}

/// A reader that yields `prefix` and then fails.
#[allow(dead_code)]
pub struct FailingReader {
    prefix: io::Cursor<Vec<u8>>,
}

#[allow(dead_code)]
impl FailingReader {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: io::Cursor::new(prefix.as_bytes().to_vec()),
        }
    }
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.prefix.read(buf)? {
            0 => Err(io::Error::other("device unplugged")),
            n => Ok(n),
        }
    }
}

/// A sink that rejects every write.
#[allow(dead_code)]
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _data: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("disk full"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
