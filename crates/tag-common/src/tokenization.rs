use std::io::{self, BufRead};

/// Split a single line into raw tokens on runs of whitespace.
///
/// Separators are the ASCII whitespace characters (space, tab, line feed,
/// vertical tab, form feed, carriage return) and the Unicode line terminators
/// U+0085, U+2028 and U+2029. Anything else, including non-ASCII spaces, stays
/// inside its token.
pub fn raw_tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(is_token_separator).filter(|s| !s.is_empty())
}

/// Normalize a raw token: drop every character that is not an ASCII letter,
/// then lowercase what is left. May return an empty string.
pub fn normalize_token(token: &str) -> String {
    token
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Tokenize a line into normalized, non-empty words. Stop words are not removed.
pub fn tokenize(line: &str) -> impl Iterator<Item = String> + '_ {
    raw_tokens(line)
        .map(normalize_token)
        .filter(|s| !s.is_empty())
}

/// Split stop-word file content into entries.
///
/// Delimiters are Unicode whitespace except the non-breaking spaces U+00A0,
/// U+2007, U+202F and the control U+0085, plus the ASCII separators U+001C to
/// U+001F.
pub fn stop_word_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_stop_word_delimiter).filter(|s| !s.is_empty())
}

/// Feed each `\n`-terminated line of `source` to `f`, without the terminator.
///
/// Invalid UTF-8 is replaced with U+FFFD rather than failing; only ASCII letters
/// and separators matter to the callers.
pub(crate) fn for_each_line<R, F>(mut source: R, mut f: F) -> io::Result<usize>
where
    R: BufRead,
    F: FnMut(&str),
{
    let mut buf = Vec::new();
    let mut lines = 0;
    loop {
        buf.clear();
        if source.read_until(b'\n', &mut buf)? == 0 {
            return Ok(lines);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        lines += 1;
        let line = String::from_utf8_lossy(&buf);
        f(line.as_ref());
    }
}

fn is_token_separator(c: char) -> bool {
    matches!(
        c,
        ' ' | '\t' | '\n' | '\u{000B}' | '\u{000C}' | '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

fn is_stop_word_delimiter(c: char) -> bool {
    match c {
        '\u{001C}'..='\u{001F}' => true,
        '\u{00A0}' | '\u{2007}' | '\u{202F}' | '\u{0085}' => false,
        _ => c.is_whitespace(),
    }
}
