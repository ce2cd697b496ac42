mod fixtures;

use std::io::{BufReader, Cursor};

use fixtures::freq;
use tag_common::{count_words, FrequencyCounter, StopWordSet};

fn count(text: &str, stop: &[&str]) -> tag_common::WordFrequencies {
    count_words(Cursor::new(text), &StopWordSet::from_words(stop)).unwrap()
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn stop_word_filtered_across_cases() {
    let result = count("The Quick fox jumps. THE fox runs!", &["the"]);
    assert_eq!(
        result,
        freq(&[("quick", 1), ("fox", 2), ("jumps", 1), ("runs", 1)])
    );
}

#[test]
fn repeated_word_accumulates() {
    assert_eq!(count("a a a", &[]), freq(&[("a", 3)]));
}

#[test]
fn digits_only_yield_nothing() {
    assert!(count("123 456", &[]).is_empty());
}

#[test]
fn counts_accumulate_across_lines() {
    assert_eq!(
        count("Hello\nWorld hello", &[]),
        freq(&[("hello", 2), ("world", 1)])
    );
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn tokens_never_span_lines() {
    assert_eq!(
        count("foo\nbar", &[]),
        freq(&[("foo", 1), ("bar", 1)])
    );
}

#[test]
fn tokens_never_span_unicode_line_separators() {
    assert_eq!(
        count("foo\u{2028}bar baz\u{0085}qux\u{2029}end", &[]),
        freq(&[("foo", 1), ("bar", 1), ("baz", 1), ("qux", 1), ("end", 1)])
    );
}

#[test]
fn lone_carriage_return_separates_tokens() {
    assert_eq!(count("one\rtwo", &[]), freq(&[("one", 1), ("two", 1)]));
}

#[test]
fn crlf_line_endings() {
    assert_eq!(
        count("one two\r\ntwo\r\n", &[]),
        freq(&[("one", 1), ("two", 2)])
    );
}

#[test]
fn blank_and_whitespace_lines() {
    assert_eq!(count("\n   \n\t\nfox\n\n", &[]), freq(&[("fox", 1)]));
}

#[test]
fn empty_input() {
    let result = count("", &["the"]);
    assert!(result.is_empty());
    assert_eq!(result.total(), 0);
}

#[test]
fn stop_word_matched_after_normalization() {
    // "The," normalizes to "the", which is a stop word.
    assert_eq!(count("The, the! THE? fox", &["the"]), freq(&[("fox", 1)]));
}

#[test]
fn stop_word_with_punctuation_never_matches() {
    // The stop word is stored verbatim, but normalized tokens have no apostrophes.
    assert_eq!(count("don't", &["don't"]), freq(&[("dont", 1)]));
}

#[test]
fn uppercase_stop_word_file_entry() {
    assert_eq!(count("and so AND", &["AND"]), freq(&[("so", 1)]));
}

#[test]
fn total_and_get() {
    let result = count("b a b c b", &[]);
    assert_eq!(result.total(), 5);
    assert_eq!(result.len(), 3);
    assert_eq!(result.get("b"), Some(3));
    assert_eq!(result.get("z"), None);
}

#[test]
fn iteration_is_lexicographic() {
    let result = count("pear apple fig banana", &[]);
    let words: Vec<&str> = result.iter().map(|(w, _)| w).collect();
    assert_eq!(words, vec!["apple", "banana", "fig", "pear"]);
}

// ============================================================================
// Failures and repeated runs
// ============================================================================

#[test]
fn unreadable_source_returns_no_partial_result() {
    let stop = StopWordSet::new();
    let reader = BufReader::new(fixtures::FailingReader::new("some words here\n"));
    let err = count_words(reader, &stop).unwrap_err();
    assert!(err.is_io());
    assert!(err.to_string().starts_with("Error processing text file"));
}

#[test]
fn invalid_utf8_is_skipped_like_other_non_letters() {
    let stop = StopWordSet::new();
    let bytes: &[u8] = b"fine line\nbr\xffoken \xfe\xfe fine\n";
    let result = count_words(bytes, &stop).unwrap();
    assert_eq!(result, freq(&[("fine", 2), ("line", 1), ("broken", 1)]));
}

#[test]
fn counter_does_not_accumulate_between_runs() {
    let stop = StopWordSet::new();
    let counter = FrequencyCounter::new(&stop);
    let first = counter.count(Cursor::new("fox fox")).unwrap();
    let second = counter.count(Cursor::new("fox")).unwrap();
    assert_eq!(first.get("fox"), Some(2));
    assert_eq!(second.get("fox"), Some(1));
}

#[test]
fn count_file_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixtures::write_file(&dir, "input.txt", "Red green\nred BLUE\n");
    let stop = StopWordSet::from_words(["blue"]);
    let result = FrequencyCounter::new(&stop).count_file(&path).unwrap();
    assert_eq!(result, freq(&[("red", 2), ("green", 1)]));
}

#[test]
fn count_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let stop = StopWordSet::new();
    let err = FrequencyCounter::new(&stop)
        .count_file(dir.path().join("missing.txt"))
        .unwrap_err();
    assert!(err.is_io());
    assert!(err.to_string().contains("missing.txt"));
}
