use once_cell::sync::Lazy;
use regex::bytes::Regex;

pub mod log_events;
use self::log_events::*;

const COMMAND_DELIMITER: &str = " - ";

// Digits are ASCII only; the bytes regex also runs on chunks that may start
// or end in the middle of a multi-byte character.
static TIMESTAMP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{3}").unwrap());

/// Returns the offsets of all non-overlapping timestamp tokens in `buffer`,
/// in ascending order.
pub fn locate_timestamps(buffer: &[u8]) -> Vec<usize> {
    let mut offsets: Vec<usize> = Vec::new();
    let mut position = 0;

    while let Some(found) = TIMESTAMP_REGEX.find_at(buffer, position) {
        offsets.push(found.start());
        position = found.start() + TIMESTAMP_LENGTH;
    }

    offsets
}

/// Position right after the first `" - "` in the fragment.
pub fn find_delimiter_end(fragment: &str) -> Option<usize> {
    fragment
        .find(COMMAND_DELIMITER)
        .map(|index| index + COMMAND_DELIMITER.len())
}

/// Position of the first `"("` in the fragment, or its length if there is
/// none.
///
/// A parenthesis at index 0 counts as not found, so the command runs to the
/// end of the fragment. Existing traces were analyzed with this rule and the
/// resulting command texts are relied upon when grouping.
pub fn find_closing_boundary(fragment: &str) -> usize {
    match fragment.find('(') {
        Some(0) | None => fragment.len(),
        Some(index) => index,
    }
}

pub fn extract_command(fragment: &str) -> &str {
    let start = find_delimiter_end(fragment).unwrap_or(0);
    let end = find_closing_boundary(fragment);

    if end < start {
        return "";
    }

    &fragment[start..end]
}

/// Splits `text` on timestamp tokens and returns one record per fragment
/// following a token. Text before the first token is ignored.
pub fn extract_records(text: &str) -> Vec<Record> {
    let offsets = locate_timestamps(text.as_bytes());
    let mut records: Vec<Record> = Vec::with_capacity(offsets.len());

    for (index, &offset) in offsets.iter().enumerate() {
        let fragment_end = offsets.get(index + 1).cloned().unwrap_or_else(|| text.len());
        let timestamp_text = &text[offset..offset + TIMESTAMP_LENGTH];
        let fragment = &text[offset + TIMESTAMP_LENGTH..fragment_end];

        match Timestamp::parse(timestamp_text) {
            Ok(timestamp) => records.push(Record::new(extract_command(fragment), timestamp)),
            Err(err) => warn!("Skipped a record at offset {}: {}", offset, err),
        }
    }

    records
}
