use std::io::Read;

use failure::Error;

use crate::protocol::Identifiers;
use crate::request_response_matcher::PairMatcher;
use crate::result::ProtocolTraceResult;
use crate::scanner::{self, ScanOptions};
use crate::timing_analyzer;
use crate::unique_commands;

pub fn analyze<R>(
    reader: &mut R,
    identifiers: &Identifiers,
    options: &ScanOptions,
) -> Result<ProtocolTraceResult, Error>
where
    R: Read + ?Sized,
{
    let mut matcher = PairMatcher::new(identifiers.clone());
    let mut record_count: usize = 0;

    scanner::scan(reader, options, |record| {
        record_count += 1;
        matcher.add(record);
    })?;

    let dropped_responses = matcher.dropped_responses();
    let pairs = matcher.into_pairs();
    let unique_commands = unique_commands::get_unique_commands(&pairs);

    info!(
        "{} records, {} pairs, {} unique commands, {} dropped responses",
        record_count,
        pairs.len(),
        unique_commands.len(),
        dropped_responses
    );

    Ok(ProtocolTraceResult {
        number_of_unique_commands: unique_commands.len(),
        timing: timing_analyzer::analyze(&pairs, &unique_commands),
    })
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::Cursor;

    use chrono::Duration;

    use crate::scanner::{EndOfStream, DEFAULT_CHUNK_SIZE};
    use crate::timing_analyzer::{format_seconds, TimingResult};
    use super::*;

    fn v2() -> Identifiers {
        Identifiers::new("CMD_", "RSP_")
    }

    #[test]
    fn test_analyze() {
        let mut input_reader = File::open("src/test/trace-1.log").unwrap();

        let result = analyze(&mut input_reader, &v2(), &ScanOptions::default()).unwrap();

        let expected = ProtocolTraceResult {
            number_of_unique_commands: 3,
            timing: Some(TimingResult {
                inside_time: Duration::milliseconds(1225),
                per_request_inside_time: Duration::milliseconds(408),
                outside_time: Duration::milliseconds(2675),
                per_request_outside_time: Duration::milliseconds(892),
            }),
        };

        assert_eq!(result, expected);
    }

    #[test]
    fn test_analyze_chunk_size_does_not_change_result() {
        let mut data = Vec::new();
        File::open("src/test/trace-1.log")
            .unwrap()
            .read_to_end(&mut data)
            .unwrap();

        let expected =
            analyze(&mut Cursor::new(&data), &v2(), &ScanOptions::default()).unwrap();

        for &chunk_size in &[1, 7, DEFAULT_CHUNK_SIZE, data.len()] {
            let options = ScanOptions {
                chunk_size,
                end_of_stream: EndOfStream::Drain,
            };

            let result = analyze(&mut Cursor::new(&data), &v2(), &options).unwrap();

            assert_eq!(result, expected, "chunk size {}", chunk_size);
        }
    }

    #[test]
    fn test_analyze_discard_tail() {
        let mut input_reader = File::open("src/test/trace-1.log").unwrap();
        let options = ScanOptions {
            chunk_size: DEFAULT_CHUNK_SIZE,
            end_of_stream: EndOfStream::Discard,
        };

        let result = analyze(&mut input_reader, &v2(), &options).unwrap();
        let timing = result.timing.unwrap();

        assert_eq!(result.number_of_unique_commands, 2);
        assert_eq!(format_seconds(&timing.inside_time), "1.225");
        assert_eq!(format_seconds(&timing.per_request_inside_time), "0.613");
        assert_eq!(format_seconds(&timing.outside_time), "0.675");
        assert_eq!(format_seconds(&timing.per_request_outside_time), "0.338");
    }

    #[test]
    fn test_analyze_repeated_command() {
        let mut input_reader = File::open("src/test/scenario.log").unwrap();
        let identifiers = Identifiers::new("REQUEST", "RESPONSE");

        let result = analyze(&mut input_reader, &identifiers, &ScanOptions::default()).unwrap();
        let timing = result.timing.unwrap();

        assert_eq!(result.number_of_unique_commands, 1);
        assert_eq!(format_seconds(&timing.inside_time), "3.000");
        assert_eq!(format_seconds(&timing.outside_time), "-1.750");
    }

    #[test]
    fn test_analyze_single_pair() {
        let text = "12:00:00.000 - REQUEST_A(1)\n12:00:02.500 - RESPONSE_A(1)\n";
        let identifiers = Identifiers::new("REQUEST", "RESPONSE");

        let result =
            analyze(&mut Cursor::new(text), &identifiers, &ScanOptions::default()).unwrap();

        assert_eq!(result.number_of_unique_commands, 1);
        assert_eq!(
            format_seconds(&result.timing.unwrap().inside_time),
            "2.500"
        );
    }

    #[test]
    fn test_analyze_stray_response_only() {
        let text = "12:00:00.000 - RESPONSE_A(1)\n";
        let identifiers = Identifiers::new("REQUEST", "RESPONSE");

        let result =
            analyze(&mut Cursor::new(text), &identifiers, &ScanOptions::default()).unwrap();

        assert_eq!(
            result,
            ProtocolTraceResult {
                number_of_unique_commands: 0,
                timing: None,
            }
        );
    }

    #[test]
    fn test_analyze_no_timestamps() {
        let mut input_reader = File::open("src/test/no-timestamps.log").unwrap();

        let result = analyze(&mut input_reader, &v2(), &ScanOptions::default()).unwrap();

        assert_eq!(result.number_of_unique_commands, 0);
        assert_eq!(result.timing, None);
    }
}
