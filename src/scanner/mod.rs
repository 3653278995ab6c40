//! Streaming scanner for timestamped traces.
//!
//! The input is read in fixed-size chunks. Bytes are collected in a
//! carry-over buffer and handed to the record extractor only up to the start
//! of the last timestamp seen in the latest chunk. Everything from that
//! timestamp on stays buffered, because the record it starts may continue in
//! the next chunk. A chunk without any timestamp never triggers a flush, so a
//! token or record body spread over several chunks is kept whole.

use std::io::{self, Read};
use std::mem;

use failure::{err_msg, Error};

use crate::log_parser;
use crate::log_parser::log_events::Record;

pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// What happens to the carry-over buffer once the input is exhausted.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum EndOfStream {
    /// Extract the remaining records. Results don't depend on the chunk size.
    Drain,
    /// Drop the remaining bytes, including the last timestamped record.
    Discard,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ScanOptions {
    pub chunk_size: usize,
    pub end_of_stream: EndOfStream,
}

impl Default for ScanOptions {
    fn default() -> ScanOptions {
        ScanOptions {
            chunk_size: DEFAULT_CHUNK_SIZE,
            end_of_stream: EndOfStream::Drain,
        }
    }
}

/// Per-run scanner state.
pub struct ChunkScanner {
    pending: Vec<u8>,
    end_of_stream: EndOfStream,
}

impl ChunkScanner {
    pub fn new(end_of_stream: EndOfStream) -> ChunkScanner {
        ChunkScanner {
            pending: Vec::new(),
            end_of_stream,
        }
    }

    /// Buffers `chunk` and returns the records that are known to be complete.
    pub fn push_chunk(&mut self, chunk: &[u8]) -> Vec<Record> {
        self.pending.extend_from_slice(chunk);

        // Only the fresh chunk is searched, earlier bytes were searched before
        let last_timestamp = match log_parser::locate_timestamps(chunk).last() {
            Some(&offset) => offset,
            None => return Vec::new(),
        };

        let cut = self.pending.len() - chunk.len() + last_timestamp;
        let remainder = self.pending.split_off(cut);
        let complete = mem::replace(&mut self.pending, remainder);

        flush(&complete)
    }

    /// Number of bytes currently held back.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn finish(self) -> Vec<Record> {
        match self.end_of_stream {
            EndOfStream::Drain => flush(&self.pending),
            EndOfStream::Discard => {
                if !self.pending.is_empty() {
                    debug!("Discarded {} trailing bytes", self.pending.len());
                }
                Vec::new()
            }
        }
    }
}

fn flush(bytes: &[u8]) -> Vec<Record> {
    if bytes.is_empty() {
        return Vec::new();
    }

    // Cuts always land on an ASCII digit, so no character is split here
    let text = String::from_utf8_lossy(bytes);
    let records = log_parser::extract_records(&text);

    debug!("Flushed {} bytes, {} records", bytes.len(), records.len());

    records
}

/// Streams `reader` through a `ChunkScanner`, calling `on_record` for every
/// record in file order.
pub fn scan<R, F>(reader: &mut R, options: &ScanOptions, mut on_record: F) -> Result<(), Error>
where
    R: Read + ?Sized,
    F: FnMut(Record),
{
    if options.chunk_size == 0 {
        return Err(err_msg("Chunk size must be a positive number"));
    }

    let mut scanner = ChunkScanner::new(options.end_of_stream);
    let mut buffer = vec![0u8; options.chunk_size];

    loop {
        let read_size = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(read_size) => read_size,
            Err(ref err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        };

        for record in scanner.push_chunk(&buffer[..read_size]) {
            on_record(record);
        }
    }

    debug!("End of stream, {} bytes pending", scanner.pending_len());

    for record in scanner.finish() {
        on_record(record);
    }

    Ok(())
}
