use std::fs::File;
use std::io::{self, Read};

use failure::{Error, ResultExt};
use flate2::read::GzDecoder;

/// Opens the trace to analyze. `-` reads stdin, files ending in `.gz` are
/// decompressed while reading.
pub fn open(filename: &str) -> Result<Box<dyn Read>, Error> {
    if filename == "-" {
        return Ok(Box::new(io::stdin()));
    }

    let file = File::open(filename).with_context(|_| format!("Could not open {}", filename))?;

    if filename.ends_with(".gz") {
        debug!("Reading {} as gzip", filename);
        Ok(Box::new(GzDecoder::new(file)))
    } else {
        Ok(Box::new(file))
    }
}
