use clap::{App, Arg};
use failure::{err_msg, Error};

use crate::protocol;
use crate::render::OutputFormat;
use crate::scanner::{EndOfStream, ScanOptions};

#[derive(PartialEq, Debug)]
pub struct ProtocolTraceAnalyzerArgs {
    pub filename: String,
    pub version: String,
    pub identifiers: protocol::Identifiers,
    pub scan_options: ScanOptions,
    pub format: OutputFormat,
    pub quiet: bool,
}

pub fn parse_args<T>(args: T) -> Result<ProtocolTraceAnalyzerArgs, Error>
where
    T: IntoIterator<Item = String>,
{
    let versions_help = format!("Protocol version, one of: {}", protocol::known_versions().join(", "));

    let app = App::new("Protocol Trace Analyzer")
        .author(crate_authors!())
        .version(crate_version!())
        .after_help(crate_description!())
        .arg(
            Arg::with_name("filename")
                .index(1)
                .value_name("FILE")
                .required(true)
                .help("Trace log to analyze, '-' for stdin, *.gz is decompressed")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("version")
                .index(2)
                .value_name("VERSION")
                .required(true)
                .help(&versions_help)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("start-identifier")
                .value_name("TEXT")
                .long("start-identifier")
                .help("Override the text that marks a command")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("response-identifier")
                .value_name("TEXT")
                .long("response-identifier")
                .help("Override the text that marks a response")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("chunk-size")
                .value_name("BYTES")
                .short("c")
                .long("chunk-size")
                .help("Number of bytes read from the trace at a time")
                .takes_value(true)
                .default_value("1000"),
        )
        .arg(Arg::with_name("discard-tail").long("discard-tail").help(
            "Drop data after the last complete chunk flush instead of analyzing it",
        ))
        .arg(
            Arg::with_name("format")
                .value_name("FORMAT")
                .short("f")
                .long("format")
                .possible_values(&["terminal", "json"])
                .takes_value(true)
                .default_value("terminal"),
        )
        .arg(Arg::with_name("quiet").short("q").long("quiet").help(
            "Don't output results to stdout",
        ))
        .get_matches_from(args);

    let filename = app.value_of("filename").unwrap_or("-").to_string();
    let version = app.value_of("version").unwrap_or("").to_string();

    // Unknown versions must be reported before the trace is opened
    let mut identifiers = protocol::lookup(&version)?;

    if let Some(value) = app.value_of("start-identifier") {
        if value.is_empty() {
            return Err(err_msg("--start-identifier must not be empty"));
        }
        identifiers.command_start = String::from(value);
    }

    if let Some(value) = app.value_of("response-identifier") {
        if value.is_empty() {
            return Err(err_msg("--response-identifier must not be empty"));
        }
        identifiers.response = String::from(value);
    }

    let chunk_size: usize = match app.value_of("chunk-size") {
        Some(value) => match value.parse() {
            Ok(0) => return Err(err_msg("--chunk-size must be a positive number (got 0)")),
            Ok(value) => value,
            Err(err) => {
                return Err(err_msg(format!(
                    "--chunk-size must be a positive number ({})",
                    err
                )))
            }
        },
        None => crate::scanner::DEFAULT_CHUNK_SIZE,
    };

    let end_of_stream = if app.is_present("discard-tail") {
        EndOfStream::Discard
    } else {
        EndOfStream::Drain
    };

    let format = app
        .value_of("format")
        .and_then(OutputFormat::from_name)
        .unwrap_or(OutputFormat::Terminal);

    let quiet = app.is_present("quiet");

    Ok(ProtocolTraceAnalyzerArgs {
        filename,
        version,
        identifiers,
        scan_options: ScanOptions {
            chunk_size,
            end_of_stream,
        },
        format,
        quiet,
    })
}
