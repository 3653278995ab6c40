#[macro_use]
extern crate clap;
#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

use std::io;
use std::process;

use failure::Error;

mod analyzer;
mod args;
mod input;
mod log_parser;
mod protocol;
mod render;
mod request_response_matcher;
mod result;
mod scanner;
mod timing_analyzer;
mod unique_commands;

use crate::render::Renderer;

pub fn run(args: &args::ProtocolTraceAnalyzerArgs) -> Result<result::ProtocolTraceResult, Error> {
    info!(
        "Analyzing {} as protocol {} (chunk size {})",
        args.filename, args.version, args.scan_options.chunk_size
    );

    let mut reader = input::open(&args.filename)?;

    analyzer::analyze(&mut reader, &args.identifiers, &args.scan_options)
}

fn render_result(args: &args::ProtocolTraceAnalyzerArgs, result: result::ProtocolTraceResult) -> Result<(), Error> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match args.format {
        render::OutputFormat::Terminal => render::terminal::TerminalRenderer::new(&mut handle).render(result),
        render::OutputFormat::Json => render::json::JsonRenderer::new(&mut handle).render(result),
    }
}

fn main() {
    env_logger::init();

    let args = match args::parse_args(std::env::args()) {
        Ok(args) => args,
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    };

    let result = match run(&args) {
        Ok(result) => result,
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    };

    if args.quiet {
        return;
    }

    if let Err(err) = render_result(&args, result) {
        error!("{}", err);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_args(filename: &str, version: &str) -> args::ProtocolTraceAnalyzerArgs {
        args::parse_args(vec![
            String::from("protocol_trace_analyzer"),
            String::from(filename),
            String::from(version),
        ])
        .unwrap()
    }

    #[test]
    fn test_run() {
        let result = run(&get_args("src/test/trace-1.log", "v2")).unwrap();

        assert_eq!(result.number_of_unique_commands, 3);
    }

    #[test]
    fn test_run_gzip() {
        let plain = run(&get_args("src/test/trace-1.log", "v2")).unwrap();
        let compressed = run(&get_args("src/test/trace-1.log.gz", "v2")).unwrap();

        assert_eq!(plain, compressed);
    }

    #[test]
    fn test_run_missing_file() {
        let result = run(&get_args("src/test/missing.log", "v2"));

        assert!(result.is_err());
    }

    #[test]
    fn test_run_repeated_command() {
        let result = run(&get_args("src/test/scenario.log", "v1")).unwrap();
        let timing = result.timing.unwrap();

        assert_eq!(result.number_of_unique_commands, 1);
        assert_eq!(timing_analyzer::format_seconds(&timing.inside_time), "3.000");
    }
}
