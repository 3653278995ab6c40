use std::io::prelude::*;

use failure::Error;

use crate::render::Renderer;
use crate::result;
use crate::timing_analyzer::format_seconds;

pub struct TerminalRenderer<'a> {
    stream: &'a mut dyn Write,
}

impl<'a> TerminalRenderer<'a> {
    pub fn new(stream: &'a mut dyn Write) -> TerminalRenderer<'a> {
        TerminalRenderer { stream }
    }
}

impl<'a> Renderer for TerminalRenderer<'a> {
    fn render(&mut self, result: result::ProtocolTraceResult) -> Result<(), Error> {
        writeln!(self.stream, "commands.unique:\t{}", result.number_of_unique_commands)?;

        match result.timing {
            Some(timing) => {
                writeln!(self.stream, "time.inside:\t{}", format_seconds(&timing.inside_time))?;
                writeln!(
                    self.stream,
                    "time.inside.avg:\t{}",
                    format_seconds(&timing.per_request_inside_time)
                )?;
                writeln!(self.stream, "time.outside:\t{}", format_seconds(&timing.outside_time))?;
                writeln!(
                    self.stream,
                    "time.outside.avg:\t{}",
                    format_seconds(&timing.per_request_outside_time)
                )?;
            }
            None => {
                warn!("No matching command/response pairs for timing results.");
                writeln!(self.stream, "time:\tno data")?;
            }
        }

        Ok(())
    }
}
