use std::io::prelude::*;

use failure::Error;
use serde::Serialize;

use crate::render::Renderer;
use crate::result;
use crate::timing_analyzer::format_seconds;

// Times are strings so they always keep three decimals
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonResult {
    number_of_unique_commands: usize,
    inside_time: Option<String>,
    per_request_inside_time: Option<String>,
    outside_time: Option<String>,
    per_request_outside_time: Option<String>,
}

impl From<result::ProtocolTraceResult> for JsonResult {
    fn from(result: result::ProtocolTraceResult) -> JsonResult {
        let timing = result.timing.as_ref();

        JsonResult {
            number_of_unique_commands: result.number_of_unique_commands,
            inside_time: timing.map(|t| format_seconds(&t.inside_time)),
            per_request_inside_time: timing.map(|t| format_seconds(&t.per_request_inside_time)),
            outside_time: timing.map(|t| format_seconds(&t.outside_time)),
            per_request_outside_time: timing.map(|t| format_seconds(&t.per_request_outside_time)),
        }
    }
}

pub struct JsonRenderer<'a> {
    stream: &'a mut dyn Write,
}

impl<'a> JsonRenderer<'a> {
    pub fn new(stream: &'a mut dyn Write) -> JsonRenderer<'a> {
        JsonRenderer { stream }
    }
}

impl<'a> Renderer for JsonRenderer<'a> {
    fn render(&mut self, result: result::ProtocolTraceResult) -> Result<(), Error> {
        if result.timing.is_none() {
            warn!("No matching command/response pairs for timing results.");
        }

        serde_json::to_writer_pretty(&mut *self.stream, &JsonResult::from(result))?;
        writeln!(self.stream)?;

        Ok(())
    }
}
