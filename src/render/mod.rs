use failure::Error;

use crate::result;

pub mod json;
pub mod terminal;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<OutputFormat> {
        match name {
            "terminal" => Some(OutputFormat::Terminal),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

pub trait Renderer {
    fn render(&mut self, result: result::ProtocolTraceResult) -> Result<(), Error>;
}
