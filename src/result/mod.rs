use crate::timing_analyzer::TimingResult;

#[derive(PartialEq, Debug, Clone)]
pub struct ProtocolTraceResult {
    pub number_of_unique_commands: usize,
    pub timing: Option<TimingResult>,
}
