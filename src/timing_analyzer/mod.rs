use chrono::Duration;

use crate::request_response_matcher::Pair;

#[derive(PartialEq, Debug, Clone)]
pub struct TimingResult {
    pub inside_time: Duration,
    pub per_request_inside_time: Duration,
    pub outside_time: Duration,
    pub per_request_outside_time: Duration,
}

pub trait Timing {
    fn duration(&self) -> Duration;
}

impl Timing for Pair {
    fn duration(&self) -> Duration {
        match self.end {
            Some(ref end) => end.timestamp.since_midnight - self.start.timestamp.since_midnight,
            None => Duration::zero(),
        }
    }
}

/// Divides a total by the number of unique commands, rounded to the
/// nearest millisecond.
fn per_request(total: Duration, count: usize) -> Duration {
    let millis = total.num_milliseconds() as f64 / count as f64;
    Duration::milliseconds(millis.round() as i64)
}

/// Computes inside and outside time for a trace.
///
/// `pairs` is the pair list before deduplication; its first and last start
/// bound the whole trace. `unique_commands` contribute the inside time.
/// Returns `None` when there is nothing to average over.
pub fn analyze<T: Timing>(pairs: &[Pair], unique_commands: &[T]) -> Option<TimingResult> {
    let (first, last) = match (pairs.first(), pairs.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return None,
    };

    if unique_commands.is_empty() {
        return None;
    }

    let inside_time = unique_commands
        .iter()
        .fold(Duration::zero(), |total, command| total + command.duration());

    let span = last.start.timestamp.since_midnight - first.start.timestamp.since_midnight;
    let outside_time = span - inside_time;

    Some(TimingResult {
        inside_time,
        per_request_inside_time: per_request(inside_time, unique_commands.len()),
        outside_time,
        per_request_outside_time: per_request(outside_time, unique_commands.len()),
    })
}

/// Formats a duration as seconds with exactly three decimals, e.g. `-1.750`.
pub fn format_seconds(duration: &Duration) -> String {
    let millis = duration.num_milliseconds();
    let sign = if millis < 0 { "-" } else { "" };

    format!("{}{}.{:03}", sign, millis.abs() / 1000, millis.abs() % 1000)
}
