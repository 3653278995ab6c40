use chrono::Duration;

pub const TIMESTAMP_LENGTH: usize = 12;

/// A `HH:MM:SS.mmm` token as it appeared in the log, together with its
/// offset from midnight.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Timestamp {
    pub text: String,
    pub since_midnight: Duration,
}

impl Timestamp {
    pub fn parse(text: &str) -> Result<Timestamp, &'static str> {
        if text.len() != TIMESTAMP_LENGTH {
            return Err("Uncomprehensible timestamp");
        }

        let parts: Vec<&str> = text.split(':').collect();
        if parts.len() != 3 {
            return Err("Uncomprehensible timestamp");
        }

        let hours: i64 = match parts[0].parse() {
            Ok(hours) => hours,
            Err(_) => return Err("Uncomprehensible timestamp"),
        };

        let minutes: i64 = match parts[1].parse() {
            Ok(minutes) => minutes,
            Err(_) => return Err("Uncomprehensible timestamp"),
        };

        // Seconds carry a fixed three digit fraction, e.g. "05.250"
        let (seconds, millis) = match parts[2].find('.') {
            Some(dot) => (&parts[2][..dot], &parts[2][dot + 1..]),
            None => return Err("Uncomprehensible timestamp"),
        };

        let seconds: i64 = match seconds.parse() {
            Ok(seconds) => seconds,
            Err(_) => return Err("Uncomprehensible timestamp"),
        };

        let millis: i64 = match millis.parse() {
            Ok(millis) if millis < 1000 => millis,
            _ => return Err("Uncomprehensible timestamp"),
        };

        Ok(Timestamp {
            text: text.to_string(),
            since_midnight: Duration::hours(hours)
                + Duration::minutes(minutes)
                + Duration::seconds(seconds)
                + Duration::milliseconds(millis),
        })
    }
}

/// One timestamped command fragment from the trace.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Record {
    pub command: String,
    pub timestamp: Timestamp,
}

impl Record {
    pub fn new(command: &str, timestamp: Timestamp) -> Record {
        Record {
            command: command.to_string(),
            timestamp,
        }
    }
}
