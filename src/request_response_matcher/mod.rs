use crate::log_parser::log_events::Record;
use crate::protocol::Identifiers;

/// A command record and, once it arrived, the response that closed it.
#[derive(Clone, Debug, PartialEq)]
pub struct Pair {
    pub start: Record,
    pub end: Option<Record>,
}

impl Pair {
    pub fn open(start: Record) -> Pair {
        Pair { start, end: None }
    }

    #[cfg(test)]
    pub fn closed(start: Record, end: Record) -> Pair {
        Pair {
            start,
            end: Some(end),
        }
    }
}

/// Assembles pairs from records arriving in file order.
///
/// A response closes the most recently opened pair that is still waiting
/// for one. Responses arriving while no pair is open are dropped.
pub struct PairMatcher {
    identifiers: Identifiers,
    pairs: Vec<Pair>,
    open_pairs: Vec<usize>,
    dropped_responses: usize,
}

impl PairMatcher {
    pub fn new(identifiers: Identifiers) -> PairMatcher {
        PairMatcher {
            identifiers,
            pairs: Vec::new(),
            open_pairs: Vec::new(),
            dropped_responses: 0,
        }
    }

    pub fn add(&mut self, record: Record) {
        if record.command.contains(&self.identifiers.command_start) {
            self.open_pairs.push(self.pairs.len());
            self.pairs.push(Pair::open(record));
        } else if record.command.contains(&self.identifiers.response) {
            match self.open_pairs.pop() {
                Some(index) => self.pairs[index].end = Some(record),
                None => {
                    self.dropped_responses += 1;
                    debug!(
                        "Dropped response without open command at {}: {}",
                        record.timestamp.text,
                        record.command.trim_end()
                    );
                }
            }
        }
    }

    pub fn dropped_responses(&self) -> usize {
        self.dropped_responses
    }

    pub fn into_pairs(self) -> Vec<Pair> {
        self.pairs
    }
}
