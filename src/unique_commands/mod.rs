use crate::request_response_matcher::Pair;

/// Pairs are equal when both are closed and carry the same command texts.
/// Timestamps are not compared.
pub fn pairs_equal(pair: &Pair, other: &Pair) -> bool {
    match (&pair.end, &other.end) {
        (Some(end), Some(other_end)) => {
            pair.start.command == other.start.command && end.command == other_end.command
        }
        _ => false,
    }
}

/// Collapses every run of consecutive equal pairs into one pair spanning
/// from the first start to the last end of the run.
pub fn get_unique_commands(pairs: &[Pair]) -> Vec<Pair> {
    let mut unique_commands: Vec<Pair> = Vec::new();

    for (index, pair) in pairs.iter().enumerate() {
        let equals_previous = index > 0 && pairs_equal(pair, &pairs[index - 1]);

        if equals_previous {
            if let Some(group) = unique_commands.last_mut() {
                group.end = pair.end.clone();
            }
            continue;
        }

        let equals_next = pairs
            .get(index + 1)
            .map_or(false, |next| pairs_equal(pair, next));

        if equals_next {
            // The end is filled in by the rest of the run
            unique_commands.push(Pair::open(pair.start.clone()));
        } else {
            unique_commands.push(pair.clone());
        }
    }

    unique_commands
}
