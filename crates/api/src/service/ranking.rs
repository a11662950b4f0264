use std::cmp::Reverse;
use std::collections::HashMap;

use super::Error;
use crate::db::Measurement;

/// Station code with the greatest number of recorded observations.
///
/// Ties are broken toward the lexicographically smallest code, which keeps
/// repeated calls deterministic independent of row order.
pub fn most_active_station(measurements: &[Measurement]) -> Result<String, Error> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for m in measurements {
        *counts.entry(m.station_code.as_str()).or_default() += 1;
    }

    counts
        .into_iter()
        .max_by_key(|&(code, count)| (count, Reverse(code)))
        .map(|(code, _)| code.to_owned())
        .ok_or(Error::EmptyDataset)
}
