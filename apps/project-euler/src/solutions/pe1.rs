use math::{SeriesParameters, sum_of_either_multiple};
use tracing::debug;

use crate::ProblemError;

/// PE1: Multiples of 3 or 5
/// Sum all the multiples of 3 or 5 below 1000.
pub fn solve() -> Result<String, ProblemError> {
    for step in [3, 5, 15] {
        let series = SeriesParameters::multiples_below(step, 1000)?;
        let sum = series.sum()?;
        debug!(step, count = series.count, %sum, "multiples below 1000");
    }
    Ok(sum_of_either_multiple(3, 5, 1000)?.to_string())
}
