use math::primes_below_parallel;
use tracing::debug;

use crate::ProblemError;

/// PE10: Summation of Primes
/// Find the sum of all the primes below two million.
pub fn solve() -> Result<String, ProblemError> {
    let primes = primes_below_parallel(2_000_000);
    debug!(count = primes.len(), "primes below two million");
    let sum: u64 = primes.iter().map(|&p| p as u64).sum();
    Ok(sum.to_string())
}
