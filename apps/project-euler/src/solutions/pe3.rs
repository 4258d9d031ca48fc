use math::prime_factors;
use tracing::debug;

use crate::ProblemError;

/// PE3: Largest Prime Factor
/// Find the largest prime factor of 600851475143.
pub fn solve() -> Result<String, ProblemError> {
    let factors = prime_factors(600851475143);
    debug!(?factors, "prime factors");
    factors
        .last()
        .map(|p| p.to_string())
        .ok_or(ProblemError::NoSolution(3))
}
