use math::nth_prime;

use crate::ProblemError;

/// PE7: 10001st Prime
/// Find the 10001st prime number.
pub fn solve() -> Result<String, ProblemError> {
    nth_prime(10001)
        .map(|p| p.to_string())
        .ok_or(ProblemError::NoSolution(7))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve() {
        assert_eq!(solve().unwrap(), "104743");
    }
}
