use math::even_fibonacci_sum;

use crate::ProblemError;

/// PE2: Even Fibonacci Numbers
/// Sum all even-valued Fibonacci numbers not exceeding 4 million.
pub fn solve() -> Result<String, ProblemError> {
    Ok(even_fibonacci_sum(4_000_000).to_string())
}
