use math::{MathError, sum_arithmetic_series, sum_of_squares};
use tracing::debug;

use crate::ProblemError;

/// PE6: Sum Square Difference
/// Find the difference between the square of the sum and the sum of squares
/// for the first 100 natural numbers.
pub fn solve() -> Result<String, ProblemError> {
    Ok(sum_square_difference(100)?.to_string())
}

fn sum_square_difference(n: u64) -> Result<u128, ProblemError> {
    let sum = sum_arithmetic_series(1, 1, n)?.unsigned_abs();
    let squares = sum_of_squares(n)?;
    let square_of_sum = sum
        .checked_mul(sum)
        .ok_or(MathError::Overflow { operation: "square of sum" })?;
    debug!(%square_of_sum, sum_of_squares = %squares, "first {} natural numbers", n);
    // (1 + ... + n)^2 >= 1^2 + ... + n^2
    Ok(square_of_sum - squares)
}
