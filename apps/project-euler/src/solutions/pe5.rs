use math::{MathError, lcm};

use crate::ProblemError;

/// PE5: Smallest Multiple
/// Find the smallest positive number evenly divisible by all numbers from 1 to 20.
/// This is the LCM of 1..20.
pub fn solve() -> Result<String, ProblemError> {
    let result = (1u64..=20)
        .try_fold(1u64, |acc, k| u64::try_from(lcm(acc, k)).ok())
        .ok_or(MathError::Overflow { operation: "lcm" })?;
    Ok(result.to_string())
}
