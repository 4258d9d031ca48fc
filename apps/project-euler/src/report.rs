use std::fmt;

use math::{
    MathError, count_multiples_below, count_of_either_multiple, lcm, sum_multiples_below,
    sum_of_either_multiple,
};

/// Count and sum of the multiples of a single step below the bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepSummary {
    pub step: u64,
    pub count: u64,
    pub sum: u128,
}

impl StepSummary {
    fn compute(step: u64, bound: u64) -> Result<Self, MathError> {
        Ok(StepSummary {
            step,
            count: count_multiples_below(step, bound)?,
            sum: sum_multiples_below(step, bound)?,
        })
    }
}

/// Breakdown of the inclusion-exclusion sum for two steps below a bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MultiplesReport {
    pub bound: u64,
    pub first: StepSummary,
    pub second: StepSummary,
    /// Least common multiple of the two steps; `None` when it exceeds `u64`.
    pub overlap: Option<StepSummary>,
    pub count: u64,
    pub total: u128,
}

impl MultiplesReport {
    pub fn compute(step_a: u64, step_b: u64, bound: u64) -> Result<Self, MathError> {
        let first = StepSummary::compute(step_a, bound)?;
        let second = StepSummary::compute(step_b, bound)?;
        let overlap = match u64::try_from(lcm(step_a, step_b)) {
            Ok(step) => Some(StepSummary::compute(step, bound)?),
            Err(_) => None,
        };
        Ok(MultiplesReport {
            bound,
            first,
            second,
            overlap,
            count: count_of_either_multiple(step_a, step_b, bound)?,
            total: sum_of_either_multiple(step_a, step_b, bound)?,
        })
    }
}

impl fmt::Display for StepSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} multiples of {}, sum {}", self.count, self.step, self.sum)
    }
}

impl fmt::Display for MultiplesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Below {}:", self.bound)?;
        writeln!(f, "  {}", self.first)?;
        writeln!(f, "  {}", self.second)?;
        match &self.overlap {
            Some(overlap) => writeln!(f, "  overlap: {}", overlap)?,
            None => writeln!(f, "  overlap: none")?,
        }
        write!(
            f,
            "The sum of the {} multiples of {} or {} is: {}",
            self.count, self.first.step, self.second.step, self.total
        )
    }
}
