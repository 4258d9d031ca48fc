//! Closed-form sums of arithmetic series and of multiples below a bound.
//!
//! Everything here is exact integer arithmetic. Sums of multiples of a `u64`
//! step below a `u64` bound always fit in `u128`, and the intermediate
//! products are carried in checked `i128`.

use rayon::prelude::*;
use tracing::trace;

use crate::divisor::lcm;
use crate::error::MathError;

/// The arithmetic progression `a, a + d, ..., a + (n - 1)d`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeriesParameters {
    pub first: i128,
    pub difference: i128,
    pub count: u64,
}

impl SeriesParameters {
    /// Parameters of the positive multiples of `step` strictly below `bound`.
    ///
    /// # Example
    ///
    /// ```
    /// use math::series::SeriesParameters;
    ///
    /// let p = SeriesParameters::multiples_below(3, 1000).unwrap();
    /// assert_eq!((p.first, p.difference, p.count), (3, 3, 333));
    /// assert_eq!(p.sum().unwrap(), 166833);
    /// ```
    pub fn multiples_below(step: u64, bound: u64) -> Result<Self, MathError> {
        let count = count_multiples_below(step, bound)?;
        trace!(step, bound, count, "derived series parameters");
        Ok(SeriesParameters {
            first: i128::from(step),
            difference: i128::from(step),
            count,
        })
    }

    pub fn sum(&self) -> Result<i128, MathError> {
        sum_arithmetic_series(self.first, self.difference, self.count)
    }
}

/// Number of positive multiples of `step` strictly less than `bound`.
///
/// # Example
///
/// ```
/// use math::series::count_multiples_below;
///
/// assert_eq!(count_multiples_below(3, 1000), Ok(333));
/// assert_eq!(count_multiples_below(5, 5), Ok(0));
/// assert!(count_multiples_below(0, 10).is_err());
/// ```
pub fn count_multiples_below(step: u64, bound: u64) -> Result<u64, MathError> {
    if step == 0 {
        return Err(MathError::zero("step"));
    }
    if bound == 0 {
        return Err(MathError::zero("bound"));
    }
    Ok((bound - 1) / step)
}

/// Sum of the first `n` terms of the arithmetic sequence starting at `a`
/// with common difference `d`: `n * (2a + (n - 1)d) / 2`.
///
/// The halving is applied to whichever factor is even, so the division is
/// always exact. Both factors are bounded by the result, so the only
/// `Overflow` is a result that does not fit in `i128`.
///
/// # Example
///
/// ```
/// use math::series::sum_arithmetic_series;
///
/// assert_eq!(sum_arithmetic_series(1, 1, 100), Ok(5050));
/// assert_eq!(sum_arithmetic_series(10, -3, 4), Ok(22));
/// assert_eq!(sum_arithmetic_series(7, 0, 6), Ok(42));
/// ```
pub fn sum_arithmetic_series(a: i128, d: i128, n: u64) -> Result<i128, MathError> {
    let overflow = || MathError::overflow("sum_arithmetic_series");
    if n == 0 {
        return Ok(0);
    }

    let (count, factor) = if n % 2 == 0 {
        // n/2 * (2a + (n-1)d), with 2a + (n-1)d = y + (y + d) and y = a + (n-2)/2 * d
        let y = nth_term(a, d, (n - 2) / 2).ok_or_else(overflow)?;
        let ends = y
            .checked_add(d)
            .and_then(|z| y.checked_add(z))
            .ok_or_else(overflow)?;
        (i128::from(n / 2), ends)
    } else {
        // n * (a + (n-1)/2 * d)
        let middle = nth_term(a, d, (n - 1) / 2).ok_or_else(overflow)?;
        (i128::from(n), middle)
    };

    count.checked_mul(factor).ok_or_else(overflow)
}

/// `a + k * d` without forming `k * d` as a signed value.
fn nth_term(a: i128, d: i128, k: u64) -> Option<i128> {
    let offset = u128::from(k).checked_mul(d.unsigned_abs())?;
    if d < 0 {
        a.checked_sub_unsigned(offset)
    } else {
        a.checked_add_unsigned(offset)
    }
}

/// Sum of the squares `1^2 + 2^2 + ... + n^2`, as `n(n + 1)(2n + 1) / 6`.
///
/// The 2 and the 3 are divided out of the factors before multiplying.
///
/// # Example
///
/// ```
/// use math::series::sum_of_squares;
///
/// assert_eq!(sum_of_squares(10), Ok(385));
/// ```
pub fn sum_of_squares(n: u64) -> Result<u128, MathError> {
    let mut factors = [u128::from(n), u128::from(n) + 1, 2 * u128::from(n) + 1];
    for divisor in [2, 3] {
        if let Some(f) = factors.iter_mut().find(|f| **f % divisor == 0) {
            *f /= divisor;
        }
    }
    factors
        .iter()
        .try_fold(1u128, |acc, &f| acc.checked_mul(f))
        .ok_or(MathError::overflow("sum_of_squares"))
}

/// Sum of all positive multiples of `step` strictly less than `bound`, in O(1).
///
/// # Example
///
/// ```
/// use math::series::sum_multiples_below;
///
/// assert_eq!(sum_multiples_below(3, 1000), Ok(166833));
/// assert_eq!(sum_multiples_below(5, 1000), Ok(99500));
/// ```
pub fn sum_multiples_below(step: u64, bound: u64) -> Result<u128, MathError> {
    let sum = SeriesParameters::multiples_below(step, bound)?.sum()?;
    u128::try_from(sum).map_err(|_| MathError::overflow("sum_multiples_below"))
}

/// Sum of the integers below `bound` that are multiples of `step_a` or
/// `step_b`, by inclusion-exclusion over the least common multiple.
///
/// # Example
///
/// ```
/// use math::series::sum_of_either_multiple;
///
/// assert_eq!(sum_of_either_multiple(3, 5, 1000), Ok(233168));
/// // 4 and 6 share 12, 24, ... which must only be counted once.
/// assert_eq!(sum_of_either_multiple(4, 6, 25), Ok(4 + 6 + 8 + 12 + 16 + 18 + 20 + 24));
/// ```
pub fn sum_of_either_multiple(step_a: u64, step_b: u64, bound: u64) -> Result<u128, MathError> {
    let sum_a = sum_multiples_below(step_a, bound)?;
    let sum_b = sum_multiples_below(step_b, bound)?;
    let common = match u64::try_from(lcm(step_a, step_b)) {
        Ok(overlap) => sum_multiples_below(overlap, bound)?,
        // an overlap step past u64::MAX has no multiples below any bound
        Err(_) => 0,
    };
    // common <= sum_b, and the union never exceeds 1 + 2 + ... + (bound - 1)
    Ok(sum_a + (sum_b - common))
}

/// Number of integers below `bound` that are multiples of `step_a` or `step_b`.
///
/// # Example
///
/// ```
/// use math::series::count_of_either_multiple;
///
/// assert_eq!(count_of_either_multiple(3, 5, 16), Ok(7)); // 3 5 6 9 10 12 15
/// ```
pub fn count_of_either_multiple(step_a: u64, step_b: u64, bound: u64) -> Result<u64, MathError> {
    let count_a = count_multiples_below(step_a, bound)?;
    let count_b = count_multiples_below(step_b, bound)?;
    let common = match u64::try_from(lcm(step_a, step_b)) {
        Ok(overlap) => count_multiples_below(overlap, bound)?,
        Err(_) => 0,
    };
    Ok(count_a + (count_b - common))
}

/// Sum of the multiples of `step` below `bound` by walking every multiple.
///
/// O(bound / step). Kept as a reference for the closed form.
pub fn sum_multiples_below_enumerated(step: u64, bound: u64) -> Result<u128, MathError> {
    count_multiples_below(step, bound)?;
    Ok(std::iter::successors(Some(step), |&m| m.checked_add(step))
        .take_while(|&m| m < bound)
        .map(u128::from)
        .sum())
}

/// Parallel variant of [`sum_multiples_below_enumerated`].
pub fn sum_multiples_below_parallel(step: u64, bound: u64) -> Result<u128, MathError> {
    let count = count_multiples_below(step, bound)?;
    let step = u128::from(step);
    Ok((1..=count)
        .into_par_iter()
        .map(|k| u128::from(k) * step)
        .sum())
}

/// Sum of the integers below `bound` divisible by `step_a` or `step_b`,
/// testing every candidate. O(bound).
pub fn sum_of_either_multiple_enumerated(
    step_a: u64,
    step_b: u64,
    bound: u64,
) -> Result<u128, MathError> {
    count_multiples_below(step_a, bound)?;
    count_multiples_below(step_b, bound)?;
    Ok((1..bound)
        .filter(|i| i % step_a == 0 || i % step_b == 0)
        .map(u128::from)
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_count_multiples_below() {
        assert_eq!(count_multiples_below(3, 1000), Ok(333));
        assert_eq!(count_multiples_below(5, 1000), Ok(199));
        assert_eq!(count_multiples_below(15, 1000), Ok(66));
        // bound itself is excluded
        assert_eq!(count_multiples_below(10, 100), Ok(9));
    }

    #[test]
    fn test_count_is_zero_when_step_reaches_bound() {
        assert_eq!(count_multiples_below(7, 7), Ok(0));
        assert_eq!(count_multiples_below(8, 7), Ok(0));
        assert_eq!(count_multiples_below(u64::MAX, 1), Ok(0));
    }

    #[test]
    fn test_bound_of_one_has_no_multiples() {
        for step in [1, 2, 3, 1000, u64::MAX] {
            assert_eq!(count_multiples_below(step, 1), Ok(0));
            assert_eq!(sum_multiples_below(step, 1), Ok(0));
        }
    }

    #[test]
    fn test_zero_inputs_are_rejected() {
        assert_eq!(count_multiples_below(0, 10), Err(MathError::zero("step")));
        assert_eq!(count_multiples_below(3, 0), Err(MathError::zero("bound")));
        assert_eq!(sum_multiples_below(0, 10), Err(MathError::zero("step")));
        assert_eq!(sum_of_either_multiple(3, 0, 10), Err(MathError::zero("step")));
        assert_eq!(count_of_either_multiple(3, 5, 0), Err(MathError::zero("bound")));
        assert!(sum_multiples_below_enumerated(0, 10).is_err());
        assert!(sum_multiples_below_parallel(0, 10).is_err());
        assert!(sum_of_either_multiple_enumerated(0, 5, 10).is_err());
    }

    #[test]
    fn test_sum_arithmetic_series() {
        assert_eq!(sum_arithmetic_series(1, 1, 50), Ok(1275));
        assert_eq!(sum_arithmetic_series(1, 1, 100), Ok(5050));
        assert_eq!(sum_arithmetic_series(3, 3, 333), Ok(166833));
        assert_eq!(sum_arithmetic_series(5, 5, 199), Ok(99500));
        assert_eq!(sum_arithmetic_series(15, 15, 66), Ok(33165));
        assert_eq!(sum_arithmetic_series(-4, 2, 5), Ok(0));
        assert_eq!(sum_arithmetic_series(42, 7, 0), Ok(0));
    }

    #[test]
    fn test_sum_arithmetic_series_overflow() {
        assert_eq!(
            sum_arithmetic_series(i128::MAX, 1, 2),
            Err(MathError::overflow("sum_arithmetic_series"))
        );
        assert_eq!(
            sum_arithmetic_series(1, i128::MAX, 3),
            Err(MathError::overflow("sum_arithmetic_series"))
        );
        assert_eq!(
            sum_arithmetic_series(i128::MAX / 2, 0, 3),
            Err(MathError::overflow("sum_arithmetic_series"))
        );
    }

    #[test]
    fn test_sum_arithmetic_series_exact_near_i128_limits() {
        // 2a overflows on its own but 2a - 1 is exactly i128::MAX
        assert_eq!(sum_arithmetic_series(i128::MAX / 2 + 1, -1, 2), Ok(i128::MAX));
        assert_eq!(sum_arithmetic_series(i128::MIN, 0, 1), Ok(i128::MIN));
        assert_eq!(sum_arithmetic_series(i128::MAX, -i128::MAX, 2), Ok(i128::MAX));
        // MIN + (MIN + MAX) is one below i128::MIN
        assert_eq!(
            sum_arithmetic_series(i128::MIN, i128::MAX, 2),
            Err(MathError::overflow("sum_arithmetic_series"))
        );
        // symmetric terms whose span (n-1)d alone exceeds i128
        let a = -3 * (1i128 << 125);
        assert_eq!(sum_arithmetic_series(a, 1i128 << 126, 4), Ok(0));
        // MIN, -1, MAX - 1
        assert_eq!(sum_arithmetic_series(i128::MIN, i128::MAX, 3), Ok(-3));
    }

    #[test]
    fn test_sum_of_squares() {
        assert_eq!(sum_of_squares(0), Ok(0));
        assert_eq!(sum_of_squares(1), Ok(1));
        assert_eq!(sum_of_squares(100), Ok(338350));
        let brute: u128 = (1..=1_000u128).map(|k| k * k).sum();
        assert_eq!(sum_of_squares(1_000), Ok(brute));
        assert_eq!(sum_of_squares(u64::MAX), Err(MathError::overflow("sum_of_squares")));
    }

    #[test]
    fn test_sum_multiples_below() {
        assert_eq!(sum_multiples_below(3, 1000), Ok(166833));
        assert_eq!(sum_multiples_below(5, 1000), Ok(99500));
        assert_eq!(sum_multiples_below(15, 1000), Ok(33165));
        assert_eq!(sum_multiples_below(3, 10), Ok(18));
    }

    #[test]
    fn test_sum_multiples_below_at_u64_extremes() {
        let n = u128::from(u64::MAX - 1);
        assert_eq!(sum_multiples_below(1, u64::MAX), Ok(n * (n + 1) / 2));
        assert_eq!(sum_multiples_below(u64::MAX - 1, u64::MAX), Ok(n));
    }

    #[test]
    fn test_sum_of_either_multiple() {
        assert_eq!(sum_of_either_multiple(3, 5, 10), Ok(23));
        assert_eq!(sum_of_either_multiple(3, 5, 1000), Ok(233168));
        assert_eq!(sum_of_either_multiple(5, 3, 1000), Ok(233168));
        // identical steps collapse to a single series
        assert_eq!(sum_of_either_multiple(7, 7, 100), sum_multiples_below(7, 100));
        // one step divides the other
        assert_eq!(sum_of_either_multiple(2, 4, 100), sum_multiples_below(2, 100));
    }

    #[test]
    fn test_sum_of_either_multiple_non_coprime() {
        // the product 4 * 6 = 24 would subtract too little; lcm is 12
        assert_eq!(
            sum_of_either_multiple(4, 6, 100),
            sum_of_either_multiple_enumerated(4, 6, 100)
        );
        assert_eq!(sum_of_either_multiple(4, 6, 100), Ok(1200 + 816 - 432));
    }

    #[test]
    fn test_sum_of_either_multiple_huge_lcm() {
        let a = u64::MAX;
        let b = u64::MAX - 1;
        assert_eq!(
            sum_of_either_multiple(a, b, u64::MAX),
            Ok(u128::from(u64::MAX - 1))
        );
    }

    #[test]
    fn test_count_of_either_multiple() {
        assert_eq!(count_of_either_multiple(3, 5, 1000), Ok(333 + 199 - 66));
        assert_eq!(count_of_either_multiple(4, 6, 25), Ok(8));
        assert_eq!(count_of_either_multiple(1, 1, u64::MAX), Ok(u64::MAX - 1));
    }

    #[test]
    fn test_enumerations_match_known_answers() {
        assert_eq!(sum_multiples_below_enumerated(3, 1000), Ok(166833));
        assert_eq!(sum_multiples_below_parallel(5, 1000), Ok(99500));
        assert_eq!(sum_of_either_multiple_enumerated(3, 5, 1000), Ok(233168));
    }

    #[test]
    fn test_idempotent() {
        let first = sum_of_either_multiple(6, 10, 123_456);
        let second = sum_of_either_multiple(6, 10, 123_456);
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn closed_form_matches_enumeration(step in 1u64..=1_000, bound in 1u64..=1_000_000) {
            let expected = sum_multiples_below_enumerated(step, bound).unwrap();
            prop_assert_eq!(sum_multiples_below(step, bound).unwrap(), expected);
            prop_assert_eq!(sum_multiples_below_parallel(step, bound).unwrap(), expected);
        }

        #[test]
        fn inclusion_exclusion_matches_filter(
            step_a in 1u64..=60,
            step_b in 1u64..=60,
            bound in 1u64..=20_000,
        ) {
            prop_assert_eq!(
                sum_of_either_multiple(step_a, step_b, bound).unwrap(),
                sum_of_either_multiple_enumerated(step_a, step_b, bound).unwrap()
            );
            let count = (1..bound).filter(|i| i % step_a == 0 || i % step_b == 0).count() as u64;
            prop_assert_eq!(count_of_either_multiple(step_a, step_b, bound).unwrap(), count);
        }

        #[test]
        fn closed_form_matches_term_by_term_sum(
            a in any::<i64>(),
            d in any::<i64>(),
            n in 0u64..=1_000,
        ) {
            let (a, d) = (i128::from(a), i128::from(d));
            let expected: i128 = (0..n).map(|k| a + i128::from(k) * d).sum();
            prop_assert_eq!(sum_arithmetic_series(a, d, n).unwrap(), expected);
        }

        #[test]
        fn zero_difference_is_repeated_first_term(
            a in 0i128..=1_000_000_000,
            n in 0u64..=1_000_000,
        ) {
            prop_assert_eq!(sum_arithmetic_series(a, 0, n).unwrap(), a * i128::from(n));
        }

        #[test]
        fn step_at_or_past_bound_counts_nothing(
            bound in 1u64..=u64::MAX,
            extra in 0u64..=1_000,
        ) {
            let step = bound.saturating_add(extra);
            prop_assert_eq!(count_multiples_below(step, bound).unwrap(), 0);
        }
    }
}
