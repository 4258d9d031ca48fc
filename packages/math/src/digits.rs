use crate::error::MathError;

/// Reverse the decimal digits of n. Returns None if the result overflows u64.
///
/// Example: reverse_digits(1230) = Some(321)
pub fn reverse_digits(mut n: u64) -> Option<u64> {
    let mut reversed: u64 = 0;
    while n > 0 {
        reversed = reversed.checked_mul(10)?.checked_add(n % 10)?;
        n /= 10;
    }
    Some(reversed)
}

/// True when n reads the same forwards and backwards in base 10.
pub fn is_palindrome(n: u64) -> bool {
    reverse_digits(n) == Some(n)
}

/// Largest product of `window` adjacent digits in a string of decimal digits.
///
/// Whitespace is ignored so that wrapped literals can be passed directly.
/// Returns `Ok(None)` when the input holds fewer than `window` digits.
///
/// # Example
///
/// ```
/// use math::digits::largest_adjacent_product;
///
/// assert_eq!(largest_adjacent_product("1239 4011", 2), Ok(Some(36)));
/// assert_eq!(largest_adjacent_product("12", 3), Ok(None));
/// ```
pub fn largest_adjacent_product(digits: &str, window: usize) -> Result<Option<u64>, MathError> {
    if window == 0 {
        return Err(MathError::zero("window"));
    }
    let digits = digits
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_digit(10).map(u64::from))
        .collect::<Option<Vec<u64>>>()
        .ok_or(MathError::InvalidArgument {
            name: "digits",
            reason: "must contain only decimal digits",
        })?;

    let mut largest = None;
    for run in digits.windows(window) {
        let product = run
            .iter()
            .try_fold(1u64, |acc, &d| acc.checked_mul(d))
            .ok_or(MathError::overflow("largest_adjacent_product"))?;
        largest = largest.max(Some(product));
    }
    Ok(largest)
}
