/// Greatest common divisor by Euclid's algorithm. `gcd(0, 0)` is 0.
///
/// # Example
///
/// ```
/// use math::divisor::gcd;
///
/// assert_eq!(gcd(12, 18), 6);
/// assert_eq!(gcd(7, 0), 7);
/// ```
pub fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

/// Least common multiple, widened to `u128` so that it cannot overflow.
///
/// Returns 0 if either input is 0.
///
/// # Example
///
/// ```
/// use math::divisor::lcm;
///
/// assert_eq!(lcm(3, 5), 15);
/// assert_eq!(lcm(4, 6), 12);
/// assert_eq!(lcm(u64::MAX, u64::MAX - 1), u64::MAX as u128 * (u64::MAX - 1) as u128);
/// ```
pub fn lcm(a: u64, b: u64) -> u128 {
    if a == 0 || b == 0 {
        return 0;
    }
    u128::from(a / gcd(a, b)) * u128::from(b)
}

/// True when `a` and `b` share no factor other than 1, i.e. `lcm(a, b) == a * b`.
pub fn is_coprime(a: u64, b: u64) -> bool {
    gcd(a, b) == 1
}
