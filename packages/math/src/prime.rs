//! Prime number utilities: sieves, an incremental iterator, factorisation
//! and primality tests.

use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};

/// Iterator that generates prime numbers.
///
/// Maintains an internal list of found primes and checks each candidate
/// only against primes up to its square root.
///
/// # Example
///
/// ```
/// use math::prime::Primes;
///
/// let first_ten: Vec<u64> = Primes::new().take(10).collect();
/// assert_eq!(first_ten, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
/// ```
pub struct Primes {
    found: Vec<u64>,
    candidate: u64,
}

impl Primes {
    pub fn new() -> Self {
        Primes {
            found: Vec::new(),
            candidate: 2,
        }
    }
}

impl Default for Primes {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let c = self.candidate;
            self.candidate = c.checked_add(if c == 2 { 1 } else { 2 })?;

            let is_prime = self
                .found
                .iter()
                .take_while(|&&p| p <= c / p)
                .all(|&p| c % p != 0);

            if is_prime {
                self.found.push(c);
                return Some(c);
            }
        }
    }
}

/// Returns an iterator over prime numbers: 2, 3, 5, 7, 11, ...
pub fn primes() -> Primes {
    Primes::new()
}

/// Returns the nth prime number (1-indexed: nth_prime(1) = 2, nth_prime(2) = 3, ...).
///
/// Returns None if n is 0.
///
/// # Example
///
/// ```
/// use math::prime::nth_prime;
///
/// assert_eq!(nth_prime(1), Some(2));
/// assert_eq!(nth_prime(6), Some(13));
/// assert_eq!(nth_prime(0), None);
/// ```
pub fn nth_prime(n: usize) -> Option<u64> {
    if n == 0 {
        return None;
    }
    Primes::new().nth(n - 1)
}

/// Prime factors of `n` in ascending order, repeated by multiplicity.
///
/// Empty for 0 and 1.
///
/// # Example
///
/// ```
/// use math::prime::prime_factors;
///
/// assert_eq!(prime_factors(84), vec![2, 2, 3, 7]);
/// assert_eq!(prime_factors(13195), vec![5, 7, 13, 29]);
/// assert!(prime_factors(1).is_empty());
/// ```
pub fn prime_factors(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    if n < 2 {
        return factors;
    }

    let mut factor = 2;
    while factor <= n / factor {
        while n % factor == 0 {
            factors.push(factor);
            n /= factor;
        }
        factor += if factor == 2 { 1 } else { 2 };
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

/// Returns the largest prime factor of n.
///
/// Returns None if n < 2.
///
/// # Example
///
/// ```
/// use math::prime::largest_prime_factor;
///
/// assert_eq!(largest_prime_factor(84), Some(7)); // 84 = 2^2 * 3 * 7
/// assert_eq!(largest_prime_factor(2), Some(2));
/// assert_eq!(largest_prime_factor(1), None);
/// ```
pub fn largest_prime_factor(n: u64) -> Option<u64> {
    prime_factors(n).last().copied()
}

/// Check if a number is prime by trial division.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    (3..)
        .step_by(2)
        .take_while(|&i| i <= n / i)
        .all(|i| n % i != 0)
}

/// Deterministic Miller-Rabin test.
///
/// The first twelve primes as witnesses are enough for every `u64`.
///
/// # Example
///
/// ```
/// use math::prime::is_probable_prime;
///
/// assert!(is_probable_prime(18446744073709551557)); // largest u64 prime
/// assert!(!is_probable_prime(3215031751)); // strong pseudoprime to bases 2, 3, 5, 7
/// ```
pub fn is_probable_prime(n: u64) -> bool {
    const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

    if n < 2 {
        return false;
    }
    for &p in &WITNESSES {
        if n == p {
            return true;
        }
        if n % p == 0 {
            return false;
        }
    }

    // n - 1 = 2^r * s with s odd
    let r = (n - 1).trailing_zeros();
    let s = (n - 1) >> r;

    WITNESSES.iter().all(|&a| {
        let mut x = pow_mod(a, s, n);
        if x == 1 || x == n - 1 {
            return true;
        }
        for _ in 1..r {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                return true;
            }
        }
        false
    })
}

fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    (u128::from(a) * u128::from(b) % u128::from(m)) as u64
}

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

/// Finds all prime numbers less than a given limit `n`. (Sequential)
///
/// # Example
///
/// ```
/// use math::prime::primes_below;
///
/// assert_eq!(primes_below(20), vec![2, 3, 5, 7, 11, 13, 17, 19]);
/// ```
pub fn primes_below(n: u32) -> Vec<u32> {
    if n < 3 {
        return vec![];
    }
    let n_usize = n as usize;
    let mut sieve = vec![true; n_usize];
    sieve[0] = false;
    sieve[1] = false;

    let mut i = 2;
    while i * i < n_usize {
        if sieve[i] {
            for multiple in (i * i..n_usize).step_by(i) {
                sieve[multiple] = false;
            }
        }
        i += 1;
    }

    (2..n_usize)
        .filter_map(|i| if sieve[i] { Some(i as u32) } else { None })
        .collect()
}

/// Finds all prime numbers less than `n`, striking out multiples of each
/// base prime in parallel.
pub fn primes_below_parallel(n: u32) -> Vec<u32> {
    if n < 3 {
        return vec![];
    }
    let n_usize = n as usize;
    let sieve: Vec<AtomicBool> = (0..n_usize).map(|_| AtomicBool::new(true)).collect();
    sieve[0].store(false, Ordering::Relaxed);
    sieve[1].store(false, Ordering::Relaxed);

    let sqrt_n = (2..n_usize).take_while(|&i| i * i < n_usize).last().unwrap_or(1);

    (2..=sqrt_n).into_par_iter().for_each(|i| {
        // a composite i only repeats work its prime factors already do
        if sieve[i].load(Ordering::Relaxed) {
            for multiple in (i * i..n_usize).step_by(i) {
                sieve[multiple].store(false, Ordering::Relaxed);
            }
        }
    });

    (2..n_usize)
        .filter(|&i| sieve[i].load(Ordering::Relaxed))
        .map(|i| i as u32)
        .collect()
}
