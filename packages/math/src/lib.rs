pub mod digits;
pub mod divisor;
pub mod error;
pub mod fibonacci;
pub mod prime;
pub mod series;

pub use digits::{is_palindrome, largest_adjacent_product, reverse_digits};
pub use divisor::{gcd, is_coprime, lcm};
pub use error::MathError;
pub use fibonacci::{EvenFibonacci, Fibonacci, even_fibonacci_sum, fibonacci, nth_fibonacci};
pub use prime::{
    Primes, is_prime, is_probable_prime, largest_prime_factor, nth_prime, prime_factors, primes,
    primes_below, primes_below_parallel,
};
pub use series::{
    SeriesParameters, count_multiples_below, count_of_either_multiple, sum_arithmetic_series,
    sum_multiples_below, sum_multiples_below_enumerated, sum_multiples_below_parallel,
    sum_of_either_multiple, sum_of_either_multiple_enumerated, sum_of_squares,
};
