use math::is_palindrome;

use crate::ProblemError;

/// PE4: Largest Palindrome Product
/// Find the largest palindrome made from the product of two 3-digit numbers.
pub fn solve() -> Result<String, ProblemError> {
    largest_palindrome_product(3)
        .map(|p| p.to_string())
        .ok_or(ProblemError::NoSolution(4))
}

/// Largest palindrome that is a product of two `n_digits`-digit numbers.
fn largest_palindrome_product(n_digits: u32) -> Option<u64> {
    let lower = 10u64.pow(n_digits - 1);
    let upper = 10u64.pow(n_digits);
    let mut largest = None;

    for i in (lower..upper).rev() {
        for j in (lower..=i).rev() {
            let product = i * j;
            if Some(product) <= largest {
                break;
            }
            if is_palindrome(product) {
                largest = Some(product);
            }
        }
    }
    largest
}
